//! # showcase_camera - Camera Motion for the Product Showcase
//!
//! Everything that moves or constrains the virtual camera:
//! - Perspective camera with look-at view matrices
//! - Easing curves for animated transitions
//! - The transition rig: exclusive ownership of in-flight camera moves
//! - Orbit-style drag controls as the user-input fallback
//!
//! ## Example
//!
//! ```
//! use showcase_camera::prelude::*;
//! use glam::Vec3;
//!
//! let mut rig = CameraRig::new(Camera::showcase());
//!
//! // Start an animated move toward the side of the product
//! let id = rig.begin_move(
//!     CameraMove::new(Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO, 5.0)
//!         .with_easing(EasingFunction::QuadIn),
//! );
//!
//! // Tick from the render loop until the move reports completion
//! while rig.update(1.0 / 60.0) != Some(id) {}
//! ```

pub mod camera;
pub mod controls;
pub mod easing;
pub mod transition;

pub use camera::{Camera, Projection};
pub use controls::OrbitControls;
pub use easing::EasingFunction;
pub use transition::{CameraMove, CameraRig, TransitionId};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::camera::{Camera, Projection};
    pub use crate::controls::OrbitControls;
    pub use crate::easing::EasingFunction;
    pub use crate::transition::{CameraMove, CameraRig, TransitionId};
}

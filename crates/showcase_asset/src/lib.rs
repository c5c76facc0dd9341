//! # showcase_asset - Model Loading and Readiness Signalling
//!
//! The showcase cannot start its camera sequence until the 3D model has
//! streamed in. This crate bridges that gap:
//! - A background GLTF loader delivering results over a channel, pumped once
//!   per frame from the render loop
//! - [`AssetGate`]: a one-shot readiness gate whose callbacks fire exactly
//!   once, in registration order, with no missed-signal race
//!
//! ## Example
//!
//! ```no_run
//! use showcase_asset::prelude::*;
//!
//! let gate = AssetGate::new();
//! gate.on_ready(|| println!("model is in the scene graph"));
//!
//! let mut loader = ModelLoader::new();
//! loader.spawn_load("models/car/scene.gltf", 0.005);
//!
//! // From the render loop:
//! loop {
//!     if let Some(result) = loader.poll(&gate) {
//!         // gate is now Ready or Failed; callbacks already ran
//!         break;
//!     }
//! }
//! ```

pub mod gate;
pub mod loader;

pub use gate::{AssetGate, GateState};
pub use loader::{LoadError, LoadState, ModelAsset, ModelLoader};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::gate::{AssetGate, GateState};
    pub use crate::loader::{LoadError, LoadState, ModelAsset, ModelLoader};
}

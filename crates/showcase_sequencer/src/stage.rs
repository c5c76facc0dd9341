//! The seam between the sequencer and the rendering side
//!
//! The sequencer only requests: camera moves, drag-control unlocks, overlay
//! reveals. It never implements any of them and never touches the camera or
//! scene graph directly; the renderer owns those.

use showcase_camera::{CameraMove, TransitionId};

/// What the sequencer needs from the rendering side
pub trait Stage {
    /// Start moving the camera toward a target pose, returning a handle to
    /// the in-flight move. Any previous move is superseded.
    fn begin_move(&mut self, mv: CameraMove) -> TransitionId;

    /// Stop an in-flight move immediately. After this returns the move must
    /// not write the camera again and must never report completion.
    /// Cancelling a stale handle is a no-op.
    fn cancel_move(&mut self, id: TransitionId);

    /// Hand the camera over to user drag-rotation with the given auto-rotate
    /// speed and zoom distance clamp.
    fn enable_user_rotation(&mut self, auto_rotate_speed: f32, min_distance: f32, max_distance: f32);

    /// Reveal a named overlay element.
    fn reveal_overlay(&mut self, name: &str);
}

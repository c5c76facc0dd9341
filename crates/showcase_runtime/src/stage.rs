//! The concrete stage backing the sequencer
//!
//! Owns the camera rig, the orbit controls, and the set of visible overlays.
//! The single-writer rule for the camera lives here: the rig is ticked first
//! each frame, and the orbit controls only write the camera on frames where
//! no transition is in flight.

use showcase_camera::{Camera, CameraMove, CameraRig, OrbitControls, TransitionId};
use showcase_sequencer::Stage;

/// Camera, controls, and overlay state for the showcase
pub struct ShowcaseStage {
    rig: CameraRig,
    controls: OrbitControls,
    overlays: Vec<String>,
}

impl Default for ShowcaseStage {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowcaseStage {
    /// Create a stage with the showcase camera and locked controls
    pub fn new() -> Self {
        Self {
            rig: CameraRig::new(Camera::showcase()),
            controls: OrbitControls::locked(),
            overlays: Vec::new(),
        }
    }

    /// The camera in its current pose
    pub fn camera(&self) -> &Camera {
        self.rig.camera()
    }

    /// The orbit controls
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    /// Feed a pointer drag to the orbit controls
    pub fn handle_drag(&mut self, dx: f32, dy: f32) {
        self.controls.handle_drag(dx, dy);
    }

    /// Feed a scroll delta to the orbit controls
    pub fn handle_scroll(&mut self, delta: f32) {
        self.controls.handle_scroll(delta);
    }

    /// Overlays revealed so far, in reveal order
    pub fn overlays(&self) -> &[String] {
        &self.overlays
    }

    /// Whether a named overlay has been revealed
    pub fn is_overlay_visible(&self, name: &str) -> bool {
        self.overlays.iter().any(|o| o == name)
    }

    /// Advance the frame: tick the rig, then the controls if the rig is idle
    ///
    /// Returns the handle of a transition that completed this frame, for the
    /// caller to forward to the sequencer.
    pub fn update(&mut self, dt: f32) -> Option<TransitionId> {
        let completed = self.rig.update(dt);
        if !self.rig.is_moving() {
            self.controls.update(dt, self.rig.camera_mut());
        }
        completed
    }
}

impl Stage for ShowcaseStage {
    fn begin_move(&mut self, mv: CameraMove) -> TransitionId {
        self.rig.begin_move(mv)
    }

    fn cancel_move(&mut self, id: TransitionId) {
        self.rig.cancel_move(id);
    }

    fn enable_user_rotation(&mut self, auto_rotate_speed: f32, min_distance: f32, max_distance: f32) {
        self.controls
            .unlock_rotation(auto_rotate_speed, min_distance, max_distance);
    }

    fn reveal_overlay(&mut self, name: &str) {
        if self.is_overlay_visible(name) {
            return;
        }
        log::info!("revealing overlay '{}'", name);
        self.overlays.push(name.to_owned());
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_transition_owns_the_camera() {
        let mut stage = ShowcaseStage::new();
        stage.enable_user_rotation(2.0, 1.0, 5.0);

        let id = stage.begin_move(CameraMove::new(Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO, 1.0));
        stage.handle_drag(500.0, 500.0);
        stage.update(0.5);

        // Mid-transition the camera sits on the tween path; drag input is
        // held back, not applied
        let expected = Vec3::new(2.0, 2.0, 2.0).lerp(Vec3::new(2.0, 1.0, 0.0), 0.5);
        assert!((stage.camera().position - expected).length() < 1e-4);

        assert_eq!(stage.update(0.6), Some(id));
    }

    #[test]
    fn test_controls_take_over_after_completion() {
        let mut stage = ShowcaseStage::new();
        let id = stage.begin_move(CameraMove::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO, 0.5));
        assert_eq!(stage.update(1.0), Some(id));

        stage.enable_user_rotation(0.0, 1.0, 5.0);
        stage.handle_drag(30.0, 0.0);
        let before = stage.camera().position;
        stage.update(1.0 / 60.0);

        assert!((stage.camera().position - before).length() > 1e-4);
        assert!((stage.camera().distance_to_target() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_overlays_deduplicate() {
        let mut stage = ShowcaseStage::new();
        stage.reveal_overlay("interior-specs");
        stage.reveal_overlay("interior-specs");
        stage.reveal_overlay("badge");

        assert_eq!(stage.overlays(), ["interior-specs", "badge"]);
        assert!(stage.is_overlay_visible("badge"));
        assert!(!stage.is_overlay_visible("pricing"));
    }

    #[test]
    fn test_cancelled_move_frees_the_camera_for_controls() {
        let mut stage = ShowcaseStage::new();
        stage.enable_user_rotation(2.0, 1.0, 5.0);

        let id = stage.begin_move(CameraMove::new(Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO, 5.0));
        stage.update(0.1);
        stage.cancel_move(id);

        // No completion is ever reported, but auto-rotate runs again
        let before = stage.camera().position;
        assert_eq!(stage.update(1.0), None);
        assert!((stage.camera().position - before).length() > 1e-5);
    }
}

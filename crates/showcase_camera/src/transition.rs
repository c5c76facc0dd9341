//! Camera transitions and the rig that owns them
//!
//! A [`CameraMove`] describes one animated interpolation of the camera toward
//! a target pose. The [`CameraRig`] holds the camera and at most one in-flight
//! move at a time: beginning a new move drops the previous one before the new
//! handle exists, and a dropped move never writes the camera again and never
//! reports completion. Completion is reported exactly once, from `update`,
//! so side effects always run strictly after the move has finished.

use glam::Vec3;

use crate::camera::Camera;
use crate::easing::EasingFunction;

/// Transition descriptor: where the camera should end up and how to get there
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraMove {
    /// Target camera position
    pub position: Vec3,
    /// Target look-at point
    pub look_at: Vec3,
    /// Duration in seconds
    pub duration: f32,
    /// Easing curve applied over the duration
    pub easing: EasingFunction,
}

impl CameraMove {
    /// Create a linear move toward a target pose
    pub fn new(position: Vec3, look_at: Vec3, duration: f32) -> Self {
        Self {
            position,
            look_at,
            duration,
            easing: EasingFunction::default(),
        }
    }

    /// Set easing curve (builder pattern)
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }
}

/// Handle identifying one in-flight transition
///
/// Ids are never reused within a rig, so a stale handle can be cancelled or
/// compared safely after the move it referred to has been superseded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionId(u64);

impl TransitionId {
    /// Get raw id value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// One in-flight move with its captured start pose
#[derive(Clone, Copy, Debug)]
struct ActiveMove {
    id: TransitionId,
    mv: CameraMove,
    start_position: Vec3,
    start_look_at: Vec3,
    elapsed: f32,
}

/// Exclusive owner of camera writes during transitions
#[derive(Debug)]
pub struct CameraRig {
    camera: Camera,
    active: Option<ActiveMove>,
    next_id: u64,
}

impl CameraRig {
    /// Create a rig around a camera
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            active: None,
            next_id: 1,
        }
    }

    /// Get the camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Get the camera mutably
    ///
    /// Callers must not write the camera while a move is in flight; check
    /// [`is_moving`](Self::is_moving) first.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Id of the in-flight move, if any
    pub fn active_move(&self) -> Option<TransitionId> {
        self.active.map(|a| a.id)
    }

    /// Check whether a move is in flight
    pub fn is_moving(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a move toward a target pose, superseding any in-flight move
    ///
    /// The current camera pose is captured as the start of the interpolation.
    /// The superseded move is dropped immediately: it will not write the
    /// camera again and its completion is never reported.
    pub fn begin_move(&mut self, mv: CameraMove) -> TransitionId {
        if let Some(prev) = self.active.take() {
            log::debug!("superseding camera move {}", prev.id.raw());
        }

        let id = TransitionId(self.next_id);
        self.next_id += 1;

        self.active = Some(ActiveMove {
            id,
            mv,
            start_position: self.camera.position,
            start_look_at: self.camera.target,
            elapsed: 0.0,
        });

        id
    }

    /// Cancel an in-flight move by handle
    ///
    /// Stops any further camera writes by that move immediately; its
    /// completion is never reported. Cancelling a stale handle is a no-op.
    pub fn cancel_move(&mut self, id: TransitionId) {
        match self.active {
            Some(active) if active.id == id => {
                log::debug!("cancelled camera move {}", id.raw());
                self.active = None;
            }
            _ => {}
        }
    }

    /// Advance the in-flight move by `dt` seconds
    ///
    /// Returns the move's handle exactly once, on the tick it completes.
    /// Zero-duration moves snap to their target and complete on the first
    /// update after they begin.
    pub fn update(&mut self, dt: f32) -> Option<TransitionId> {
        let active = self.active.as_mut()?;

        active.elapsed += dt;
        let t = if active.mv.duration > 0.0 {
            (active.elapsed / active.mv.duration).min(1.0)
        } else {
            1.0
        };
        let eased = active.mv.easing.apply(t);

        self.camera.position = active.start_position.lerp(active.mv.position, eased);
        self.camera.target = active.start_look_at.lerp(active.mv.look_at, eased);

        if t >= 1.0 {
            let finished = self.active.take()?;
            log::debug!("camera move {} complete", finished.id.raw());
            Some(finished.id)
        } else {
            None
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rig() -> CameraRig {
        CameraRig::new(
            Camera::showcase()
                .with_position(Vec3::ZERO)
                .with_target(Vec3::ZERO),
        )
    }

    #[test]
    fn test_move_interpolates_position() {
        let mut rig = test_rig();
        rig.begin_move(CameraMove::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0));

        assert!(rig.update(0.5).is_none());
        assert!((rig.camera().position.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_move_completes_exactly_once() {
        let mut rig = test_rig();
        let id = rig.begin_move(CameraMove::new(Vec3::new(2.0, 1.0, 0.0), Vec3::ZERO, 1.0));

        assert_eq!(rig.update(1.5), Some(id));
        assert_eq!(rig.camera().position, Vec3::new(2.0, 1.0, 0.0));

        // No further completion reports, no further writes
        assert_eq!(rig.update(1.0), None);
        assert!(!rig.is_moving());
    }

    #[test]
    fn test_eased_move_lands_on_target() {
        let mut rig = test_rig();
        let id = rig.begin_move(
            CameraMove::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.0, 1.0, 0.0), 2.0)
                .with_easing(EasingFunction::QuadIn),
        );

        let mut done = None;
        for _ in 0..300 {
            if let Some(finished) = rig.update(1.0 / 60.0) {
                done = Some(finished);
                break;
            }
        }

        assert_eq!(done, Some(id));
        assert!((rig.camera().position - Vec3::new(0.0, 3.0, 0.0)).length() < 1e-4);
        assert!((rig.camera().target - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_begin_move_supersedes_previous() {
        let mut rig = test_rig();
        let first = rig.begin_move(CameraMove::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0));
        rig.update(0.5);

        let second = rig.begin_move(CameraMove::new(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, 1.0));
        assert_ne!(first, second);
        assert_eq!(rig.active_move(), Some(second));

        // The first move never completes; the second starts from the pose the
        // first one reached
        let pos_at_switch = rig.camera().position;
        assert!((pos_at_switch.x - 5.0).abs() < 1e-5);

        assert_eq!(rig.update(2.0), Some(second));
        assert_eq!(rig.camera().position, Vec3::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn test_cancel_stops_camera_writes() {
        let mut rig = test_rig();
        let id = rig.begin_move(CameraMove::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0));
        rig.update(0.25);
        let frozen = rig.camera().position;

        rig.cancel_move(id);
        assert!(!rig.is_moving());

        // Updates after cancellation leave the camera untouched
        assert_eq!(rig.update(1.0), None);
        assert_eq!(rig.camera().position, frozen);
    }

    #[test]
    fn test_cancel_stale_handle_is_noop() {
        let mut rig = test_rig();
        let first = rig.begin_move(CameraMove::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 1.0));
        let second = rig.begin_move(CameraMove::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, 1.0));

        rig.cancel_move(first);
        assert_eq!(rig.active_move(), Some(second));
    }

    #[test]
    fn test_zero_duration_move_snaps() {
        let mut rig = test_rig();
        let id = rig.begin_move(CameraMove::new(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO, 0.0));

        assert_eq!(rig.update(0.016), Some(id));
        assert_eq!(rig.camera().position, Vec3::new(5.0, 5.0, 5.0));
    }
}

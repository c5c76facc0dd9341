//! Orbit-style drag controls
//!
//! The user-input fallback once a scene unlocks rotation: the camera orbits a
//! fixed target on a sphere, with optional damping, auto-rotation, and
//! distance clamping. Axes (rotate/pan/zoom) are individually gated and all
//! start disabled; the sequencer unlocks them as a scene side effect.
//!
//! The controls never write the camera while a transition owns it; the caller
//! is responsible for ticking them only when the rig reports no in-flight
//! move.

use glam::Vec3;

use crate::camera::Camera;

/// Pitch limit keeping the orbit off the poles
const PITCH_LIMIT: f32 = 1.4;

/// Orbit controls for user-driven camera movement
#[derive(Clone, Debug)]
pub struct OrbitControls {
    /// Master enable; when false all input and updates are ignored
    pub enabled: bool,
    /// Allow drag rotation
    pub enable_rotate: bool,
    /// Allow panning the orbit target
    pub enable_pan: bool,
    /// Allow scroll zoom
    pub enable_zoom: bool,
    /// Rotate continuously without input
    pub auto_rotate: bool,
    /// Auto-rotation speed; 2.0 is one full orbit per 30 seconds
    pub auto_rotate_speed: f32,
    /// Radians of rotation per pixel of drag
    pub rotate_speed: f32,
    /// World units of zoom per scroll step
    pub zoom_speed: f32,
    /// World units of pan per pixel of drag
    pub pan_speed: f32,
    /// Velocity decay per frame at 60 fps (0 = no damping, 1 = immediate stop)
    pub damping: f32,
    /// Minimum orbit distance
    pub min_distance: f32,
    /// Maximum orbit distance
    pub max_distance: f32,
    /// Orbit center
    pub target: Vec3,

    yaw_velocity: f32,
    pitch_velocity: f32,
    zoom_pending: f32,
    pan_pending: (f32, f32),
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: false,
            enable_rotate: false,
            enable_pan: false,
            enable_zoom: false,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            rotate_speed: 0.01,
            zoom_speed: 0.5,
            pan_speed: 0.01,
            damping: 0.1,
            min_distance: 0.5,
            max_distance: 10.0,
            target: Vec3::ZERO,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
            zoom_pending: 0.0,
            pan_pending: (0.0, 0.0),
        }
    }
}

impl OrbitControls {
    /// Create controls with all axes locked
    pub fn locked() -> Self {
        Self::default()
    }

    /// Unlock drag rotation with auto-rotate and a distance clamp
    ///
    /// Zoom and pan stay locked; the showcase only hands the user the orbit.
    pub fn unlock_rotation(&mut self, auto_rotate_speed: f32, min_distance: f32, max_distance: f32) {
        self.enabled = true;
        self.enable_rotate = true;
        self.auto_rotate = true;
        self.auto_rotate_speed = auto_rotate_speed;
        self.min_distance = min_distance;
        self.max_distance = max_distance;
        log::info!(
            "orbit rotation unlocked (auto-rotate {}, distance {}..{})",
            auto_rotate_speed,
            min_distance,
            max_distance
        );
    }

    /// Feed a pointer drag delta in pixels
    pub fn handle_drag(&mut self, dx: f32, dy: f32) {
        if !self.enabled || !self.enable_rotate {
            return;
        }
        self.yaw_velocity -= dx * self.rotate_speed;
        self.pitch_velocity -= dy * self.rotate_speed;
    }

    /// Feed a scroll delta (positive = zoom in)
    pub fn handle_scroll(&mut self, delta: f32) {
        if !self.enabled || !self.enable_zoom {
            return;
        }
        self.zoom_pending -= delta * self.zoom_speed;
    }

    /// Feed a pan drag delta in pixels
    pub fn handle_pan(&mut self, dx: f32, dy: f32) {
        if !self.enabled || !self.enable_pan {
            return;
        }
        self.pan_pending.0 += dx;
        self.pan_pending.1 += dy;
    }

    /// Apply accumulated input and auto-rotation to the camera
    pub fn update(&mut self, dt: f32, camera: &mut Camera) {
        if !self.enabled {
            return;
        }

        // Pan shifts the orbit center in the camera plane
        let (pan_x, pan_y) = core::mem::take(&mut self.pan_pending);
        if pan_x != 0.0 || pan_y != 0.0 {
            let forward = camera.forward();
            let right = forward.cross(Vec3::Y).normalize_or_zero();
            let up = right.cross(forward);
            self.target += (right * -pan_x + up * pan_y) * self.pan_speed;
        }

        let offset = camera.position - self.target;
        let mut radius = offset.length().max(1e-4);
        let mut yaw = offset.x.atan2(offset.z);
        let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

        yaw += self.yaw_velocity;
        pitch = (pitch + self.pitch_velocity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        if self.auto_rotate {
            // Matches the usual orbit convention: speed 2.0 = 30s per orbit
            yaw += self.auto_rotate_speed * core::f32::consts::TAU / 60.0 * dt;
        }

        radius = (radius + core::mem::take(&mut self.zoom_pending))
            .clamp(self.min_distance, self.max_distance);

        camera.position = self.target
            + Vec3::new(
                radius * pitch.cos() * yaw.sin(),
                radius * pitch.sin(),
                radius * pitch.cos() * yaw.cos(),
            );
        camera.target = self.target;

        let decay = (1.0 - self.damping).clamp(0.0, 1.0).powf(dt * 60.0);
        self.yaw_velocity *= decay;
        self.pitch_velocity *= decay;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(position: Vec3) -> Camera {
        Camera::showcase().with_position(position).with_target(Vec3::ZERO)
    }

    #[test]
    fn test_locked_controls_ignore_everything() {
        let mut controls = OrbitControls::locked();
        let mut camera = camera_at(Vec3::new(0.0, 0.0, 2.0));
        let before = camera.position;

        controls.handle_drag(100.0, 50.0);
        controls.handle_scroll(3.0);
        controls.update(1.0 / 60.0, &mut camera);

        assert_eq!(camera.position, before);
    }

    #[test]
    fn test_drag_orbits_at_constant_radius() {
        let mut controls = OrbitControls::locked();
        controls.unlock_rotation(0.0, 1.0, 5.0);
        controls.auto_rotate = false;

        let mut camera = camera_at(Vec3::new(0.0, 0.0, 2.0));
        controls.handle_drag(30.0, 0.0);
        controls.update(1.0 / 60.0, &mut camera);

        assert!((camera.distance_to_target() - 2.0).abs() < 1e-4);
        assert!(camera.position.x.abs() > 1e-3); // yaw moved off the Z axis
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_auto_rotate_advances_yaw() {
        let mut controls = OrbitControls::locked();
        controls.unlock_rotation(2.0, 1.0, 5.0);

        let mut camera = camera_at(Vec3::new(0.0, 0.0, 2.0));
        // 15 seconds at speed 2.0 is half an orbit
        for _ in 0..(15 * 60) {
            controls.update(1.0 / 60.0, &mut camera);
        }

        assert!((camera.position.z + 2.0).abs() < 0.05);
        assert!((camera.distance_to_target() - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_respects_distance_clamp() {
        let mut controls = OrbitControls::locked();
        controls.unlock_rotation(0.0, 1.0, 2.0);
        controls.auto_rotate = false;
        controls.enable_zoom = true;

        let mut camera = camera_at(Vec3::new(0.0, 0.0, 1.5));

        // Zoom far past the minimum
        controls.handle_scroll(100.0);
        controls.update(1.0 / 60.0, &mut camera);
        assert!((camera.distance_to_target() - 1.0).abs() < 1e-4);

        // And far past the maximum
        controls.handle_scroll(-100.0);
        controls.update(1.0 / 60.0, &mut camera);
        assert!((camera.distance_to_target() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_is_clamped_off_the_poles() {
        let mut controls = OrbitControls::locked();
        controls.unlock_rotation(0.0, 1.0, 5.0);
        controls.auto_rotate = false;
        controls.damping = 1.0; // no inertia between updates

        let mut camera = camera_at(Vec3::new(0.0, 0.0, 2.0));
        for _ in 0..100 {
            controls.handle_drag(0.0, -500.0);
            controls.update(1.0 / 60.0, &mut camera);
        }

        let pitch = (camera.position.y / camera.distance_to_target()).asin();
        assert!(pitch <= PITCH_LIMIT + 1e-3);
    }

    #[test]
    fn test_pan_moves_orbit_target() {
        let mut controls = OrbitControls::locked();
        controls.unlock_rotation(0.0, 1.0, 5.0);
        controls.auto_rotate = false;
        controls.enable_pan = true;

        let mut camera = camera_at(Vec3::new(0.0, 0.0, 2.0));
        controls.handle_pan(0.0, 50.0);
        controls.update(1.0 / 60.0, &mut camera);

        assert!(controls.target.y.abs() > 1e-3);
        assert_eq!(camera.target, controls.target);
    }
}

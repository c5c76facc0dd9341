//! Camera component for the showcase viewpoint
//!
//! A single perspective camera orbiting/looking at the product. The render
//! loop reads its matrices every frame; writes go exclusively through the
//! transition rig or the orbit controls, never both at once.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera projection mode
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub enum Projection {
    /// Perspective projection with field of view
    Perspective {
        /// Vertical field of view in radians
        fov_y: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        // 60 degrees vertical FOV
        Projection::Perspective {
            fov_y: core::f32::consts::FRAC_PI_3,
        }
    }
}

impl Projection {
    /// Create perspective projection with FOV in degrees
    pub fn perspective_degrees(fov_degrees: f32) -> Self {
        Projection::Perspective {
            fov_y: fov_degrees.to_radians(),
        }
    }

    /// Get the FOV in radians
    pub fn fov_radians(&self) -> f32 {
        match self {
            Projection::Perspective { fov_y } => *fov_y,
        }
    }
}

/// Camera for the showcase viewpoint
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    /// World-space position
    pub position: Vec3,
    /// Look-at target (the product sits at the origin)
    pub target: Vec3,
    /// Projection mode
    pub projection: Projection,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.0, 3.0),
            target: Vec3::ZERO,
            projection: Projection::default(),
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Create a perspective camera with FOV in degrees
    pub fn perspective(fov_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            projection: Projection::perspective_degrees(fov_degrees),
            near,
            far,
            ..Default::default()
        }
    }

    /// The showcase's starting camera: 75 degree FOV, close clip planes,
    /// positioned on the front-upper diagonal looking at the origin
    pub fn showcase() -> Self {
        Self {
            position: Vec3::new(2.0, 2.0, 2.0),
            ..Self::perspective(75.0, 0.01, 100.0)
        }
    }

    /// Set position (builder pattern)
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set look-at target (builder pattern)
    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }

    /// Compute the view matrix (right-handed, Y up)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Compute the projection matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.projection.fov_radians(), aspect, self.near, self.far)
    }

    /// Compute the combined view-projection matrix
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Unit vector from the camera toward its target
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Distance between the camera and its look-at target
    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_camera_defaults() {
        let camera = Camera::showcase();

        assert_eq!(camera.position, Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(camera.target, Vec3::ZERO);
        assert!((camera.near - 0.01).abs() < 1e-6);
        assert!((camera.far - 100.0).abs() < 1e-6);
        assert!((camera.projection.fov_radians() - 75.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_looks_at_target() {
        let camera = Camera::showcase()
            .with_position(Vec3::new(0.0, 0.0, 5.0))
            .with_target(Vec3::ZERO);

        // The target should land on the negative Z axis in view space
        let view = camera.view_matrix();
        let target_view = view.transform_point3(Vec3::ZERO);
        assert!(target_view.x.abs() < 1e-5);
        assert!(target_view.y.abs() < 1e-5);
        assert!((target_view.z + 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_forward_and_distance() {
        let camera = Camera::showcase()
            .with_position(Vec3::new(3.0, 0.0, 0.0))
            .with_target(Vec3::ZERO);

        assert!((camera.forward() - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
        assert!((camera.distance_to_target() - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_matrix_perspective() {
        let camera = Camera::perspective(60.0, 0.1, 100.0);
        let proj = camera.projection_matrix(16.0 / 9.0);

        let cols = proj.to_cols_array_2d();
        assert!(cols[0][0] > 0.0); // X scale
        assert!(cols[1][1] > 0.0); // Y scale
        assert!((cols[2][3] - (-1.0)).abs() < 1e-6); // Perspective divide
    }
}

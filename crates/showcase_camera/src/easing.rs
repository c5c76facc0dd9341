//! Easing functions for camera transitions
//!
//! Curve names are serializable so scene catalogs can reference them
//! directly (e.g. `easing = "quad_in"` in a TOML catalog).

use serde::{Deserialize, Serialize};

/// Easing functions for camera transitions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Quadratic ease in (slow start)
    QuadIn,
    /// Quadratic ease out (slow end)
    QuadOut,
    /// Quadratic ease in and out
    QuadInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
    /// Sinusoidal ease in and out
    SineInOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 - 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadIn => t * t,
            EasingFunction::QuadOut => t * (2.0 - t),
            EasingFunction::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingFunction::CubicIn => t * t * t,
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::SineInOut => 0.5 - 0.5 * (core::f32::consts::PI * t).cos(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Scene definitions and the ordered catalog
//!
//! A [`Scene`] is a named camera configuration: where the camera should end
//! up, how long the transition takes, which easing curve it follows, and the
//! side effect to run once the transition completes. Scenes are immutable
//! after the catalog is built.
//!
//! Catalogs can be declared in TOML, mirroring how the rest of the scene
//! content is data-driven:
//!
//! ```toml
//! [[scenes]]
//! name = "intro"
//! position = [2.0, 1.0, 0.0]
//! duration = 5.0
//! easing = "quad_in"
//! on_complete = { kind = "enable_user_rotation", auto_rotate_speed = 0.5, min_distance = 1.0, max_distance = 2.0 }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use showcase_camera::{CameraMove, EasingFunction};

use crate::error::CatalogError;

/// Side effect run when a scene's transition completes
///
/// Never fired for a transition that was superseded before completing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneEffect {
    /// No side effect
    #[default]
    None,
    /// Hand the camera over to user drag-rotation
    EnableUserRotation {
        /// Auto-rotate speed; 2.0 is one orbit per 30 seconds
        auto_rotate_speed: f32,
        /// Closest the user may zoom
        min_distance: f32,
        /// Farthest the user may zoom
        max_distance: f32,
    },
    /// Reveal a named overlay element
    RevealOverlay {
        /// Overlay identifier
        overlay: String,
    },
}

/// A named camera scene with its transition descriptor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique name within the catalog
    pub name: String,
    /// Target camera position
    pub position: [f32; 3],
    /// Target look-at point
    #[serde(default)]
    pub look_at: [f32; 3],
    /// Transition duration in seconds
    pub duration: f32,
    /// Easing curve for the transition
    #[serde(default)]
    pub easing: EasingFunction,
    /// Side effect on transition completion
    #[serde(default)]
    pub on_complete: SceneEffect,
}

impl Scene {
    /// Create a scene looking at the origin with linear easing
    pub fn new(name: impl Into<String>, position: [f32; 3], duration: f32) -> Self {
        Self {
            name: name.into(),
            position,
            look_at: [0.0; 3],
            duration,
            easing: EasingFunction::default(),
            on_complete: SceneEffect::default(),
        }
    }

    /// Set look-at point (builder pattern)
    pub fn with_look_at(mut self, look_at: [f32; 3]) -> Self {
        self.look_at = look_at;
        self
    }

    /// Set easing curve (builder pattern)
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Set completion side effect (builder pattern)
    pub fn with_effect(mut self, effect: SceneEffect) -> Self {
        self.on_complete = effect;
        self
    }

    /// The camera transition this scene describes
    pub fn camera_move(&self) -> CameraMove {
        CameraMove::new(
            Vec3::from(self.position),
            Vec3::from(self.look_at),
            self.duration,
        )
        .with_easing(self.easing)
    }
}

/// TOML file shape for a catalog
#[derive(Deserialize)]
struct CatalogFile {
    scenes: Vec<Scene>,
}

/// Ordered, non-empty sequence of uniquely named scenes
///
/// Defines "next scene" order; advancing past the last entry wraps to the
/// first.
#[derive(Clone, Debug, Serialize)]
pub struct SceneCatalog {
    scenes: Vec<Scene>,
}

impl SceneCatalog {
    /// Build a catalog, validating it is non-empty with unique names
    pub fn new(scenes: Vec<Scene>) -> Result<Self, CatalogError> {
        if scenes.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, scene) in scenes.iter().enumerate() {
            if scenes[..i].iter().any(|s| s.name == scene.name) {
                return Err(CatalogError::DuplicateName(scene.name.clone()));
            }
        }
        Ok(Self { scenes })
    }

    /// Parse a catalog from TOML
    pub fn from_toml_str(toml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(toml)?;
        Self::new(file.scenes)
    }

    /// The built-in car showcase catalog: intro, overhead, inside
    ///
    /// The intro pulls the camera to the side of the car over five seconds
    /// and then hands the user the orbit with a tight distance clamp.
    pub fn showcase() -> Self {
        let scenes = vec![
            Scene::new("intro", [2.0, 1.0, 0.0], 5.0)
                .with_easing(EasingFunction::QuadIn)
                .with_effect(SceneEffect::EnableUserRotation {
                    auto_rotate_speed: 0.5,
                    min_distance: 1.0,
                    max_distance: 2.0,
                }),
            Scene::new("overhead", [0.0, 3.5, 0.5], 3.0)
                .with_easing(EasingFunction::QuadInOut),
            Scene::new("inside", [0.35, 0.85, 0.1], 2.5)
                .with_look_at([0.0, 0.8, -1.0])
                .with_easing(EasingFunction::SineInOut)
                .with_effect(SceneEffect::RevealOverlay {
                    overlay: "interior-specs".into(),
                }),
        ];
        // Statically valid: non-empty, names unique
        Self { scenes }
    }

    /// Number of scenes
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// A catalog is never empty; here for completeness
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// All scenes in order
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Scene at a catalog index
    pub fn scene_at(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    /// Look up a scene by name
    pub fn get(&self, name: &str) -> Option<&Scene> {
        self.scenes.iter().find(|s| s.name == name)
    }

    /// Index of a scene by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.scenes.iter().position(|s| s.name == name)
    }

    /// The index after `index`, wrapping past the end
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.scenes.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Background GLTF model loading
//!
//! The model is imported off-thread so the render loop never blocks on disk
//! or decode. Completion is delivered over a channel and pumped by
//! [`ModelLoader::poll`] once per frame, which also resolves the supplied
//! [`AssetGate`](crate::gate::AssetGate) so gate callbacks always run on the
//! frame thread.

use std::path::{Path, PathBuf};
use std::thread;

use crossbeam_channel::{bounded, Receiver};
use glam::Vec3;
use thiserror::Error;

use crate::gate::AssetGate;

/// Load state for the showcase model
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// No load requested yet
    NotLoaded,
    /// Load in flight on the background thread
    Loading,
    /// Model decoded and summarized
    Loaded,
    /// Load failed
    Failed,
}

/// Errors surfaced by the model loader
///
/// Not recovered here; the caller decides retry or fallback UI.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LoadError {
    /// File could not be read or decoded
    #[error("failed to import '{path}': {message}")]
    Import { path: String, message: String },
    /// The document parsed but holds no scene to show
    #[error("'{path}' contains no scenes")]
    EmptyDocument { path: String },
}

/// Axis-aligned bounds of the decoded model
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Center point of the bounds
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent of the bounds along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Summary of a decoded showcase model
#[derive(Clone, Debug)]
pub struct ModelAsset {
    /// Scene name from the document, or the file stem
    pub name: String,
    /// Number of nodes in the document
    pub node_count: usize,
    /// Number of meshes in the document
    pub mesh_count: usize,
    /// Bounds after the showcase scale is applied
    pub bounds: Aabb,
    /// Uniform scale applied when placing the model
    pub scale: f32,
}

/// Loads the showcase model on a background thread
pub struct ModelLoader {
    state: LoadState,
    pending: Option<Receiver<Result<ModelAsset, LoadError>>>,
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelLoader {
    /// Create an idle loader
    pub fn new() -> Self {
        Self {
            state: LoadState::NotLoaded,
            pending: None,
        }
    }

    /// Current load state
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Start loading a model on a background thread
    ///
    /// A loader handles one model; a second request while one is in flight
    /// is ignored with a warning.
    pub fn spawn_load(&mut self, path: impl Into<PathBuf>, scale: f32) {
        if self.state == LoadState::Loading {
            log::warn!("model load already in flight; ignoring");
            return;
        }

        let path = path.into();
        log::info!("loading model '{}' (scale {})", path.display(), scale);

        let (tx, rx) = bounded(1);
        thread::spawn(move || {
            let result = import_model(&path, scale);
            // Receiver dropped means the showcase shut down; nothing to do
            let _ = tx.send(result);
        });

        self.state = LoadState::Loading;
        self.pending = Some(rx);
    }

    /// Pump a completed load, resolving the gate
    ///
    /// Call once per frame. Returns the outcome on the frame the background
    /// thread finished, `None` otherwise. The gate is marked ready or failed
    /// before this returns, so gate callbacks run on the calling thread.
    pub fn poll(&mut self, gate: &AssetGate) -> Option<Result<ModelAsset, LoadError>> {
        let rx = self.pending.as_ref()?;
        let result = rx.try_recv().ok()?;
        self.pending = None;

        match &result {
            Ok(model) => {
                self.state = LoadState::Loaded;
                log::info!(
                    "model '{}' loaded: {} nodes, {} meshes",
                    model.name,
                    model.node_count,
                    model.mesh_count
                );
                gate.mark_ready();
            }
            Err(err) => {
                self.state = LoadState::Failed;
                gate.mark_failed(err.clone());
            }
        }

        Some(result)
    }
}

/// Import a GLTF document and summarize it
fn import_model(path: &Path, scale: f32) -> Result<ModelAsset, LoadError> {
    let display = path.display().to_string();

    let (document, _buffers, _images) = gltf::import(path).map_err(|e| LoadError::Import {
        path: display.clone(),
        message: e.to_string(),
    })?;

    let scene = document
        .scenes()
        .next()
        .ok_or_else(|| LoadError::EmptyDocument {
            path: display.clone(),
        })?;

    let name = scene
        .name()
        .map(str::to_owned)
        .or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "model".to_owned());

    let mut min = Vec3::splat(f32::INFINITY);
    let mut max = Vec3::splat(f32::NEG_INFINITY);
    for mesh in document.meshes() {
        for primitive in mesh.primitives() {
            let bb = primitive.bounding_box();
            min = min.min(Vec3::from(bb.min));
            max = max.max(Vec3::from(bb.max));
        }
    }
    if min.x > max.x {
        // No mesh primitives; degenerate bounds at the origin
        min = Vec3::ZERO;
        max = Vec3::ZERO;
    }

    Ok(ModelAsset {
        name,
        node_count: document.nodes().count(),
        mesh_count: document.meshes().count(),
        bounds: Aabb {
            min: min * scale,
            max: max * scale,
        },
        scale,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateState;
    use std::time::{Duration, Instant};

    fn poll_until_done(
        loader: &mut ModelLoader,
        gate: &AssetGate,
    ) -> Result<ModelAsset, LoadError> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            if let Some(result) = loader.poll(gate) {
                return result;
            }
            assert!(Instant::now() < deadline, "load never completed");
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_missing_file_fails_the_gate() {
        let gate = AssetGate::new();
        let mut loader = ModelLoader::new();
        loader.spawn_load("does/not/exist.gltf", 1.0);
        assert_eq!(loader.state(), LoadState::Loading);

        let result = poll_until_done(&mut loader, &gate);
        assert!(matches!(result, Err(LoadError::Import { .. })));
        assert_eq!(loader.state(), LoadState::Failed);
        assert_eq!(gate.state(), GateState::Failed);
        assert!(gate.failure().is_some());
    }

    #[test]
    fn test_poll_without_load_is_none() {
        let gate = AssetGate::new();
        let mut loader = ModelLoader::new();
        assert!(loader.poll(&gate).is_none());
        assert_eq!(loader.state(), LoadState::NotLoaded);
        assert_eq!(gate.state(), GateState::Pending);
    }

    #[test]
    fn test_aabb_center_and_size() {
        let bounds = Aabb {
            min: Vec3::new(-1.0, 0.0, -2.0),
            max: Vec3::new(1.0, 2.0, 2.0),
        };
        assert_eq!(bounds.center(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(bounds.size(), Vec3::new(2.0, 2.0, 4.0));
    }
}

//! Error types for catalogs and the sequencer

use thiserror::Error;

/// Errors constructing a scene catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog must hold at least one scene
    #[error("scene catalog is empty")]
    Empty,
    /// Scene names must be unique within a catalog
    #[error("duplicate scene name '{0}'")]
    DuplicateName(String),
    /// Catalog file could not be parsed
    #[error("failed to parse scene catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors reported by the sequencer
///
/// All non-fatal: the sequencer stays in its current scene and the render
/// loop keeps ticking.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SequencerError {
    /// A scene was requested that is not in the catalog
    #[error("unknown scene '{0}'")]
    UnknownScene(String),
}

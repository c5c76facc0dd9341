//! # showcase_sequencer - Named Camera Scenes and Their Sequencing
//!
//! The showcase walks a visitor through a fixed sequence of named camera
//! scenes (intro, overhead, inside, ...), each entered via an animated
//! transition. This crate owns:
//! - [`Scene`] / [`SceneCatalog`]: the immutable, ordered scene definitions,
//!   constructible in code or from a TOML catalog file
//! - [`Stage`]: the seam to the rendering side (camera moves, drag-control
//!   toggles, overlays)
//! - [`SceneSequencer`]: the state machine that enters scenes, exclusively
//!   owns the in-flight transition handle, and fires per-scene side effects
//!   only when their transition completes uncancelled
//!
//! ## Example
//!
//! ```ignore
//! use showcase_sequencer::prelude::*;
//!
//! let mut sequencer = SceneSequencer::new(SceneCatalog::showcase());
//!
//! // Once the model is in the scene graph:
//! sequencer.start(&mut stage);            // enters "intro"
//! sequencer.advance(&mut stage);          // enters "overhead"
//! sequencer.select("inside", &mut stage)?; // jump by name
//!
//! // From the render loop, when the stage reports a finished move:
//! sequencer.handle_move_complete(id, &mut stage);
//! ```

pub mod error;
pub mod scene;
pub mod sequencer;
pub mod stage;

pub use error::{CatalogError, SequencerError};
pub use scene::{Scene, SceneCatalog, SceneEffect};
pub use sequencer::SceneSequencer;
pub use stage::Stage;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::error::{CatalogError, SequencerError};
    pub use crate::scene::{Scene, SceneCatalog, SceneEffect};
    pub use crate::sequencer::SceneSequencer;
    pub use crate::stage::Stage;
}

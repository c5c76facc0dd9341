//! The scene sequencer state machine
//!
//! Two states: uninitialized, then active with a current scene. There is no
//! finished state; advancing past the last catalog entry wraps to the first,
//! so the sequence loops for as long as the page lives.
//!
//! All three entry points (`start`, `advance`, `select`) funnel through one
//! private `enter_scene`, which is the only place the transition handle is
//! replaced. That routine cancels the previous in-flight move before
//! beginning the new one, so two transitions can never drive the camera at
//! once, even from a fast double-click.

use showcase_camera::TransitionId;

use crate::error::SequencerError;
use crate::scene::{Scene, SceneCatalog, SceneEffect};
use crate::stage::Stage;

/// The in-flight transition and the scene it belongs to
#[derive(Clone, Copy, Debug)]
struct ActiveTransition {
    id: TransitionId,
    scene: usize,
}

/// State machine walking the showcase through its scene catalog
pub struct SceneSequencer {
    catalog: SceneCatalog,
    /// Current scene index; `None` until `start`
    current: Option<usize>,
    /// Exclusive owner of the in-flight transition handle
    active: Option<ActiveTransition>,
}

impl SceneSequencer {
    /// Create an uninitialized sequencer over a catalog
    pub fn new(catalog: SceneCatalog) -> Self {
        Self {
            catalog,
            current: None,
            active: None,
        }
    }

    /// The scene catalog
    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    /// Whether `start` has run
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// The current scene, if the sequencer has started
    pub fn current_scene(&self) -> Option<&Scene> {
        self.current.and_then(|i| self.catalog.scene_at(i))
    }

    /// Handle of the in-flight transition, if any
    pub fn active_transition(&self) -> Option<TransitionId> {
        self.active.map(|a| a.id)
    }

    /// Enter the first catalog scene
    ///
    /// Valid only once: subsequent calls are ignored with a warning rather
    /// than restarting the sequence.
    pub fn start(&mut self, stage: &mut impl Stage) {
        if self.current.is_some() {
            log::warn!("sequencer already started; ignoring start()");
            return;
        }
        self.enter_scene(0, stage);
    }

    /// Enter the next scene in catalog order, wrapping past the end
    ///
    /// Total for a started sequencer: the catalog is non-empty, so there is
    /// always a next scene. Before `start` this is ignored with a warning.
    pub fn advance(&mut self, stage: &mut impl Stage) {
        let Some(current) = self.current else {
            log::warn!("advance() before start(); ignoring");
            return;
        };
        self.enter_scene(self.catalog.next_index(current), stage);
    }

    /// Enter a scene by name
    ///
    /// An unknown name leaves the current scene and transition untouched and
    /// reports [`SequencerError::UnknownScene`]. Before `start` the request
    /// is ignored with a warning.
    pub fn select(&mut self, name: &str, stage: &mut impl Stage) -> Result<(), SequencerError> {
        if self.current.is_none() {
            log::warn!("select({:?}) before start(); ignoring", name);
            return Ok(());
        }
        let Some(index) = self.catalog.index_of(name) else {
            log::error!("unknown scene '{}' requested", name);
            return Err(SequencerError::UnknownScene(name.to_owned()));
        };
        self.enter_scene(index, stage);
        Ok(())
    }

    /// Deliver a transition completion from the stage
    ///
    /// Fires the scene's completion side effect only if `id` is the handle
    /// the sequencer currently holds; completions of superseded transitions
    /// are dropped, so their effects never run.
    pub fn handle_move_complete(&mut self, id: TransitionId, stage: &mut impl Stage) {
        let Some(active) = self.active else {
            log::debug!("completion for transition {} with none active", id.raw());
            return;
        };
        if active.id != id {
            log::debug!("completion for superseded transition {}; dropping", id.raw());
            return;
        }
        self.active = None;

        let Some(scene) = self.catalog.scene_at(active.scene) else {
            return;
        };
        log::info!("scene '{}' transition complete", scene.name);
        match &scene.on_complete {
            SceneEffect::None => {}
            SceneEffect::EnableUserRotation {
                auto_rotate_speed,
                min_distance,
                max_distance,
            } => stage.enable_user_rotation(*auto_rotate_speed, *min_distance, *max_distance),
            SceneEffect::RevealOverlay { overlay } => stage.reveal_overlay(overlay),
        }
    }

    /// The single scene-entry routine shared by start/advance/select
    ///
    /// Cancel-before-replace: the previous handle is cancelled before the new
    /// move begins, keeping at most one transition alive.
    fn enter_scene(&mut self, index: usize, stage: &mut impl Stage) {
        if let Some(prev) = self.active.take() {
            stage.cancel_move(prev.id);
        }

        let Some(scene) = self.catalog.scene_at(index) else {
            // Unreachable for a validated catalog; guard rather than index
            log::error!("scene index {} out of catalog bounds", index);
            return;
        };

        log::info!("entering scene '{}'", scene.name);
        let id = stage.begin_move(scene.camera_move());
        self.current = Some(index);
        self.active = Some(ActiveTransition { id, scene: index });
    }
}

// ============================================================================
// Tests
// ============================================================================

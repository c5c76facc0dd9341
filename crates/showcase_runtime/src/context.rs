//! The showcase context object
//!
//! One value owns everything the frame loop touches: stage, sequencer,
//! loader, gate, and the queue of pending user requests. Nothing here lives
//! in globals; the loop borrows the context and every frame's effects are
//! visible through its accessors.
//!
//! Frame order inside [`ShowcaseContext::update`]:
//! 1. pump the model loader, resolving the gate on this thread
//! 2. start the sequencer once the gate has opened
//! 3. drain queued requests into the sequencer
//! 4. tick the stage and forward a completed transition back to the sequencer

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use showcase_asset::{AssetGate, GateState, ModelAsset, ModelLoader};
use showcase_sequencer::{SceneCatalog, SceneSequencer};

use crate::config::ModelConfig;
use crate::stage::ShowcaseStage;

/// A user request queued for the next frame
///
/// Stands in for the UI's scene buttons; requests made before the model is
/// ready wait in the queue rather than being dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShowcaseRequest {
    /// Step to the next scene in catalog order
    Advance,
    /// Jump to a scene by name
    Select(String),
}

/// Everything the frame loop owns
pub struct ShowcaseContext {
    stage: ShowcaseStage,
    sequencer: SceneSequencer,
    loader: ModelLoader,
    gate: Arc<AssetGate>,
    /// Set by the gate callback; drives the one-time sequencer start
    model_ready: Arc<AtomicBool>,
    requests: VecDeque<ShowcaseRequest>,
    model: Option<ModelAsset>,
}

impl ShowcaseContext {
    /// Build the context and kick off the model load
    pub fn new(catalog: SceneCatalog, model: &ModelConfig) -> Self {
        let gate = Arc::new(AssetGate::new());

        let model_ready = Arc::new(AtomicBool::new(false));
        let ready_flag = model_ready.clone();
        gate.on_ready(move || {
            ready_flag.store(true, Ordering::SeqCst);
        });

        let mut loader = ModelLoader::new();
        loader.spawn_load(&model.path, model.scale);

        Self {
            stage: ShowcaseStage::new(),
            sequencer: SceneSequencer::new(catalog),
            loader,
            gate,
            model_ready,
            requests: VecDeque::new(),
            model: None,
        }
    }

    /// The stage (camera, controls, overlays)
    pub fn stage(&self) -> &ShowcaseStage {
        &self.stage
    }

    /// The stage, mutably (for feeding input)
    pub fn stage_mut(&mut self) -> &mut ShowcaseStage {
        &mut self.stage
    }

    /// The sequencer
    pub fn sequencer(&self) -> &SceneSequencer {
        &self.sequencer
    }

    /// The asset gate
    pub fn gate(&self) -> &AssetGate {
        &self.gate
    }

    /// The decoded model summary, once loaded
    pub fn model(&self) -> Option<&ModelAsset> {
        self.model.as_ref()
    }

    /// Queue a request for the next frame
    pub fn request(&mut self, request: ShowcaseRequest) {
        self.requests.push_back(request);
    }

    /// Run one frame
    ///
    /// Never fails: load failures leave the gate failed and the loop running,
    /// and sequencer errors are logged where they occur.
    pub fn update(&mut self, dt: f32) {
        if let Some(Ok(model)) = self.loader.poll(&self.gate) {
            self.model = Some(model);
        }

        if self.model_ready.swap(false, Ordering::SeqCst) {
            self.sequencer.start(&mut self.stage);
        }

        // Requests wait in the queue until the sequencer is running
        if self.sequencer.is_active() {
            while let Some(request) = self.requests.pop_front() {
                match request {
                    ShowcaseRequest::Advance => self.sequencer.advance(&mut self.stage),
                    ShowcaseRequest::Select(name) => {
                        if let Err(err) = self.sequencer.select(&name, &mut self.stage) {
                            log::warn!("request dropped: {}", err);
                        }
                    }
                }
            }
        } else if self.gate.state() == GateState::Failed && !self.requests.is_empty() {
            log::warn!(
                "dropping {} queued requests; model load failed",
                self.requests.len()
            );
            self.requests.clear();
        }

        if let Some(completed) = self.stage.update(dt) {
            self.sequencer.handle_move_complete(completed, &mut self.stage);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

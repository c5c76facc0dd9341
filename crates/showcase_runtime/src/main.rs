//! Showcase runtime
//!
//! Demo harness around the showcase core: loads the configuration and model,
//! then drives the scene sequence from a fixed-step frame loop, advancing
//! scenes on a timer the way the page's buttons would on click.
//!
//! Run with: cargo run -p showcase_runtime
//!       or: cargo run --bin showcase

mod config;
mod context;
mod stage;

use std::time::{Duration, Instant};

use config::{ConfigError, RuntimeConfig};
use context::{ShowcaseContext, ShowcaseRequest};
use showcase_asset::GateState;

/// Frame step; matches a 60 Hz display
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("showcase failed to start: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config = RuntimeConfig::load()?;
    config.print_summary();

    let catalog = config.load_catalog()?;
    let mut ctx = ShowcaseContext::new(catalog, &config.model);

    let run_duration = Duration::from_secs_f32(config.playback.run_duration);
    let advance_every = Duration::from_secs_f32(config.playback.autoplay_interval);
    let start = Instant::now();
    let mut next_advance = advance_every;
    let mut frames: u64 = 0;

    log::info!("frame loop starting");
    while start.elapsed() < run_duration {
        let frame_start = Instant::now();

        // Autoplay stands in for the scene buttons
        if ctx.sequencer().is_active() && start.elapsed() >= next_advance {
            ctx.request(ShowcaseRequest::Advance);
            next_advance += advance_every;
        }

        ctx.update(FRAME_DT);
        frames += 1;

        if let Some(remaining) = Duration::from_secs_f32(FRAME_DT)
            .checked_sub(frame_start.elapsed())
        {
            std::thread::sleep(remaining);
        }
    }

    report(&ctx, frames);
    Ok(())
}

/// Log what the run ended with
fn report(ctx: &ShowcaseContext, frames: u64) {
    log::info!("run complete after {} frames", frames);

    match ctx.gate().state() {
        GateState::Ready => {
            if let Some(model) = ctx.model() {
                log::info!(
                    "model '{}': {} nodes, {} meshes, size {:?}",
                    model.name,
                    model.node_count,
                    model.mesh_count,
                    model.bounds.size()
                );
            }
        }
        GateState::Failed => {
            if let Some(err) = ctx.gate().failure() {
                log::warn!("model never loaded: {}", err);
            }
        }
        GateState::Pending => log::warn!("model load still in flight at shutdown"),
    }

    match ctx.sequencer().current_scene() {
        Some(scene) => log::info!("ended in scene '{}'", scene.name),
        None => log::info!("sequence never started"),
    }

    let camera = ctx.stage().camera();
    log::info!(
        "camera at {:?}, looking at {:?}",
        camera.position,
        camera.target
    );
    if !ctx.stage().overlays().is_empty() {
        log::info!("overlays revealed: {:?}", ctx.stage().overlays());
    }
}

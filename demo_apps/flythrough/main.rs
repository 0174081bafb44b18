//! Headless Fly-Through
//!
//! Runs the gate choreography in real time without a renderer: the gate is
//! clicked after a short pause and the wizard attacks once the camera lands.
//! Every milestone is logged.
//!
//! ```text
//! RUST_LOG=debug cargo run -p flythrough -- [scene.json]
//! ```

use std::thread;
use std::time::Duration;

use anyhow::Context;
use glam::Vec2;
use log::info;

use gateflight::animation::clip::AnimationClip;
use gateflight::config::SceneConfig;
use gateflight::scene::layout::SceneLayout;
use gateflight::stage::{Stage, StageEvent};
use gateflight::utils::time::Timer;

const FRAME_TIME: Duration = Duration::from_micros(16_667);
const CLICK_AFTER_SECONDS: f32 = 0.5;
const GIVE_UP_AFTER_SECONDS: f32 = 30.0;

fn load_config() -> anyhow::Result<SceneConfig> {
    match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(&path).with_context(|| format!("loading {path}")),
        None => Ok(SceneConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let layout = SceneLayout::build(&config);
    info!(
        "Scene: {} models, {} frames, {} grid lines, {} lights",
        layout.models.len(),
        layout.frames.len(),
        layout.grid.lines.len(),
        layout.lights.len()
    );

    // Clip lengths of the shipped models
    let gate_clips = vec![AnimationClip::new("GateOpen", 2.5)];
    let wizard_clips = vec![
        AnimationClip::new(config.wizard.idle_clip.clone(), 2.0),
        AnimationClip::new(config.wizard.attack_clip.clone(), 1.2),
    ];
    let mut stage = Stage::from_clips(&config, gate_clips, wizard_clips);

    let mut timer = Timer::new();
    let mut clicked = false;
    let mut done = false;

    while !done {
        thread::sleep(FRAME_TIME);
        timer.tick();
        let dt = timer.dt_seconds();

        if !clicked && stage.elapsed() >= CLICK_AFTER_SECONDS {
            clicked = true;
            stage.handle_click(Vec2::new(640.0, 360.0));
        }

        for event in stage.update(dt) {
            info!(
                "[{:>6.3}s] {:<16} camera at {}",
                stage.elapsed(),
                event.as_str(),
                stage.camera_position()
            );
            match event {
                // Without a wizard the run ends on landing
                StageEvent::FlightLanded => done = !stage.trigger_attack(),
                StageEvent::AttackFinished => done = true,
                _ => {}
            }
        }

        if stage.elapsed() > GIVE_UP_AFTER_SECONDS {
            anyhow::bail!("choreography did not finish within {GIVE_UP_AFTER_SECONDS}s");
        }
    }

    stage.teardown();
    info!(
        "Done after {} frames ({:.2}s)",
        timer.frame_count,
        timer.elapsed.as_secs_f32()
    );
    Ok(())
}

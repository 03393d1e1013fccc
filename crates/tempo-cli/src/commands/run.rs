//! Run command - drives the demo states until one asks to quit

use crate::settings::Settings;
use crate::states::{DemoStates, PLAY};
use anyhow::{Context, Result};
use tempo_runtime::{Engine, FrameClock, ScriptedClock, TimeSource};

pub struct RunArgs {
    pub config: Option<String>,
    pub initial: Option<String>,
    pub fps: Option<u32>,
    pub fps_max: Option<u32>,
    pub headless: bool,
}

pub fn run(args: RunArgs) -> Result<()> {
    let mut settings = Settings::load(args.config.as_deref())?;
    settings.apply_flags(args.initial, args.fps, args.fps_max);

    let clock: Box<dyn TimeSource> = if args.headless {
        // Every frame reports exactly the target frame time
        Box::new(ScriptedClock::constant(1000.0 / settings.engine.fps.max(1) as f64))
    } else {
        Box::new(FrameClock::new())
    };

    log::info!(
        "Starting in '{}' at {} fps (delta ceiling {:.3}s)",
        settings.game.initial_state,
        settings.engine.fps,
        settings.engine.time_delta_min()
    );

    let mut engine: Engine = Engine::new(
        clock,
        &settings.game.initial_state,
        settings.engine.clone(),
        DemoStates::new(settings.demo.clone()),
    )
    .context("Failed to start engine")?;

    let shutdown = engine.run().context("Game loop failed")?;

    let final_score = engine
        .registry()
        .get(PLAY)
        .ok()
        .and_then(|s| s.control().outgoing_transition_data.get_float("score"));

    log::info!(
        "Quit from '{}' after {} frames and {} transitions",
        shutdown.last_state,
        shutdown.frames,
        shutdown.transitions
    );
    if let Some(score) = final_score {
        println!("Final score: {:.0}", score);
    }

    Ok(())
}

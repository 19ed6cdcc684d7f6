//! Gapwing demo entry point
//!
//! Drives the simulation headlessly the way a host would: a real-time
//! frame loop feeding a fixed-timestep accumulator, with a scripted tap
//! pattern standing in for player input. Prints the final render
//! snapshot as JSON when the run ends.

use std::time::{Duration, Instant};

use anyhow::Result;
use gapwing::GameConfig;
use gapwing::consts::{MAX_SUBSTEPS, SIM_DT};
use gapwing::sim::{GameState, SessionPhase, TickInput, tick};

/// Scripted input: the first tap starts the session, then a flap lands
/// roughly twice a second
fn scripted_tap(time_ticks: u64) -> bool {
    time_ticks % 32 == 0
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    let mut state = GameState::new(config, seed)?;
    log::info!("gapwing demo starting (seed {seed})");

    let frame_duration = Duration::from_millis(16);
    let mut accumulator = 0.0f32;
    let mut last_frame = Instant::now();
    let mut input = TickInput {
        tap: scripted_tap(0),
    };

    // Scripted flapping can survive a long time; cap the demo at two
    // minutes of simulated play
    let tick_cap: u64 = 120 * 60;

    while state.phase != SessionPhase::Over && state.time_ticks < tick_cap {
        let now = Instant::now();
        accumulator += now.duration_since(last_frame).as_secs_f32().min(0.1);
        last_frame = now;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;
            // One-shot input consumed; rearm from the script
            input.tap = scripted_tap(state.time_ticks);
        }

        let sleep_for = frame_duration.saturating_sub(now.elapsed());
        if !sleep_for.is_zero() {
            std::thread::sleep(sleep_for);
        }
    }

    log::info!(
        "run over after {} ticks, final score {}",
        state.time_ticks,
        state.score
    );
    println!("{}", serde_json::to_string_pretty(&state.render_state())?);
    Ok(())
}

//! Fixed timestep simulation tick
//!
//! The single authoritative stepper. Within one tick the order is
//! load-bearing: avatar motion first, then obstacle advancement, then
//! collision against the advanced positions, then scoring from those
//! same positions.

use super::collision;
use super::state::{GameState, SessionPhase};

/// Input captured by the host for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Tap (touch/click/key); one-shot, the host clears it after the tick
    pub tap: bool,
}

/// Advance the session by one fixed timestep of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    match state.phase {
        SessionPhase::NotStarted => {
            if input.tap {
                state.avatar.begin_start_drift(&state.config);
                state.phase = SessionPhase::Playing;
                log::info!("session started (seed {})", state.seed);
            }
        }

        SessionPhase::Playing => {
            if input.tap {
                state.avatar.flap(&state.config);
            }
            state.avatar.step(dt, &state.config);

            let distance = state.config.scroll_speed * dt;
            state
                .track
                .advance(distance, &state.config, &state.sampler, &mut state.rng);

            let avatar_box = state.avatar_box();
            if collision::check(&avatar_box, state.track.obstacles(), &state.config) {
                state.phase = SessionPhase::Over;
                state.over_elapsed = 0.0;
                log::info!(
                    "collision at tick {}, final score {}",
                    state.time_ticks,
                    state.score
                );
                return;
            }

            let passes = state.track.score_passes(state.config.avatar_x);
            if passes > 0 {
                state.score += passes;
                log::debug!("score {}", state.score);
            }
        }

        SessionPhase::Over => {
            state.over_elapsed += dt;
            if state.over_elapsed >= state.config.over_reset_delay {
                state.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameConfig;
    use crate::consts::SIM_DT;
    use crate::sim::MotionPhase;

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 12345).unwrap()
    }

    #[test]
    fn test_world_static_until_first_tap() {
        let mut state = new_state();
        let spawn_x: Vec<f32> = state.track.obstacles().iter().map(|o| o.x).collect();

        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, SessionPhase::NotStarted);
        assert_eq!(state.avatar.value(), 0.0);
        let still: Vec<f32> = state.track.obstacles().iter().map(|o| o.x).collect();
        assert_eq!(still, spawn_x);
    }

    #[test]
    fn test_first_tap_starts_playing() {
        let mut state = new_state();
        tick(&mut state, &TickInput { tap: true }, SIM_DT);
        assert_eq!(state.phase, SessionPhase::Playing);

        // World now in motion: drift down, obstacles scrolling left
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.avatar.value() > 0.0);
        assert!(state.track.obstacles()[0].x < state.config.screen_width);
    }

    #[test]
    fn test_tap_while_playing_impulses() {
        let mut state = new_state();
        tick(&mut state, &TickInput { tap: true }, SIM_DT);
        for _ in 0..30 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        let before = state.avatar.value();

        tick(&mut state, &TickInput { tap: true }, SIM_DT);
        assert_eq!(state.avatar.phase(), MotionPhase::Impulsing);
        for _ in 0..5 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert!(state.avatar.value() < before);
    }

    #[test]
    fn test_collision_freezes_into_over() {
        let mut state = new_state();
        tick(&mut state, &TickInput { tap: true }, SIM_DT);

        // Park an obstacle on the avatar with the gap far away
        state.track.obstacles[0].x = state.config.avatar_x;
        state.track.obstacles[0].gap_center = state.config.max_gap_center();

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, SessionPhase::Over);

        // Frozen while the reset delay runs: score and avatar hold
        let frozen_value = state.avatar.value();
        let frozen_score = state.score;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.avatar.value(), frozen_value);
        assert_eq!(state.score, frozen_score);
    }

    #[test]
    fn test_over_resets_after_delay() {
        let mut state = new_state();
        tick(&mut state, &TickInput { tap: true }, SIM_DT);
        state.track.obstacles[0].x = state.config.avatar_x;
        state.track.obstacles[0].gap_center = state.config.max_gap_center();
        state.score = 9;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, SessionPhase::Over);

        let delay_ticks = (state.config.over_reset_delay / SIM_DT).ceil() as usize + 1;
        for _ in 0..delay_ticks {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase, SessionPhase::NotStarted);
        assert_eq!(state.score, 1);
        assert_eq!(state.avatar.value(), 0.0);
        for (i, obstacle) in state.track.obstacles().iter().enumerate() {
            let expected = state.config.screen_width + i as f32 * state.config.obstacle_spacing();
            assert_eq!(obstacle.x, expected);
        }
    }

    #[test]
    fn test_score_once_per_pass_across_ticks() {
        let config = GameConfig {
            avatar_x: 25.0,
            ..Default::default()
        };
        let mut state = GameState::new(config, 7).unwrap();

        // Drift the avatar into mid-screen before staging the pass
        tick(&mut state, &TickInput { tap: true }, SIM_DT);
        for _ in 0..60 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }

        // Obstacle approaching the crossing with its gap parked on the
        // avatar's current height; 3 px per tick keeps it inside the
        // avatar's width across several ticks
        state.track.obstacles[0].x = 30.0;
        state.track.obstacles[0].gap_center = 260.0;
        state.track.obstacles[1].x = 2000.0;
        state.track.obstacles[2].x = 3000.0;

        let start_score = state.score;
        for _ in 0..7 {
            tick(&mut state, &TickInput::default(), 0.01);
        }
        assert_eq!(state.phase, SessionPhase::Playing);
        assert_eq!(state.score, start_score + 1);
    }
}

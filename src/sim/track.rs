//! Obstacle track
//!
//! A fixed-size set of obstacle pairs scrolls left and recycles in
//! place. The same slots are reused for the whole session, so ordering
//! is stable and "the previous obstacle's gap" is always the adjacent
//! slot modulo the track length.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::gap::GapSampler;
use crate::config::GameConfig;

/// One obstacle pair: a solid column with a passable opening
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge in pixels; strictly decreases between ticks until recycle
    pub x: f32,
    /// Vertical midpoint of the passable opening
    pub gap_center: f32,
    /// Set once this pair has scored; cleared on recycle
    pub scored: bool,
}

/// Fixed-size rotating obstacle set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleTrack {
    pub(crate) obstacles: Vec<Obstacle>,
}

impl ObstacleTrack {
    /// Spawn `obstacle_count` pairs off the right edge, half a screen
    /// apart, with gap centers chained from the range midpoint.
    pub fn new<R: Rng>(config: &GameConfig, sampler: &GapSampler, rng: &mut R) -> Self {
        let mut obstacles = Vec::with_capacity(config.obstacle_count);
        let mut previous = sampler.mid_center();
        for i in 0..config.obstacle_count {
            previous = sampler.sample(rng, previous);
            obstacles.push(Obstacle {
                x: config.screen_width + i as f32 * config.obstacle_spacing(),
                gap_center: previous,
                scored: false,
            });
        }
        Self { obstacles }
    }

    /// Move every obstacle left by `distance`, recycling any that
    /// scrolled fully off-screen back to the right edge with a gap
    /// sampled from the logically previous slot.
    pub fn advance<R: Rng>(
        &mut self,
        distance: f32,
        config: &GameConfig,
        sampler: &GapSampler,
        rng: &mut R,
    ) {
        let len = self.obstacles.len();
        for i in 0..len {
            self.obstacles[i].x -= distance;
            if self.obstacles[i].x < -config.obstacle_width {
                let previous_gap = self.obstacles[(i + len - 1) % len].gap_center;
                let slot = &mut self.obstacles[i];
                slot.x = config.screen_width;
                slot.gap_center = sampler.sample(rng, previous_gap);
                slot.scored = false;
                log::debug!("recycled obstacle {i}, gap center {:.1}", slot.gap_center);
            }
        }
    }

    /// Read-only snapshot for collision and scoring
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Latch obstacles whose left edge crossed the avatar's horizontal
    /// position this tick; returns how many newly crossed. The latch
    /// makes scoring edge-triggered, one increment per pass no matter
    /// how many ticks the obstacle spends inside the avatar's width.
    pub fn score_passes(&mut self, avatar_x: f32) -> u32 {
        let mut passes = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.scored && obstacle.x <= avatar_x {
                obstacle.scored = true;
                passes += 1;
            }
        }
        passes
    }
}

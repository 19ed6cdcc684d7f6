//! Gap-center sampling
//!
//! Every recycled obstacle needs a fresh passable opening. Samples are
//! correlated: the next center lands within `deviation` of the previous
//! one, clamped to bounds that keep gaps away from the screen edges.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Bounded, previous-correlated gap-center sampler
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GapSampler {
    min_center: f32,
    max_center: f32,
    deviation: f32,
}

impl GapSampler {
    /// Build from a validated config (bounds are non-degenerate there)
    pub fn new(config: &GameConfig) -> Self {
        Self {
            min_center: config.min_gap_center(),
            max_center: config.max_gap_center(),
            deviation: config.gap_deviation,
        }
    }

    /// Midpoint of the valid range; seeds the correlation chain
    pub fn mid_center(&self) -> f32 {
        (self.min_center + self.max_center) / 2.0
    }

    /// Sample the next gap center, uniform within `deviation` of
    /// `previous` and clamped to the valid range.
    pub fn sample<R: Rng>(&self, rng: &mut R, previous: f32) -> f32 {
        // An out-of-range previous center would invert the window
        let previous = previous.clamp(self.min_center, self.max_center);
        let low = (previous - self.deviation).max(self.min_center);
        let high = (previous + self.deviation).min(self.max_center);
        rng.random_range(low..=high)
    }
}

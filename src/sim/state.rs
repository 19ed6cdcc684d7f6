//! Session state and render snapshots
//!
//! Everything needed to resume or replay a session deterministically
//! lives in `GameState`.

use anyhow::Result;
use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::AvatarMotion;
use super::collision::{AvatarBox, gap_window};
use super::gap::GapSampler;
use super::track::ObstacleTrack;
use crate::config::GameConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Waiting for the first tap; nothing moves
    NotStarted,
    /// Active gameplay
    Playing,
    /// Collision happened; waiting out the reset delay
    Over,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving all gap sampling
    pub(crate) rng: Pcg32,
    /// Immutable session configuration
    pub config: GameConfig,
    /// Current phase
    pub phase: SessionPhase,
    /// Displayed score; counts from 1
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds accumulated in Over before the reset fires
    pub over_elapsed: f32,
    /// Avatar vertical motion
    pub avatar: AvatarMotion,
    pub(crate) sampler: GapSampler,
    /// Live obstacle pairs
    pub track: ObstacleTrack,
}

impl GameState {
    /// Create a session with the given config and seed. Fails if the
    /// config describes geometry the simulation cannot run with.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let sampler = GapSampler::new(&config);
        let track = ObstacleTrack::new(&config, &sampler, &mut rng);
        Ok(Self {
            seed,
            rng,
            config,
            phase: SessionPhase::NotStarted,
            score: 1,
            time_ticks: 0,
            over_elapsed: 0.0,
            avatar: AvatarMotion::new(),
            sampler,
            track,
        })
    }

    /// Full reset after game over: fresh obstacles, avatar back to the
    /// top, score back to its starting value.
    pub(crate) fn reset(&mut self) {
        self.score = 1;
        self.over_elapsed = 0.0;
        self.avatar.reset();
        self.track = ObstacleTrack::new(&self.config, &self.sampler, &mut self.rng);
        self.phase = SessionPhase::NotStarted;
        log::info!("session reset");
    }

    /// Axis-aligned avatar box at the current motion sample
    pub fn avatar_box(&self) -> AvatarBox {
        AvatarBox::new(
            Vec2::new(self.config.avatar_x, self.avatar.pixel_y(&self.config)),
            self.config.avatar_size,
        )
    }

    /// Read-only snapshot for the presentation layer to draw
    pub fn render_state(&self) -> RenderState {
        let config = &self.config;
        let obstacles = self
            .track
            .obstacles()
            .iter()
            .map(|obstacle| {
                let window = gap_window(obstacle.gap_center, config);
                ObstacleView {
                    pixel_x: obstacle.x,
                    top_height: window.top_edge.max(0.0),
                    bottom_height: (config.screen_height - window.bottom_edge).max(0.0),
                }
            })
            .collect();
        RenderState {
            avatar: Vec2::new(config.avatar_x, self.avatar.pixel_y(config)),
            obstacles,
            score: self.score,
            phase: self.phase,
        }
    }
}

/// One obstacle pair as the two solid segment heights the host draws
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ObstacleView {
    /// Left edge in pixels
    pub pixel_x: f32,
    /// Upper segment: screen top down to the gap's top edge
    pub top_height: f32,
    /// Lower segment: gap's bottom edge down to the screen bottom
    pub bottom_height: f32,
}

/// What the presentation layer draws each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderState {
    /// Avatar top-left in pixels
    pub avatar: Vec2,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub phase: SessionPhase,
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable obstacle ordering (slots are recycled in place, never reallocated)
//! - No rendering or platform dependencies

pub mod avatar;
pub mod collision;
pub mod gap;
pub mod state;
pub mod tick;
pub mod track;

pub use avatar::{AvatarMotion, MotionPhase};
pub use collision::{AvatarBox, GapWindow};
pub use gap::GapSampler;
pub use state::{GameState, ObstacleView, RenderState, SessionPhase};
pub use tick::{TickInput, tick};
pub use track::{Obstacle, ObstacleTrack};

//! Collision detection
//!
//! The avatar's axis-aligned box is tested against each obstacle's two
//! solid segments. Detection only: the session transition on a hit
//! belongs to the tick function, keeping detection separate from
//! recovery.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::track::Obstacle;
use crate::config::GameConfig;

/// Axis-aligned avatar bounding box in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AvatarBox {
    pub min: Vec2,
    pub max: Vec2,
}

impl AvatarBox {
    /// Box from the avatar's top-left render position and side length
    pub fn new(top_left: Vec2, size: f32) -> Self {
        Self {
            min: top_left,
            max: top_left + Vec2::splat(size),
        }
    }
}

/// The passable opening of one obstacle, derived from its gap center
/// (never stored on the obstacle itself)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GapWindow {
    pub top_edge: f32,
    pub bottom_edge: f32,
}

/// Derive an obstacle's gap window from its center
pub fn gap_window(gap_center: f32, config: &GameConfig) -> GapWindow {
    let half = config.gap_size / 2.0;
    GapWindow {
        top_edge: gap_center - half,
        bottom_edge: gap_center + half,
    }
}

/// Test the avatar box against every obstacle's solid segments.
///
/// `config.forgiveness` shrinks the solid regions so the effective
/// hitbox is slightly smaller than the drawn sprite.
pub fn check(avatar: &AvatarBox, obstacles: &[Obstacle], config: &GameConfig) -> bool {
    for obstacle in obstacles {
        let left = obstacle.x;
        let right = obstacle.x + config.obstacle_width;
        if avatar.max.x <= left || avatar.min.x >= right {
            continue;
        }
        let window = gap_window(obstacle.gap_center, config);
        if avatar.min.y < window.top_edge - config.forgiveness
            || avatar.max.y > window.bottom_edge + config.forgiveness
        {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle_at(x: f32, gap_center: f32) -> Obstacle {
        Obstacle {
            x,
            gap_center,
            scored: false,
        }
    }

    #[test]
    fn test_inside_gap_no_collision() {
        let config = GameConfig::default();
        // Avatar box centered in a gap it horizontally overlaps
        let gap_center = 300.0;
        let avatar = AvatarBox::new(
            Vec2::new(220.0, gap_center - config.avatar_size / 2.0),
            config.avatar_size,
        );
        let obstacles = [obstacle_at(210.0, gap_center)];
        assert!(!check(&avatar, &obstacles, &config));
    }

    #[test]
    fn test_horizontally_disjoint_no_collision() {
        let config = GameConfig::default();
        // Avatar far above any gap, but the obstacle is off to the right
        let avatar = AvatarBox::new(Vec2::new(100.0, 0.0), config.avatar_size);
        let obstacles = [obstacle_at(400.0, 300.0)];
        assert!(!check(&avatar, &obstacles, &config));
    }

    #[test]
    fn test_below_gap_bottom_collides() {
        let config = GameConfig {
            gap_size: 200.0,
            obstacle_thickness: 60.0,
            ..Default::default()
        };
        // gap center 100, gap 200: strict bottom edge at 200; the avatar
        // box spans 400..420, far below even the forgiving edge
        let avatar = AvatarBox {
            min: Vec2::new(230.0, 400.0),
            max: Vec2::new(255.0, 420.0),
        };
        let obstacles = [obstacle_at(220.0, 100.0)];
        assert!(check(&avatar, &obstacles, &config));
    }

    #[test]
    fn test_above_gap_top_collides() {
        let config = GameConfig::default();
        let gap_center = 300.0;
        let window = gap_window(gap_center, &config);
        let avatar = AvatarBox::new(
            Vec2::new(230.0, window.top_edge - config.forgiveness - 30.0),
            config.avatar_size,
        );
        let obstacles = [obstacle_at(220.0, gap_center)];
        assert!(check(&avatar, &obstacles, &config));
    }

    #[test]
    fn test_forgiveness_shrinks_hitbox() {
        let config = GameConfig::default();
        let gap_center = 300.0;
        let window = gap_window(gap_center, &config);
        // Bottom edge pokes past the strict gap bottom, but by less than
        // the forgiveness margin
        let avatar = AvatarBox::new(
            Vec2::new(230.0, window.bottom_edge - config.avatar_size + config.forgiveness / 2.0),
            config.avatar_size,
        );
        let obstacles = [obstacle_at(220.0, gap_center)];
        assert!(!check(&avatar, &obstacles, &config));
    }
}

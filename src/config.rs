//! Session configuration
//!
//! All physics and geometry tuning lives in one immutable struct handed
//! to the session at construction. Bad geometry (a gap that cannot fit
//! the screen, an inverted pixel range) is rejected here rather than
//! surfacing later as a negative-width sampling window.

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Immutable configuration for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Host viewport width in pixels, queried once at session creation
    pub screen_width: f32,
    /// Host viewport height in pixels
    pub screen_height: f32,
    /// Avatar bounding-box side length
    pub avatar_size: f32,
    /// Fixed horizontal position of the avatar's left edge
    pub avatar_x: f32,
    /// Number of live obstacle pairs (recycled, never destroyed)
    pub obstacle_count: usize,
    /// Horizontal extent of an obstacle pair
    pub obstacle_width: f32,
    /// Height unit of the solid segments; also sets the gap-center bounds
    pub obstacle_thickness: f32,
    /// Vertical size of the passable opening
    pub gap_size: f32,
    /// Maximum distance between adjacent gap centers
    pub gap_deviation: f32,
    /// Obstacle scroll speed, px/s
    pub scroll_speed: f32,
    /// Upward shift of the normalized motion value per tap
    pub impulse_delta: f32,
    /// Seconds an impulse transition takes
    pub impulse_duration: f32,
    /// Seconds the chained fall back to rest takes
    pub fall_duration: f32,
    /// Seconds the initial idle drift takes once the session starts
    pub start_duration: f32,
    /// Normalized value the avatar falls toward
    pub rest_value: f32,
    /// Pixel the normalized value 0.0 maps to
    pub top_pixel: f32,
    /// Pixel the normalized value 1.0 maps to
    pub bottom_pixel: f32,
    /// Hitbox shrink relative to the visual sprite, px: the avatar must
    /// poke this far past a strict gap edge before a collision counts
    pub forgiveness: f32,
    /// Seconds spent in Over before the session resets
    pub over_reset_delay: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 480.0,
            screen_height: 640.0,
            avatar_size: 25.0,
            avatar_x: 227.5,
            obstacle_count: 3,
            obstacle_width: 60.0,
            obstacle_thickness: 120.0,
            gap_size: 160.0,
            gap_deviation: 120.0,
            scroll_speed: 300.0,
            impulse_delta: 0.3,
            impulse_duration: 0.5,
            fall_duration: 3.0,
            start_duration: 2.0,
            rest_value: 1.0,
            top_pixel: 0.0,
            bottom_pixel: 500.0,
            forgiveness: 20.0,
            over_reset_delay: 1.0,
        }
    }
}

impl GameConfig {
    /// Lowest allowed gap center (keeps the opening off the top edge)
    #[inline]
    pub fn min_gap_center(&self) -> f32 {
        self.obstacle_thickness * 2.0
    }

    /// Highest allowed gap center (keeps the opening off the bottom edge)
    #[inline]
    pub fn max_gap_center(&self) -> f32 {
        self.screen_height - self.obstacle_thickness * 3.0
    }

    /// Horizontal distance between consecutive obstacle spawn positions
    #[inline]
    pub fn obstacle_spacing(&self) -> f32 {
        self.screen_width / 2.0
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.screen_width > 0.0 && self.screen_height > 0.0,
            "screen dimensions must be positive ({} x {})",
            self.screen_width,
            self.screen_height
        );
        ensure!(self.avatar_size > 0.0, "avatar_size must be positive");
        ensure!(self.obstacle_count >= 1, "need at least one obstacle");
        ensure!(
            self.obstacle_width > 0.0 && self.obstacle_thickness > 0.0,
            "obstacle dimensions must be positive"
        );
        ensure!(
            self.gap_size > 0.0 && self.gap_deviation > 0.0,
            "gap geometry must be positive"
        );
        ensure!(self.scroll_speed > 0.0, "scroll_speed must be positive");
        ensure!(
            self.impulse_delta > 0.0
                && self.impulse_duration > 0.0
                && self.fall_duration > 0.0
                && self.start_duration > 0.0
                && self.over_reset_delay > 0.0,
            "motion durations and impulse_delta must be positive"
        );
        ensure!(
            self.top_pixel < self.bottom_pixel,
            "pixel range is inverted ({} >= {})",
            self.top_pixel,
            self.bottom_pixel
        );
        ensure!(
            self.min_gap_center() < self.max_gap_center(),
            "gap geometry does not fit the screen: min center {} >= max center {}",
            self.min_gap_center(),
            self.max_gap_center()
        );
        Ok(())
    }

    /// Parse and validate a config from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_oversized_gap_rejected() {
        // Thickness so large the center bounds invert
        let config = GameConfig {
            obstacle_thickness: 200.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_pixel_range_rejected() {
        let config = GameConfig {
            top_pixel: 500.0,
            bottom_pixel: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GameConfig::from_json(r#"{"scroll_speed": 120.0}"#).unwrap();
        assert_eq!(config.scroll_speed, 120.0);
        assert_eq!(config.obstacle_count, 3);
    }

    #[test]
    fn test_from_json_rejects_bad_geometry() {
        assert!(GameConfig::from_json(r#"{"obstacle_thickness": 999.0}"#).is_err());
    }
}

//! Avatar vertical motion
//!
//! The avatar's height is one normalized value driven by linear timed
//! transitions and stepped explicitly each tick. A tap must cancel
//! whatever transition is in flight before starting its impulse;
//! letting transitions stack compounds velocity (a real bug in naive
//! variants that never cancel).

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Which way the avatar is currently being driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionPhase {
    /// Drifting toward the rest value (including the initial idle drift)
    Falling,
    /// Tap-driven upward transition
    Impulsing,
}

/// A linear timed transition between two samples of the motion value
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Transition {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl Transition {
    fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    fn sample(&self) -> f32 {
        let t = (self.elapsed / self.duration).min(1.0);
        self.from + (self.to - self.from) * t
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Normalized vertical motion state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AvatarMotion {
    value: f32,
    phase: MotionPhase,
    transition: Option<Transition>,
}

impl Default for AvatarMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarMotion {
    /// At the top of the range with nothing in flight
    pub fn new() -> Self {
        Self {
            value: 0.0,
            phase: MotionPhase::Falling,
            transition: None,
        }
    }

    /// Begin the initial idle drift toward the rest value
    pub fn begin_start_drift(&mut self, config: &GameConfig) {
        self.value = 0.0;
        self.phase = MotionPhase::Falling;
        self.transition = Some(Transition::new(0.0, config.rest_value, config.start_duration));
    }

    /// Tap: cancel any in-flight transition, then impulse upward from
    /// the current sample.
    pub fn flap(&mut self, config: &GameConfig) {
        self.phase = MotionPhase::Impulsing;
        self.transition = Some(Transition::new(
            self.value,
            self.value - config.impulse_delta,
            config.impulse_duration,
        ));
    }

    /// Advance the in-flight transition by `dt` seconds. A completed
    /// impulse chains into a fall toward the rest value; a completed
    /// fall leaves the value at rest.
    pub fn step(&mut self, dt: f32, config: &GameConfig) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        transition.elapsed += dt;
        self.value = transition.sample();
        if transition.finished() {
            match self.phase {
                MotionPhase::Impulsing => {
                    self.phase = MotionPhase::Falling;
                    self.transition = Some(Transition::new(
                        self.value,
                        config.rest_value,
                        config.fall_duration,
                    ));
                }
                MotionPhase::Falling => self.transition = None,
            }
        }
    }

    /// Current normalized motion sample
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    /// Affine map of the normalized value into the avatar's pixel range
    pub fn pixel_y(&self, config: &GameConfig) -> f32 {
        config.top_pixel + self.value * (config.bottom_pixel - config.top_pixel)
    }

    /// Back to the top with nothing in flight
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.phase = MotionPhase::Falling;
        self.transition = None;
    }
}

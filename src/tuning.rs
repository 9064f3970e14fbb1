//! Game balance knobs
//!
//! Every constant the simulation reads lives here so a host can ship a JSON
//! override without rebuilding. Missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Loop ===
    /// Virtual time between ticks
    pub tick_interval: f64,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    /// Horizontal speed while jumping (sign carries direction)
    pub horizontal_speed: f32,
    /// Vertical velocity given by a jump
    pub launch_velocity: f32,
    /// Multiplicative decay applied to vertical velocity each tick
    pub friction: f32,
    /// Constant decrement applied after friction
    pub gravity_step: f32,
    /// Downward speed while adhered to a wall
    pub wall_slide_speed: f32,
    /// Push away from a wall when jumping off it
    pub wall_nudge: f32,
    pub max_jumps: u8,
    /// The world scrolls instead of the player once above `H/2 - ascend_margin`
    pub ascend_margin: f32,
    /// Back-projection used to classify top/bottom impacts
    pub face_tolerance: f32,

    // === Score & difficulty ===
    /// Score gained per unit of scrolled velocity is `dy / score_divisor`
    pub score_divisor: f32,
    /// Global drift per tick is `round(score) / drift_divisor`
    pub drift_divisor: f32,

    // === Platforms ===
    pub platform_width: f32,
    pub platform_height: f32,
    /// Distance of each lane's anchor from the field centre
    pub lane_offset: f32,
    /// Jitter toward the centre line
    pub lane_inner_jitter: f32,
    /// Jitter away from the centre line
    pub lane_outer_jitter: f32,
    /// Vertical gap range above the reference platform
    pub min_spacing: f32,
    pub max_spacing: f32,
    /// A main platform below this line triggers new generation
    pub branch_line: f32,
    pub initial_batch: usize,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Horizontal spawn half-width around the centre
    pub obstacle_band: f32,
    pub obstacle_spawn_y: f32,
    pub obstacle_launch_velocity: f32,
    /// Spawn chance is `((score mod period) * slope) / scale`
    pub spawn_period: f32,
    pub spawn_slope: f32,
    pub spawn_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,

            player_width: 30.0,
            player_height: 30.0,
            horizontal_speed: 3.0,
            launch_velocity: 3.0,
            friction: 0.99,
            gravity_step: 0.1,
            wall_slide_speed: 1.0,
            wall_nudge: 4.0,
            max_jumps: MAX_JUMPS,
            ascend_margin: 100.0,
            face_tolerance: 4.0,

            score_divisor: 10.0,
            drift_divisor: 1000.0,

            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,
            lane_offset: 70.0,
            lane_inner_jitter: 30.0,
            lane_outer_jitter: 50.0,
            min_spacing: 130.0,
            max_spacing: 170.0,
            branch_line: 30.0,
            initial_batch: INITIAL_PLATFORM_BATCH,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_band: 100.0,
            obstacle_spawn_y: -20.0,
            obstacle_launch_velocity: 0.0,
            spawn_period: 50.0,
            spawn_slope: 0.05,
            spawn_scale: 600.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Clamp values that would break the simulation's invariants
    pub fn sanitized(mut self) -> Self {
        if self.max_jumps > MAX_JUMPS {
            log::warn!(
                "max_jumps {} exceeds the supported {}, clamping",
                self.max_jumps,
                MAX_JUMPS
            );
            self.max_jumps = MAX_JUMPS;
        }
        if self.min_spacing > self.max_spacing {
            std::mem::swap(&mut self.min_spacing, &mut self.max_spacing);
        }
        if self.drift_divisor <= 0.0 {
            self.drift_divisor = 1000.0;
        }
        if self.score_divisor <= 0.0 {
            self.score_divisor = 10.0;
        }
        if self.spawn_period <= 0.0 {
            self.spawn_period = 50.0;
        }
        self
    }

    /// Spawn probability for the falling-brick sawtooth at a given score
    pub fn spawn_chance(&self, score: f32) -> f32 {
        ((score % self.spawn_period) * self.spawn_slope) / self.spawn_scale
    }

    /// Per-tick drift at a given score
    pub fn drift(&self, score: f32) -> f32 {
        score.round() / self.drift_divisor
    }
}

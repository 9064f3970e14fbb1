//! Wall Hop - An endless wall-jumping platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, generation, session state)
//! - `driver`: Fixed-step loop gating against a host timing callback
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::{FrameOutcome, LoopDriver, NullRenderer, Renderer};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Virtual time units between simulation ticks
    pub const TICK_INTERVAL: f64 = 16.0;

    /// Default play field (matches the widest layout the browser host uses)
    pub const DEFAULT_FIELD_WIDTH: f32 = 500.0;
    pub const DEFAULT_FIELD_HEIGHT: f32 = 800.0;

    /// Platforms are thin vertical ledges
    pub const PLATFORM_WIDTH: f32 = 8.0;
    pub const PLATFORM_HEIGHT: f32 = 100.0;

    /// Falling bricks
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 10.0;

    /// Consecutive jumps allowed before the player must touch a platform again
    pub const MAX_JUMPS: u8 = 3;

    /// Platforms seeded on every restart
    pub const INITIAL_PLATFORM_BATCH: usize = 10;
}

/// Score as shown to the player (rounded to the nearest integer)
#[inline]
pub fn display_score(score: f32) -> u64 {
    score.max(0.0).round() as u64
}

/// Uniformly map `t` in [0, 1) onto [min, max)
#[inline]
pub fn lerp_range(min: f32, max: f32, t: f32) -> f32 {
    t * (max - min) + min
}

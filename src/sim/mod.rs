//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (oldest entity first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod generator;
pub mod obstacles;
pub mod physics;
pub mod rect;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{CollisionReport, PlatformContact, classify_impact, detect_collisions, hits_boundary};
pub use generator::{generate_platforms, lane_interval, seed_platforms};
pub use obstacles::{spawn_band, update_obstacles};
pub use physics::{apply_drift, integrate_player, launch};
pub use rect::Rect;
pub use rng::SimRng;
pub use snapshot::{PlayerView, Snapshot};
pub use state::{
    EndReason, Field, GamePhase, GameState, Lane, Movement, Obstacle, Platform, Player, Pose, Side,
};
pub use tick::{tick, trigger_jump};

//! Game state and core simulation types
//!
//! Everything a session owns lives here. A restart builds a fresh
//! `GameState` rather than patching the old one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::rng::SimRng;
use crate::consts::*;
use crate::tuning::Tuning;

/// Play field supplied by the host, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD_WIDTH, DEFAULT_FIELD_HEIGHT)
    }
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Field is shown, nothing moves until the first jump
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for a restart
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Player left the field through one of its edges
    Boundary,
    /// Player was hit by a falling brick
    Obstacle,
}

/// Face of a platform the player struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Lane a platform was spawned into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lane {
    Left,
    Right,
}

/// Player movement state. Exactly one holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Movement {
    /// Just let go of a platform (or spawned); the next update seeds a fall
    Released,
    /// Free fall
    Falling,
    /// In a jump arc
    Jumping,
    /// Adhered to a platform face
    Stuck(Side),
}

/// Sprite the renderer should pick for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pose {
    Front,
    FrontFall,
    JumpLeft,
    JumpRight,
    /// Clinging to a wall on the player's left (platform's right face)
    StickLeft,
    /// Clinging to a wall on the player's right (platform's left face)
    StickRight,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// `x` is horizontal speed (positive = right), `y` is upward-positive
    pub vel: Vec2,
    /// Jumps since the last platform contact
    pub jumps: u8,
    pub movement: Movement,
    /// Platform touched most recently. Informational, may be stale.
    pub attached: Option<u32>,
}

impl Player {
    /// Spawn centred horizontally at half height
    pub fn new(field: &Field, tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.player_width, tuning.player_height);
        Self {
            pos: Vec2::new(field.center_x() - size.x / 2.0, field.center_y()),
            size,
            vel: Vec2::new(tuning.horizontal_speed, tuning.launch_velocity),
            jumps: 0,
            movement: Movement::Released,
            attached: None,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn is_jumping(&self) -> bool {
        self.movement == Movement::Jumping
    }

    pub fn stuck_side(&self) -> Option<Side> {
        match self.movement {
            Movement::Stuck(side) => Some(side),
            _ => None,
        }
    }

    /// Let go of whatever face the player was stuck to. Idempotent.
    pub fn clear_stuck(&mut self) {
        if let Movement::Stuck(_) = self.movement {
            self.movement = Movement::Released;
        }
    }

    pub fn pose(&self) -> Pose {
        match self.movement {
            Movement::Jumping if self.vel.x > 0.0 => Pose::JumpRight,
            Movement::Jumping => Pose::JumpLeft,
            Movement::Stuck(Side::Left) => Pose::StickRight,
            Movement::Stuck(Side::Right) => Pose::StickLeft,
            Movement::Falling => Pose::FrontFall,
            _ => Pose::Front,
        }
    }
}

/// A wall-mounted ledge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub lane: Lane,
    /// Anchor of its generation batch; only anchors trigger branching
    pub is_main: bool,
}

impl Platform {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A falling brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Upward-positive vertical velocity
    pub dy: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub tuning: Tuning,
    pub rng: SimRng,
    pub phase: GamePhase,
    pub end_reason: Option<EndReason>,
    pub score: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Upward jump motion scrolls the world instead of the player
    pub ascending: bool,
    pub player: Player,
    /// Active platforms, oldest first
    pub platforms: Vec<Platform>,
    pub obstacles: Vec<Obstacle>,
    next_id: u32,
}

impl GameState {
    /// Create a session waiting for its first jump, with the initial
    /// platforms already seeded
    pub fn new(field: Field, tuning: Tuning, seed: u64) -> Self {
        let player = Player::new(&field, &tuning);
        let mut state = Self {
            field,
            tuning,
            rng: SimRng::new(seed),
            phase: GamePhase::Ready,
            end_reason: None,
            score: 0.0,
            time_ticks: 0,
            ascending: false,
            player,
            platforms: Vec::new(),
            obstacles: Vec::new(),
            next_id: 1,
        };

        super::generator::seed_platforms(&mut state);
        log::info!(
            "New session {}x{} seed={} platforms={}",
            field.width,
            field.height,
            seed,
            state.platforms.len()
        );

        state
    }

    /// Fresh session that is already running
    pub fn restart(field: Field, tuning: Tuning, seed: u64) -> Self {
        let mut state = Self::new(field, tuning, seed);
        state.start();
        state
    }

    /// Leave the `Ready` phase
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Playing;
            log::info!("Session started");
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_ended(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// End the run. Only the first reason is kept.
    pub fn end(&mut self, reason: EndReason) {
        if self.is_ended() {
            return;
        }
        self.phase = GamePhase::Ended;
        self.end_reason = Some(reason);
        log::info!(
            "Session ended ({:?}) after {} ticks ({} time units), score {}",
            reason,
            self.time_ticks,
            self.elapsed(),
            self.final_score()
        );
    }

    /// Score rounded for display
    pub fn final_score(&self) -> u64 {
        crate::display_score(self.score)
    }

    /// Virtual time simulated so far
    pub fn elapsed(&self) -> f64 {
        self.time_ticks as f64 * self.tuning.tick_interval
    }

    pub fn platform(&self, id: u32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Platform the player last touched, if it still exists
    pub fn attached_platform(&self) -> Option<&Platform> {
        self.player.attached.and_then(|id| self.platform(id))
    }
}

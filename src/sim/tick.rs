//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically: collision
//! detection first, then the update pass (player, drift, platforms, bricks).

use super::collision::detect_collisions;
use super::generator::{branch_platforms, prune_platforms};
use super::obstacles::update_obstacles;
use super::physics::{apply_drift, integrate_player, launch};
use super::state::{GamePhase, GameState};

/// Advance the game state by one fixed timestep. No-op unless playing.
pub fn tick(state: &mut GameState) {
    if !state.is_active() {
        return;
    }

    state.time_ticks += 1;

    detect_collisions(state);
    if state.is_ended() {
        return;
    }

    update(state);
}

/// Update pass, run after collisions have been resolved
fn update(state: &mut GameState) {
    integrate_player(state);
    apply_drift(state);

    prune_platforms(state);
    branch_platforms(state);

    update_obstacles(state);
}

/// Handle the "trigger jump" input event.
///
/// The first jump of a `Ready` session also starts it. Once the run has
/// ended, or the player is out of jumps, this does nothing. Returns whether
/// a jump fired.
pub fn trigger_jump(state: &mut GameState) -> bool {
    match state.phase {
        GamePhase::Ended => return false,
        GamePhase::Ready => state.start(),
        GamePhase::Playing => {}
    }

    let fired = launch(&mut state.player, &state.field, &state.tuning);
    if fired {
        log::debug!(
            "Jump {}/{} at ({:.1}, {:.1})",
            state.player.jumps,
            state.tuning.max_jumps,
            state.player.pos.x,
            state.player.pos.y
        );
    }
    fired
}

impl GameState {
    /// See [`tick`]
    pub fn tick(&mut self) {
        tick(self);
    }

    /// See [`trigger_jump`]
    pub fn trigger_jump(&mut self) -> bool {
        trigger_jump(self)
    }
}

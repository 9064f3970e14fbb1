//! Player movement, jump input and the difficulty drift
//!
//! Vertical velocities are upward-positive: a position update is `y -= dy`.

use super::state::{Field, GameState, Movement, Player, Side};
use crate::tuning::Tuning;

/// One tick of friction followed by the constant pull downward
#[inline]
pub fn decay(dy: f32, tuning: &Tuning) -> f32 {
    dy * tuning.friction - tuning.gravity_step
}

/// Advance the player by one tick according to its movement state
pub fn integrate_player(state: &mut GameState) {
    let tuning = &state.tuning;
    let player = &mut state.player;

    match player.movement {
        Movement::Jumping if state.ascending => {
            if player.vel.y > 0.0 {
                // Camera follows the player up: move the world instead
                for platform in &mut state.platforms {
                    platform.pos.y += player.vel.y;
                }
                state.score += player.vel.y / tuning.score_divisor;
            } else {
                player.pos.y -= player.vel.y;
            }
            player.vel.y = decay(player.vel.y, tuning);
            player.pos.x += player.vel.x;
        }
        Movement::Jumping => {
            player.pos.x += player.vel.x;
            player.pos.y -= player.vel.y;
            player.vel.y = decay(player.vel.y, tuning);
        }
        Movement::Stuck(Side::Top) => {}
        Movement::Stuck(_) => {
            player.vel.y = -tuning.wall_slide_speed;
            player.pos.y -= player.vel.y;
        }
        Movement::Released => {
            player.movement = Movement::Falling;
            player.pos.y += 1.0;
            player.vel.y = -1.0;
            fall(player, tuning);
        }
        Movement::Falling => fall(player, tuning),
    }
}

fn fall(player: &mut Player, tuning: &Tuning) {
    player.vel.y = decay(player.vel.y, tuning);
    player.pos.y -= player.vel.y;
}

/// Slow global scroll that speeds up with score
pub fn apply_drift(state: &mut GameState) {
    let drift = state.tuning.drift(state.score);
    if drift == 0.0 {
        return;
    }
    state.player.pos.y += drift;
    for platform in &mut state.platforms {
        platform.pos.y += drift;
    }
}

/// Launch a jump if the player still has one left. Returns whether it fired.
///
/// The nudge before launch depends on what the player was stuck to: walls
/// push it away horizontally, top and bottom faces pick a direction from
/// which half of the field the player is in.
pub fn launch(player: &mut Player, field: &Field, tuning: &Tuning) -> bool {
    if player.jumps >= tuning.max_jumps {
        return false;
    }

    let nudge = tuning.wall_nudge;
    let left_half = player.rect().center_x() < field.center_x();
    match player.movement {
        Movement::Stuck(Side::Left) => {
            player.pos.x -= nudge;
            player.pos.y -= nudge;
        }
        Movement::Stuck(Side::Right) => {
            player.pos.x += nudge;
            player.pos.y -= nudge;
        }
        Movement::Stuck(Side::Top) => {
            player.vel.x = if left_half {
                -tuning.horizontal_speed
            } else {
                tuning.horizontal_speed
            };
            player.pos.x += player.vel.x;
            player.pos.y -= nudge;
        }
        Movement::Stuck(Side::Bottom) => {
            if left_half {
                player.vel.x = -tuning.horizontal_speed;
                player.pos.x += player.vel.x;
                player.pos.y -= nudge;
            } else {
                player.vel.x = tuning.horizontal_speed;
                player.pos.x += player.vel.x;
            }
        }
        Movement::Released | Movement::Falling | Movement::Jumping => {}
    }

    player.vel.y = tuning.launch_velocity;
    player.vel.x = -player.vel.x;
    player.movement = Movement::Jumping;
    player.jumps += 1;
    true
}

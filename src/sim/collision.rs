//! Collision detection and side resolution
//!
//! Detection runs after the player has already moved into a platform, so the
//! struck face is inferred by stepping the player back one tick and checking
//! which side of the platform it was on.

use super::rect::Rect;
use super::state::{EndReason, Field, GameState, Movement, Side};

/// What a collision pass found. Pure data; `resolve` applies it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Player crossed a field edge
    pub boundary: bool,
    /// First overlapping platform in iteration order and the face struck
    pub platform: Option<PlatformContact>,
    /// Player overlaps a falling brick
    pub obstacle: bool,
}

/// Contact with a single platform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformContact {
    pub platform_id: u32,
    /// `None` when the back-projection matches no face
    pub side: Option<Side>,
}

/// True if `rect` pokes out through any edge of the field
pub fn hits_boundary(rect: &Rect, field: &Field) -> bool {
    rect.y < 0.0 || rect.bottom() > field.height || rect.x < 0.0 || rect.right() > field.width
}

/// Classify the platform face struck by a player moving `dx` per tick.
///
/// Left is tested before right, right before top, top before bottom; the
/// first match wins even when a corner hit would suit another face better.
pub fn classify_impact(player: &Rect, dx: f32, platform: &Rect, tolerance: f32) -> Option<Side> {
    if player.right() - dx <= platform.x {
        Some(Side::Left)
    } else if player.x - dx >= platform.right() {
        Some(Side::Right)
    } else if player.bottom() - tolerance <= platform.y {
        Some(Side::Top)
    } else if player.y + tolerance >= platform.bottom() {
        Some(Side::Bottom)
    } else {
        None
    }
}

/// Run all three checks against the current state
pub fn detect(state: &GameState) -> CollisionReport {
    let player = state.player.rect();
    let dx = state.player.vel.x;

    let boundary = hits_boundary(&player, &state.field);

    let platform = state
        .platforms
        .iter()
        .find(|p| player.overlaps(&p.rect()))
        .map(|p| PlatformContact {
            platform_id: p.id,
            side: classify_impact(&player, dx, &p.rect(), state.tuning.face_tolerance),
        });

    let obstacle = state.obstacles.iter().any(|o| player.overlaps(&o.rect()));

    CollisionReport {
        boundary,
        platform,
        obstacle,
    }
}

/// Apply a report to the state
pub fn resolve(state: &mut GameState, report: &CollisionReport) {
    if report.boundary {
        state.end(EndReason::Boundary);
    }

    match report.platform {
        Some(contact) => {
            let player = &mut state.player;
            player.jumps = 0;
            player.attached = Some(contact.platform_id);
            player.movement = match contact.side {
                Some(side) => Movement::Stuck(side),
                None => Movement::Released,
            };
            state.ascending = false;
        }
        None => {
            state.player.clear_stuck();
            state.ascending = is_ascending(state);
        }
    }

    if report.obstacle {
        state.end(EndReason::Obstacle);
    }
}

/// Jumping in the upper part of the field scrolls the world instead of the player
pub fn is_ascending(state: &GameState) -> bool {
    state.player.is_jumping()
        && state.player.pos.y < state.field.center_y() - state.tuning.ascend_margin
}

/// Detect and resolve in one go
pub fn detect_collisions(state: &mut GameState) -> CollisionReport {
    let report = detect(state);
    resolve(state, &report);
    report
}

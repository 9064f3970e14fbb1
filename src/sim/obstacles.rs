//! Falling bricks
//!
//! Spawn chance follows a sawtooth over score: it climbs for every 50
//! points, then drops back to zero.

use glam::Vec2;

use super::state::{Field, GameState, Obstacle};
use super::physics::decay;
use crate::tuning::Tuning;

/// Horizontal interval bricks spawn in
pub fn spawn_band(field: &Field, tuning: &Tuning) -> (f32, f32) {
    (
        field.center_x() - tuning.obstacle_band,
        field.center_x() + tuning.obstacle_band,
    )
}

/// Roll once and maybe drop a new brick at the top edge.
/// Returns whether one spawned.
pub fn spawn_obstacle(state: &mut GameState) -> bool {
    let roll = state.rng.unit();
    if roll >= state.tuning.spawn_chance(state.score) {
        return false;
    }

    let (min_x, max_x) = spawn_band(&state.field, &state.tuning);
    let x = state.rng.range(min_x, max_x);
    let obstacle = Obstacle {
        id: state.next_entity_id(),
        pos: Vec2::new(x, state.tuning.obstacle_spawn_y),
        size: Vec2::new(state.tuning.obstacle_width, state.tuning.obstacle_height),
        dy: state.tuning.obstacle_launch_velocity,
    };
    log::trace!("Brick {} spawned at x={:.1}", obstacle.id, x);
    state.obstacles.push(obstacle);
    true
}

/// Move every brick, then let its velocity decay
pub fn advance_obstacles(state: &mut GameState) {
    let tuning = &state.tuning;
    for obstacle in &mut state.obstacles {
        obstacle.pos.y -= obstacle.dy;
        obstacle.dy = decay(obstacle.dy, tuning);
    }
}

/// Drop bricks that fell past the bottom edge
pub fn prune_obstacles(state: &mut GameState) {
    let bottom = state.field.height;
    state.obstacles.retain(|o| o.pos.y <= bottom);
}

/// Full per-tick obstacle pass
pub fn update_obstacles(state: &mut GameState) {
    spawn_obstacle(state);
    advance_obstacles(state);
    prune_obstacles(state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameState {
        GameState::restart(Field::new(500.0, 800.0), Tuning::default(), 21)
    }

    #[test]
    fn test_no_spawn_at_zero_score() {
        let mut state = session();
        for _ in 0..10_000 {
            assert!(!spawn_obstacle(&mut state));
        }
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_spawn_inside_band() {
        let mut state = session();
        // Certain spawn regardless of score
        state.tuning.spawn_scale = 0.0001;
        state.score = 25.0;
        for _ in 0..50 {
            assert!(spawn_obstacle(&mut state));
        }
        let (min, max) = spawn_band(&state.field, &state.tuning);
        for o in &state.obstacles {
            assert!(o.pos.x >= min - 1e-3 && o.pos.x <= max + 1e-3);
            assert_eq!(o.pos.y, -20.0);
            assert_eq!(o.dy, 0.0);
        }
    }

    #[test]
    fn test_bricks_fall_faster_over_time() {
        let mut state = session();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pos: Vec2::new(250.0, -20.0),
            size: Vec2::new(20.0, 10.0),
            dy: 0.0,
        });
        advance_obstacles(&mut state);
        // First tick only seeds velocity
        assert_eq!(state.obstacles[0].pos.y, -20.0);
        let mut last_step = 0.0;
        for _ in 0..10 {
            let y = state.obstacles[0].pos.y;
            advance_obstacles(&mut state);
            let step = state.obstacles[0].pos.y - y;
            assert!(step > last_step);
            last_step = step;
        }
    }

    #[test]
    fn test_prune_offscreen_bricks() {
        let mut state = session();
        for y in [100.0, 801.0, 799.0, 2000.0] {
            let id = state.next_entity_id();
            state.obstacles.push(Obstacle {
                id,
                pos: Vec2::new(250.0, y),
                size: Vec2::new(20.0, 10.0),
                dy: 0.0,
            });
        }
        prune_obstacles(&mut state);
        let ys: Vec<f32> = state.obstacles.iter().map(|o| o.pos.y).collect();
        assert_eq!(ys, vec![100.0, 799.0]);
    }
}

//! Procedural platform generation
//!
//! Platforms live in two lanes either side of the centre line. New ones are
//! stacked above the most recent anchor ("main") platform, and generation
//! branches whenever an anchor scrolls down far enough to leave open sky
//! above it.

use glam::Vec2;

use super::state::{Field, GameState, Lane, Platform};
use crate::tuning::Tuning;

/// Horizontal interval a platform in `lane` may be placed at
pub fn lane_interval(lane: Lane, field: &Field, tuning: &Tuning) -> (f32, f32) {
    match lane {
        Lane::Left => {
            let anchor = field.center_x() - tuning.lane_offset;
            (anchor - tuning.lane_outer_jitter, anchor + tuning.lane_inner_jitter)
        }
        Lane::Right => {
            let anchor = field.center_x() + tuning.lane_offset;
            (anchor - tuning.lane_inner_jitter, anchor + tuning.lane_outer_jitter)
        }
    }
}

/// Reference height used before any platform exists
pub fn baseline_y(field: &Field) -> f32 {
    field.height / 2.0 + field.height / 4.0
}

/// Generate `count` platforms. One platform goes into a random lane; larger
/// batches alternate left/right.
pub fn generate_platforms(state: &mut GameState, count: usize) {
    match count {
        0 => {}
        1 => create_single(state),
        n => create_batch(state, n),
    }
}

/// Initial layout for a fresh session
pub fn seed_platforms(state: &mut GameState) {
    let count = state.tuning.initial_batch;
    generate_platforms(state, count);
}

fn create_single(state: &mut GameState) {
    let lane = if state.rng.coin() { Lane::Left } else { Lane::Right };
    let reference = state
        .platforms
        .last()
        .map(|p| p.pos.y)
        .unwrap_or_else(|| baseline_y(&state.field));
    push_platform(state, lane, reference, true);
}

fn create_batch(state: &mut GameState, count: usize) {
    for i in 0..count {
        let (lane, is_main) = if i % 2 == 0 {
            (Lane::Left, false)
        } else {
            (Lane::Right, true)
        };
        let reference = batch_reference_y(&state.platforms, &state.field);
        push_platform(state, lane, reference, is_main);
    }
}

/// Height of the newest anchor among the two newest platforms
fn batch_reference_y(platforms: &[Platform], field: &Field) -> f32 {
    if platforms.len() < 2 {
        return baseline_y(field);
    }
    platforms
        .iter()
        .rev()
        .take(2)
        .find(|p| p.is_main)
        .or(platforms.last())
        .map(|p| p.pos.y)
        .unwrap_or_else(|| baseline_y(field))
}

fn push_platform(state: &mut GameState, lane: Lane, reference_y: f32, is_main: bool) {
    let (min_x, max_x) = lane_interval(lane, &state.field, &state.tuning);
    let x = state.rng.range(min_x, max_x);
    let y = state.rng.range(
        reference_y - state.tuning.max_spacing,
        reference_y - state.tuning.min_spacing,
    );
    let platform = Platform {
        id: state.next_entity_id(),
        pos: Vec2::new(x, y),
        size: Vec2::new(state.tuning.platform_width, state.tuning.platform_height),
        lane,
        is_main,
    };
    state.platforms.push(platform);
}

/// Drop platforms that scrolled past the bottom edge
pub fn prune_platforms(state: &mut GameState) {
    let bottom = state.field.height;
    state.platforms.retain(|p| p.pos.y <= bottom);
}

/// Branch new platforms above any anchor that has dropped below the branch
/// line. Looks at the two newest platforms as they were before this call.
pub fn branch_platforms(state: &mut GameState) {
    let line = state.tuning.branch_line;
    let triggers = state
        .platforms
        .iter()
        .rev()
        .take(2)
        .filter(|p| p.is_main && p.pos.y > line)
        .count();

    for _ in 0..triggers {
        let count = if state.rng.coin() { 1 } else { 2 };
        generate_platforms(state, count);
        log::debug!(
            "Branched {} platform(s), {} active",
            count,
            state.platforms.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(seed: u64) -> GameState {
        GameState::restart(Field::new(500.0, 800.0), Tuning::default(), seed)
    }

    fn within(v: f32, (min, max): (f32, f32)) -> bool {
        v >= min - 1e-3 && v <= max + 1e-3
    }

    #[test]
    fn test_lane_intervals() {
        let field = Field::new(500.0, 800.0);
        let tuning = Tuning::default();
        assert_eq!(lane_interval(Lane::Left, &field, &tuning), (130.0, 210.0));
        assert_eq!(lane_interval(Lane::Right, &field, &tuning), (290.0, 370.0));
    }

    #[test]
    fn test_seeded_batch_alternates_lanes() {
        let state = fresh(3);
        assert_eq!(state.platforms.len(), 10);
        for (i, p) in state.platforms.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(p.lane, Lane::Left);
                assert!(!p.is_main);
            } else {
                assert_eq!(p.lane, Lane::Right);
                assert!(p.is_main);
            }
            let interval = lane_interval(p.lane, &state.field, &state.tuning);
            assert!(within(p.pos.x, interval), "x {} outside {:?}", p.pos.x, interval);
        }
    }

    #[test]
    fn test_seeded_batch_stacks_upward() {
        let state = fresh(11);
        let base = baseline_y(&state.field);
        // First two platforms hang off the baseline
        for p in &state.platforms[..2] {
            assert!(within(p.pos.y, (base - 170.0, base - 130.0)));
        }
        // Every later pair hangs off the previous pair's anchor
        for i in 2..state.platforms.len() {
            let anchor_idx = if i % 2 == 0 { i - 1 } else { i - 2 };
            let anchor = &state.platforms[anchor_idx];
            assert!(anchor.is_main);
            let y = state.platforms[i].pos.y;
            assert!(within(y, (anchor.pos.y - 170.0, anchor.pos.y - 130.0)));
        }
    }

    #[test]
    fn test_single_platform_uses_newest() {
        let mut state = fresh(5);
        let last_y = state.platforms.last().unwrap().pos.y;
        generate_platforms(&mut state, 1);
        let p = state.platforms.last().unwrap();
        assert!(p.is_main);
        assert!(within(p.pos.y, (last_y - 170.0, last_y - 130.0)));
        let interval = lane_interval(p.lane, &state.field, &state.tuning);
        assert!(within(p.pos.x, interval));
    }

    #[test]
    fn test_generation_on_empty_set_uses_baseline() {
        let mut state = fresh(5);
        state.platforms.clear();
        generate_platforms(&mut state, 1);
        assert_eq!(state.platforms.len(), 1);
        let base = baseline_y(&state.field);
        assert!(within(state.platforms[0].pos.y, (base - 170.0, base - 130.0)));
    }

    #[test]
    fn test_batch_without_anchor_uses_newest_platform() {
        let mut state = fresh(5);
        state.platforms.clear();
        for y in [500.0, 400.0] {
            let id = state.next_entity_id();
            state.platforms.push(Platform {
                id,
                pos: Vec2::new(150.0, y),
                size: Vec2::new(8.0, 100.0),
                lane: Lane::Left,
                is_main: false,
            });
        }
        generate_platforms(&mut state, 2);
        assert_eq!(state.platforms.len(), 4);

        let first = &state.platforms[2];
        assert!(!first.is_main);
        assert!(within(first.pos.y, (400.0 - 170.0, 400.0 - 130.0)));
        // Still no anchor among the newest two, so the batch keeps stacking
        // off the newest platform
        let second = &state.platforms[3];
        assert!(second.is_main);
        assert!(within(
            second.pos.y,
            (first.pos.y - 170.0, first.pos.y - 130.0)
        ));
    }

    #[test]
    fn test_prune_removes_only_offscreen() {
        let mut state = fresh(9);
        let before = state.platforms.len();
        state.platforms[0].pos.y = 801.0;
        state.platforms[3].pos.y = 900.0;
        state.platforms[4].pos.y = 800.0;
        prune_platforms(&mut state);
        assert_eq!(state.platforms.len(), before - 2);
        assert!(state.platforms.iter().all(|p| p.pos.y <= 800.0));
    }

    #[test]
    fn test_branch_waits_for_anchor_to_drop() {
        let mut state = fresh(2);
        // Freshly seeded anchors are far above the branch line
        for p in &mut state.platforms {
            p.pos.y = -200.0;
        }
        let before = state.platforms.len();
        branch_platforms(&mut state);
        assert_eq!(state.platforms.len(), before);

        let n = state.platforms.len();
        state.platforms[n - 1].pos.y = 40.0;
        branch_platforms(&mut state);
        let added = state.platforms.len() - before;
        assert!(added == 1 || added == 2);
    }

    #[test]
    fn test_branch_on_empty_set_is_noop() {
        let mut state = fresh(2);
        state.platforms.clear();
        branch_platforms(&mut state);
        prune_platforms(&mut state);
        assert!(state.platforms.is_empty());
    }
}

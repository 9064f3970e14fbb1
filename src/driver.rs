//! Host-facing loop driver
//!
//! The host calls [`LoopDriver::pump`] from whatever timing callback it has
//! (a display refresh, a headless loop). The driver gates on a fixed virtual
//! interval, hands the renderer the current frame, then advances the
//! simulation by one tick.

use crate::sim::{Field, GameState, Snapshot};
use crate::tuning::Tuning;

/// Draws frames. Never mutates the simulation.
///
/// Frames are drawn before each tick; the tick that ends a run is followed
/// by one more frame with `ended == true`.
pub trait Renderer {
    fn render(&mut self, frame: &Snapshot);
}

/// Renderer for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Snapshot) {}
}

/// What a single pump did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not enough virtual time has passed
    Skipped,
    /// Rendered, but the session is waiting for its first jump
    Rendered,
    /// Rendered and advanced one tick
    Ticked,
    /// The session is over; the host can stop pumping
    Ended,
}

/// Fixed-step gate around a session
#[derive(Debug, Clone)]
pub struct LoopDriver {
    state: GameState,
    /// Timestamp of the last tick; `None` ticks on the next pump
    last_frame: Option<f64>,
}

impl LoopDriver {
    /// Session in the `Ready` phase: frames render, nothing moves until the
    /// first jump
    pub fn new(field: Field, tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(field, tuning, seed),
            last_frame: None,
        }
    }

    /// Start a `Ready` session without a jump
    pub fn start(&mut self) {
        self.state.start();
    }

    /// Throw the session away and begin a new one immediately.
    /// The first pump afterwards ticks without waiting for the interval.
    pub fn restart(&mut self, field: Field, seed: u64) {
        let tuning = self.state.tuning.clone();
        self.state = GameState::restart(field, tuning, seed);
        self.last_frame = None;
    }

    /// Drive one host callback
    pub fn pump<R: Renderer>(&mut self, now: f64, renderer: &mut R) -> FrameOutcome {
        if self.state.is_ended() {
            return FrameOutcome::Ended;
        }

        if let Some(last) = self.last_frame {
            if now - last <= self.state.tuning.tick_interval {
                return FrameOutcome::Skipped;
            }
        }
        self.last_frame = Some(now);

        renderer.render(&self.state.snapshot());

        if !self.state.is_active() {
            return FrameOutcome::Rendered;
        }

        self.state.tick();
        if self.state.is_ended() {
            renderer.render(&self.state.snapshot());
            FrameOutcome::Ended
        } else {
            FrameOutcome::Ticked
        }
    }

    /// Forward the "trigger jump" input
    pub fn trigger_jump(&mut self) -> bool {
        self.state.trigger_jump()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    pub fn final_score(&self) -> u64 {
        self.state.final_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[derive(Default)]
    struct CountingRenderer {
        frames: usize,
        last: Option<Snapshot>,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, frame: &Snapshot) {
            self.frames += 1;
            self.last = Some(frame.clone());
        }
    }

    fn driver() -> LoopDriver {
        LoopDriver::new(Field::new(500.0, 800.0), Tuning::default(), 10)
    }

    #[test]
    fn test_gates_on_interval() {
        let mut d = driver();
        d.start();
        let mut r = CountingRenderer::default();
        assert_eq!(d.pump(0.0, &mut r), FrameOutcome::Ticked);
        assert_eq!(d.pump(10.0, &mut r), FrameOutcome::Skipped);
        assert_eq!(d.pump(16.0, &mut r), FrameOutcome::Skipped);
        assert_eq!(d.pump(16.5, &mut r), FrameOutcome::Ticked);
        assert_eq!(r.frames, 2);
        assert_eq!(d.state().time_ticks, 2);
    }

    #[test]
    fn test_ready_renders_without_ticking() {
        let mut d = driver();
        let mut r = CountingRenderer::default();
        assert_eq!(d.pump(0.0, &mut r), FrameOutcome::Rendered);
        assert_eq!(d.pump(20.0, &mut r), FrameOutcome::Rendered);
        assert_eq!(d.state().time_ticks, 0);
        assert_eq!(r.last.map(|s| s.phase), Some(GamePhase::Ready));

        assert!(d.trigger_jump());
        assert_eq!(d.pump(40.0, &mut NullRenderer), FrameOutcome::Ticked);
    }

    #[test]
    fn test_render_happens_before_update() {
        let mut d = driver();
        d.start();
        let before = d.snapshot();
        let mut r = CountingRenderer::default();
        d.pump(0.0, &mut r);
        assert_eq!(r.last, Some(before));
        assert_ne!(d.snapshot().player, r.last.unwrap().player);
    }

    #[test]
    fn test_runs_to_end_and_stops() {
        let mut d = driver();
        d.start();
        let mut now = 0.0;
        let mut outcome = FrameOutcome::Skipped;
        for _ in 0..2000 {
            now += 17.0;
            outcome = d.pump(now, &mut NullRenderer);
            if outcome == FrameOutcome::Ended {
                break;
            }
        }
        assert_eq!(outcome, FrameOutcome::Ended);
        assert!(d.is_ended());
        let mut r = CountingRenderer::default();
        assert_eq!(d.pump(now + 100.0, &mut r), FrameOutcome::Ended);
        assert_eq!(r.frames, 0);
    }

    #[test]
    fn test_ending_tick_renders_final_frame() {
        let mut d = driver();
        d.start();
        let mut r = CountingRenderer::default();
        let mut now = 0.0;
        let mut pumps = 0;
        loop {
            now += 17.0;
            pumps += 1;
            if d.pump(now, &mut r) == FrameOutcome::Ended {
                break;
            }
            assert!(pumps < 2000);
        }
        // One frame per tick plus the closing frame
        assert_eq!(r.frames, pumps + 1);
        let last = r.last.unwrap();
        assert!(last.ended);
        assert_eq!(last, d.snapshot());
    }

    #[test]
    fn test_second_pump_after_end_draws_nothing() {
        let mut d = driver();
        d.start();
        let mut now = 0.0;
        while d.pump(now, &mut NullRenderer) != FrameOutcome::Ended {
            now += 17.0;
        }
        let mut r = CountingRenderer::default();
        assert_eq!(d.pump(now + 100.0, &mut r), FrameOutcome::Ended);
        assert_eq!(r.frames, 0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut d = driver();
        d.start();
        for i in 0..50 {
            d.pump(i as f64 * 17.0, &mut NullRenderer);
        }
        d.restart(Field::new(400.0, 700.0), 11);
        let state = d.state();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.score, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.platforms.len(), 10);
        assert_eq!(state.player.pos.x, 200.0 - 15.0);
        assert_eq!(state.player.pos.y, 350.0);
        // First pump after a restart always ticks
        assert_eq!(d.pump(0.0, &mut NullRenderer), FrameOutcome::Ticked);
    }
}

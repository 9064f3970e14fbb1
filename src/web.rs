//! Browser bindings
//!
//! Thin `wasm-bindgen` wrapper around [`LoopDriver`]. The page owns the
//! canvas, input listeners and `requestAnimationFrame`; it calls `frame`
//! from its animation callback and draws from `snapshot_json`.

use wasm_bindgen::prelude::*;

use crate::driver::{FrameOutcome, LoopDriver, NullRenderer};
use crate::sim::Field;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Wall Hop (wasm) loaded");
}

fn seed_from_clock() -> u64 {
    js_sys::Date::now() as u64
}

#[wasm_bindgen]
pub struct WebGame {
    driver: LoopDriver,
}

#[wasm_bindgen]
impl WebGame {
    /// New game waiting for its first tap
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> WebGame {
        WebGame {
            driver: LoopDriver::new(Field::new(width, height), Tuning::default(), seed_from_clock()),
        }
    }

    /// Same, with a JSON tuning override. Bad JSON falls back to defaults.
    pub fn with_tuning(width: f32, height: f32, tuning_json: &str) -> WebGame {
        let tuning = Tuning::from_json(tuning_json).unwrap_or_else(|e| {
            log::warn!("Ignoring tuning override: {}", e);
            Tuning::default()
        });
        WebGame {
            driver: LoopDriver::new(Field::new(width, height), tuning, seed_from_clock()),
        }
    }

    /// Animation callback. Returns false once the run is over.
    pub fn frame(&mut self, now: f64) -> bool {
        self.driver.pump(now, &mut NullRenderer) != FrameOutcome::Ended
    }

    pub fn jump(&mut self) -> bool {
        self.driver.trigger_jump()
    }

    pub fn restart(&mut self, width: f32, height: f32) {
        let seed = seed_from_clock();
        self.driver.restart(Field::new(width, height), seed);
        log::info!("Game restarted with seed: {}", seed);
    }

    pub fn snapshot_json(&self) -> String {
        self.driver.snapshot().to_json().unwrap_or_default()
    }

    pub fn is_ended(&self) -> bool {
        self.driver.is_ended()
    }

    pub fn final_score(&self) -> u32 {
        self.driver.final_score().min(u32::MAX as u64) as u32
    }
}

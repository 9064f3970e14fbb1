//! Wall Hop headless runner
//!
//! Plays a seeded session with a scripted jumper and reports the result.
//! The browser build uses the `web` module instead.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;

    use wall_hop::sim::{Field, Snapshot};
    use wall_hop::{FrameOutcome, LoopDriver, Renderer, Tuning};

    #[derive(Debug, Parser)]
    #[command(name = "wall-hop", about = "Run a headless Wall Hop session")]
    struct Args {
        /// RNG seed for platforms and bricks
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Field width
        #[arg(long, default_value_t = wall_hop::consts::DEFAULT_FIELD_WIDTH)]
        width: f32,
        /// Field height
        #[arg(long, default_value_t = wall_hop::consts::DEFAULT_FIELD_HEIGHT)]
        height: f32,
        /// Trigger a jump every N ticks (0 never jumps)
        #[arg(long, default_value_t = 24)]
        jump_every: u64,
        /// Stop after this many ticks even if the run is still going
        #[arg(long, default_value_t = 20_000)]
        max_ticks: u64,
        /// JSON file overriding gameplay tuning
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Print the final frame as JSON
        #[arg(long)]
        dump: bool,
    }

    /// Logs a one-line summary every second of virtual time
    struct LogRenderer {
        frames: u64,
    }

    impl Renderer for LogRenderer {
        fn render(&mut self, frame: &Snapshot) {
            self.frames += 1;
            if self.frames % 60 == 0 {
                log::debug!(
                    "frame {} score={} pose={:?} y={:.1} platforms={} bricks={}",
                    self.frames,
                    frame.score,
                    frame.player.pose,
                    frame.player.rect.y,
                    frame.platforms.len(),
                    frame.obstacles.len()
                );
            }
        }
    }

    fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
        let Some(path) = path else {
            return Ok(Tuning::default());
        };
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading tuning file {}", path.display()))?;
        let tuning = Tuning::from_json(&json)
            .with_context(|| format!("parsing tuning file {}", path.display()))?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let args = Args::parse();

        let tuning = load_tuning(args.tuning.as_ref())?;
        let interval = tuning.tick_interval;
        let field = Field::new(args.width, args.height);
        let mut driver = LoopDriver::new(field, tuning, args.seed);
        let mut renderer = LogRenderer { frames: 0 };

        log::info!("Wall Hop (headless) seed={} field={}x{}", args.seed, args.width, args.height);

        // Step just past the interval so every pump ticks
        let mut now = 0.0;
        driver.start();
        loop {
            let ticks = driver.state().time_ticks;
            if ticks >= args.max_ticks {
                log::info!("Stopping after {} ticks", ticks);
                break;
            }
            if args.jump_every > 0 && ticks % args.jump_every == 0 {
                driver.trigger_jump();
            }
            now += interval + 1.0;
            if driver.pump(now, &mut renderer) == FrameOutcome::Ended {
                break;
            }
        }

        let state = driver.state();
        println!(
            "seed={} score={} ticks={} ended={} reason={:?}",
            state.rng.seed(),
            driver.final_score(),
            state.time_ticks,
            driver.is_ended(),
            state.end_reason
        );
        if args.dump {
            println!("{}", driver.snapshot().to_json()?);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wall_hop::web, this is just to satisfy the compiler
}

//! Flappy Weather headless host
//!
//! Drives a session with synthetic 60 Hz timestamps and a simple autopilot,
//! restarting after every game over until the frame budget is spent.
//!
//! Usage: `flappy-weather [--frames N] [--seed S] [--options JSON]`

use flappy_weather::sim::{GameEvent, Pose, Session, SessionState, Snapshot};
use flappy_weather::{RunOptions, consts::*};

const FRAME_TIME: f64 = 1.0 / 60.0;

/// Command-line settings
struct Args {
    frames: u64,
    seed: u64,
    options: RunOptions,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            frames: 60 * 60,
            seed: DEFAULT_SEED,
            options: RunOptions::default(),
        }
    }
}

impl Args {
    fn parse() -> Self {
        let mut args = Args::default();
        let mut iter = std::env::args().skip(1);
        while let Some(flag) = iter.next() {
            let value = iter.next();
            match (flag.as_str(), value) {
                ("--frames", Some(v)) => match v.parse() {
                    Ok(frames) => args.frames = frames,
                    Err(_) => log::warn!("Ignoring bad frame count '{}'", v),
                },
                ("--seed", Some(v)) => match v.parse() {
                    Ok(seed) => args.seed = seed,
                    Err(_) => log::warn!("Ignoring bad seed '{}'", v),
                },
                ("--options", Some(v)) => args.options = RunOptions::from_json(&v),
                (other, _) => log::warn!("Ignoring argument '{}'", other),
            }
        }
        args
    }
}

/// Host state around one session
struct Game {
    session: Session,
    time: f64,
    runs: u32,
    best_score: u32,
}

impl Game {
    fn new(seed: u64) -> Self {
        Self {
            session: Session::with_seed(seed),
            time: 0.0,
            runs: 0,
            best_score: 0,
        }
    }

    /// Decide whether to jump this frame
    fn autopilot(snapshot: &Snapshot) -> bool {
        let flyer = snapshot.flyer;
        let flyer_bottom = flyer.max().y;

        // First gate whose right edge is still ahead of the flyer's left edge
        let target = snapshot
            .gates
            .iter()
            .find(|gate| gate.top.max().x > flyer.min().x);

        let floor = match target {
            Some(gate) => gate.bottom.min().y - 20.0,
            None => snapshot.world_size.y / 2.0 + flyer.size.y,
        };
        flyer_bottom > floor && snapshot.pose != Pose::Up
    }

    fn frame(&mut self) {
        self.time += FRAME_TIME;

        if self.session.state() == SessionState::Running
            && Self::autopilot(&self.session.snapshot())
        {
            self.session.on_jump_intent();
        }
        self.session.on_frame(self.time);

        for event in self.session.drain_events() {
            match event {
                GameEvent::GameOver { score, cause } => {
                    self.runs += 1;
                    self.best_score = self.best_score.max(score);
                    log::info!("Run {} over: {:?}, score {}", self.runs, cause, score);
                }
                GameEvent::WeatherChanged(flags) => {
                    log::info!("Weather is now {:?}", flags.phase());
                }
                other => log::debug!("{:?}", other),
            }
        }

        if self.session.state() == SessionState::GameOver {
            self.session.on_restart_intent();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Weather (headless) starting...");

    let args = Args::parse();
    let mut game = Game::new(args.seed);
    game.session.on_start_intent(args.options);

    for _ in 0..args.frames {
        game.frame();
    }

    let snapshot = game.session.snapshot();
    println!(
        "Played {} frames: {} finished runs, best score {}, current score {} ({:?})",
        args.frames,
        game.runs,
        game.best_score.max(snapshot.score),
        snapshot.score,
        snapshot.weather.phase()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is driven by the embedding page
}

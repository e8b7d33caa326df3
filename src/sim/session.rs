//! Session state machine and the per-frame update
//!
//! `Menu -> Running -> GameOver -> Menu`, plus `Running -> Menu` when the
//! player backs out. The frame update only runs while `Running`, always in
//! this order: flyer, gates, score, collision, rain. Score is evaluated
//! before collision so a gate passed on the fatal frame still counts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::collision::{self, CollisionCause};
use super::flyer::{Flyer, Pose};
use super::obstacles::{Gate, ObstacleManager};
use super::particles::ParticleField;
use super::score::ScoreTracker;
use super::snapshot::{GateView, Snapshot};
use super::weather::{WeatherFlags, WeatherStateMachine};
use crate::consts::*;
use crate::settings::{Physics, RunOptions};

/// Which screen the session is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Menu,
    Running,
    GameOver,
}

/// Things that happened since the host last drained events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { seed: u64 },
    Jumped,
    PoseChanged(Pose),
    GateScored { gate_id: u32, score: u32 },
    WeatherChanged(WeatherFlags),
    GameOver { score: u32, cause: CollisionCause },
    ReturnedToMenu,
}

/// Owns all simulation state for one player
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) state: SessionState,
    pub(crate) options: RunOptions,
    pub(crate) physics: Physics,
    pub(crate) clock: Clock,
    pub(crate) flyer: Flyer,
    pub(crate) obstacles: ObstacleManager,
    pub(crate) score: ScoreTracker,
    pub(crate) weather: WeatherStateMachine,
    pub(crate) particles: ParticleField,
    final_score: Option<u32>,
    seed: u64,
    runs: u32,
    events: Vec<GameEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Session whose first run uses `seed` (unless the options carry one)
    pub fn with_seed(seed: u64) -> Self {
        let options = RunOptions::default();
        Self {
            state: SessionState::Menu,
            options,
            physics: options.physics(),
            clock: Clock::new(),
            flyer: Flyer::default(),
            obstacles: ObstacleManager::new(seed),
            score: ScoreTracker::default(),
            weather: WeatherStateMachine::new(options.haze, options.precipitation),
            particles: ParticleField::new(particle_seed(seed)),
            final_score: None,
            seed,
            runs: 0,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    pub fn physics(&self) -> &Physics {
        &self.physics
    }

    /// Seed of the current (or most recent) run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn milestones(&self) -> u32 {
        self.score.milestones()
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn flyer(&self) -> &Flyer {
        &self.flyer
    }

    pub fn gates(&self) -> &[Gate] {
        self.obstacles.gates()
    }

    pub fn weather(&self) -> WeatherFlags {
        self.weather.flags()
    }

    pub fn particles(&self) -> &[Vec2] {
        self.particles.positions()
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a fresh run with `options` (from any state)
    pub fn start(&mut self, options: RunOptions) {
        let seed = match options.seed {
            Some(seed) => seed,
            None if self.runs == 0 => self.seed,
            None => next_seed(self.seed),
        };

        self.options = options;
        self.physics = options.physics();
        self.seed = seed;
        self.runs += 1;

        self.clock.reset();
        self.flyer.reset();
        self.score.reset();
        self.obstacles.reset(seed);
        self.weather = WeatherStateMachine::new(options.haze, options.precipitation);
        self.particles.reset(particle_seed(seed));
        self.final_score = None;
        self.state = SessionState::Running;

        log::info!(
            "Run {} started: seed={} gravity={} map={} haze={} rain={}",
            self.runs,
            seed,
            options.gravity.as_str(),
            options.map.as_str(),
            options.haze.as_str(),
            options.precipitation.as_str()
        );
        self.events.push(GameEvent::Started { seed });
    }

    /// Start again with the options of the previous run
    pub fn restart(&mut self) {
        let mut options = self.options;
        options.seed = None;
        self.start(options);
    }

    /// Advance the simulation to `timestamp` (seconds)
    pub fn on_frame(&mut self, timestamp: f64) {
        if self.state != SessionState::Running {
            return;
        }
        let dt = self.clock.tick(timestamp);
        self.update(dt);
    }

    fn update(&mut self, dt: f32) {
        let step = self.flyer.integrate(dt, self.physics.gravity, GROUND_LEVEL);
        if let Some(pose) = step.pose_changed {
            self.events.push(GameEvent::PoseChanged(pose));
        }

        self.obstacles.advance(dt);

        let scored = self.score.evaluate(&self.flyer, self.obstacles.gates_mut());
        let first_milestone = self.score.milestones() - scored.len() as u32;
        for (i, gate_id) in scored.into_iter().enumerate() {
            let passed = first_milestone + i as u32 + 1;
            log::debug!("Passed gate {} (score {})", gate_id, passed);
            self.events.push(GameEvent::GateScored {
                gate_id,
                score: passed,
            });
            if let Some(flags) = self.weather.on_milestone(passed) {
                self.events.push(GameEvent::WeatherChanged(flags));
            }
        }

        if let Some(cause) = collision::check(
            &self.flyer,
            self.obstacles.gates(),
            WORLD_HEIGHT,
            step.ground_contact,
        ) {
            self.game_over(cause);
            return;
        }

        self.particles
            .advance(dt, self.weather.flags().precipitation);
    }

    fn game_over(&mut self, cause: CollisionCause) {
        let score = self.score.score();
        log::info!("Game over ({:?}) with score {}", cause, score);
        self.final_score = Some(score);
        self.state = SessionState::GameOver;
        self.events.push(GameEvent::GameOver { score, cause });
    }

    /// Jump while running; on the game-over screen this returns to the menu
    pub fn on_jump_intent(&mut self) {
        match self.state {
            SessionState::Running => {
                let modifier = if self.weather.flags().precipitation {
                    self.physics.rain_jump_modifier
                } else {
                    1.0
                };
                self.flyer.jump(self.physics.jump_velocity, modifier);
                self.events.push(GameEvent::Jumped);
            }
            SessionState::GameOver => self.on_back_to_menu_intent(),
            SessionState::Menu => {}
        }
    }

    /// From the game-over screen, start a new run with the same options
    pub fn on_restart_intent(&mut self) {
        if self.state == SessionState::GameOver {
            self.restart();
        }
    }

    pub fn on_start_intent(&mut self, options: RunOptions) {
        self.start(options);
    }

    pub fn on_back_to_menu_intent(&mut self) {
        if self.state == SessionState::Menu {
            return;
        }
        log::info!("Back to menu");
        self.state = SessionState::Menu;
        self.clock.reset();
        self.events.push(GameEvent::ReturnedToMenu);
    }

    /// Current render state
    pub fn snapshot(&self) -> Snapshot {
        let weather = self.weather.flags();
        let gates = self
            .obstacles
            .gates()
            .iter()
            .map(|gate| {
                let (top, bottom) = gate.rects(WORLD_HEIGHT);
                GateView {
                    id: gate.id,
                    top,
                    bottom,
                    scored: gate.scored,
                }
            })
            .collect();
        let particles = if weather.precipitation {
            self.particles.rects().collect()
        } else {
            Vec::new()
        };

        Snapshot {
            state: self.state,
            score: self.score.score(),
            final_score: self.final_score,
            flyer: self.flyer.rect(),
            pose: self.flyer.pose,
            gates,
            weather,
            haze_opacity: weather.haze_opacity(),
            particles,
            map: self.options.map,
            world_size: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            ground: GROUND_LEVEL,
        }
    }
}

/// Seed for the run after one seeded with `seed`
fn next_seed(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

fn particle_seed(seed: u64) -> u64 {
    seed ^ 0x9e37_79b9_7f4a_7c15
}

//! Flappy Weather - a side-scrolling flyer with milestone-driven weather
//!
//! Core modules:
//! - `sim`: Simulation core (physics, gates, collisions, score, weather)
//! - `settings`: Run options chosen from the menu and the physics they map to
//!
//! Windowing, input binding, asset loading and drawing belong to the host.
//! The host feeds timestamps and intents into [`sim::Session`] and renders
//! from [`sim::Snapshot`].

pub mod settings;
pub mod sim;

pub use settings::{GravityTier, MapVariant, Physics, RunOptions, WeatherPolicy};
pub use sim::{Session, SessionState, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Largest simulation step accepted from the clock (seconds)
    pub const MAX_DT: f32 = 0.05;

    /// World dimensions (pixels)
    pub const WORLD_WIDTH: f32 = 900.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Ground line; the flyer's bottom edge may not pass it
    pub const GROUND_LEVEL: f32 = 550.0;

    /// Flyer defaults
    pub const FLYER_X: f32 = 100.0;
    pub const FLYER_START_Y: f32 = 250.0;
    pub const FLYER_WIDTH: f32 = 50.0;
    pub const FLYER_HEIGHT: f32 = 40.0;
    /// Vertical speed beyond which the flyer is drawn tilted up/down
    pub const POSE_THRESHOLD: f32 = 200.0;

    /// Physics defaults (normal gravity tier)
    pub const GRAVITY: f32 = 1800.0;
    pub const JUMP_VELOCITY: f32 = -520.0;
    /// Lift multiplier while it rains
    pub const RAIN_JUMP_MODIFIER: f32 = 0.6;

    /// Gate defaults
    pub const GATE_WIDTH: f32 = 80.0;
    pub const GATE_GAP: f32 = 150.0;
    pub const GATE_SPEED: f32 = 240.0;
    pub const GATE_SPACING: f32 = 360.0;
    /// Minimum distance between the gap and the top/bottom of the world
    pub const GATE_MARGIN: f32 = 80.0;
    /// Slack past the left edge before a gate is removed
    pub const REAP_MARGIN: f32 = 50.0;

    /// Weather bands are this many milestones wide
    pub const WEATHER_BAND: u32 = 5;
    pub const HAZE_OPACITY: f32 = 0.35;

    /// Rain particle pool
    pub const PARTICLE_COUNT: usize = 20;
    pub const PARTICLE_WIDTH: f32 = 3.0;
    pub const PARTICLE_HEIGHT: f32 = 15.0;
    pub const PARTICLE_SPEED: f32 = 480.0;

    /// Seed used when the host does not supply one
    pub const DEFAULT_SEED: u64 = 0x5eed_f1a9;
}

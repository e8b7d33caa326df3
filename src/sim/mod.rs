//! Simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Time only enters through `Session::on_frame` timestamps
//! - Seeded RNG only
//! - Gates kept in spawn order
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod flyer;
pub mod obstacles;
pub mod particles;
pub mod score;
pub mod session;
pub mod snapshot;
pub mod weather;

pub use clock::Clock;
pub use collision::{CollisionCause, Rect};
pub use flyer::{Flyer, FlyerStep, Pose};
pub use obstacles::{Gate, ObstacleManager};
pub use particles::ParticleField;
pub use score::ScoreTracker;
pub use session::{GameEvent, Session, SessionState};
pub use snapshot::{GateView, Snapshot};
pub use weather::{WeatherFlags, WeatherPhase, WeatherStateMachine, weather_for};

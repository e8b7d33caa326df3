//! Read-only view of a session for the renderer

use glam::Vec2;
use serde::Serialize;

use super::collision::Rect;
use super::flyer::Pose;
use super::session::SessionState;
use super::weather::WeatherFlags;
use crate::settings::MapVariant;

/// One gate as two rectangles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateView {
    pub id: u32,
    pub top: Rect,
    pub bottom: Rect,
    pub scored: bool,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub state: SessionState,
    pub score: u32,
    /// Score the last run ended with (shown on the game-over screen)
    pub final_score: Option<u32>,
    pub flyer: Rect,
    pub pose: Pose,
    pub gates: Vec<GateView>,
    pub weather: WeatherFlags,
    pub haze_opacity: f32,
    /// Empty unless it is raining
    pub particles: Vec<Rect>,
    pub map: MapVariant,
    pub world_size: Vec2,
    pub ground: f32,
}

impl Snapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

//! Run options and the physics they select
//!
//! Everything the menu can choose before a run starts. Options are
//! enumerated only; the host picks entries by index or by name.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gravity tier, each a fixed gravity/jump pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GravityTier {
    Strong,
    #[default]
    Normal,
    Weak,
}

impl GravityTier {
    pub const ALL: [GravityTier; 3] = [GravityTier::Strong, GravityTier::Normal, GravityTier::Weak];

    pub fn as_str(&self) -> &'static str {
        match self {
            GravityTier::Strong => "Strong",
            GravityTier::Normal => "Normal",
            GravityTier::Weak => "Weak",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "strong" | "high" => Some(GravityTier::Strong),
            "normal" | "medium" => Some(GravityTier::Normal),
            "weak" | "low" => Some(GravityTier::Weak),
            _ => None,
        }
    }

    /// Menu index lookup; out-of-range falls back to `Normal`
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_else(|| {
            log::warn!("Unknown gravity tier index {}, using Normal", index);
            GravityTier::default()
        })
    }

    /// Physics parameters for this tier
    pub fn physics(&self) -> Physics {
        let (gravity, jump_velocity) = match self {
            GravityTier::Strong => (2200.0, -600.0),
            GravityTier::Normal => (GRAVITY, JUMP_VELOCITY),
            GravityTier::Weak => (1400.0, -440.0),
        };
        Physics {
            gravity,
            jump_velocity,
            rain_jump_modifier: RAIN_JUMP_MODIFIER,
        }
    }
}

/// Background variant (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapVariant {
    #[default]
    Day,
    Dusk,
    Night,
}

impl MapVariant {
    pub const ALL: [MapVariant; 3] = [MapVariant::Day, MapVariant::Dusk, MapVariant::Night];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapVariant::Day => "Day",
            MapVariant::Dusk => "Dusk",
            MapVariant::Night => "Night",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "day" => Some(MapVariant::Day),
            "dusk" | "evening" => Some(MapVariant::Dusk),
            "night" => Some(MapVariant::Night),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_else(|| {
            log::warn!("Unknown map index {}, using Day", index);
            MapVariant::default()
        })
    }
}

/// How one weather flag behaves for a whole run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeatherPolicy {
    /// Never active
    Off,
    /// Active for the whole run
    On,
    /// Follows the milestone cycle
    #[default]
    Auto,
}

impl WeatherPolicy {
    pub const ALL: [WeatherPolicy; 3] = [WeatherPolicy::Off, WeatherPolicy::On, WeatherPolicy::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherPolicy::Off => "Off",
            WeatherPolicy::On => "On",
            WeatherPolicy::Auto => "Auto",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" | "false" => Some(WeatherPolicy::Off),
            "on" | "true" => Some(WeatherPolicy::On),
            "auto" | "cycle" => Some(WeatherPolicy::Auto),
            _ => None,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_else(|| {
            log::warn!("Unknown weather policy index {}, using Auto", index);
            WeatherPolicy::default()
        })
    }
}

/// Physics constants in effect for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Velocity set by a jump (pixels/s, negative is up)
    pub jump_velocity: f32,
    /// Jump multiplier while precipitation is active
    pub rain_jump_modifier: f32,
}

impl Default for Physics {
    fn default() -> Self {
        GravityTier::default().physics()
    }
}

/// Options chosen on the menu for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunOptions {
    pub gravity: GravityTier,
    pub map: MapVariant,
    pub haze: WeatherPolicy,
    pub precipitation: WeatherPolicy,
    /// Run seed; `None` lets the session pick the next one
    pub seed: Option<u64>,
}

impl RunOptions {
    /// Build options from menu indices, falling back per field
    pub fn from_indices(gravity: usize, map: usize, haze: usize, precipitation: usize) -> Self {
        Self {
            gravity: GravityTier::from_index(gravity),
            map: MapVariant::from_index(map),
            haze: WeatherPolicy::from_index(haze),
            precipitation: WeatherPolicy::from_index(precipitation),
            seed: None,
        }
    }

    /// Parse options from host-supplied JSON
    pub fn try_from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse options from JSON, using defaults when the input is malformed
    pub fn from_json(json: &str) -> Self {
        match Self::try_from_json(json) {
            Ok(options) => options,
            Err(e) => {
                log::warn!("Invalid run options ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn physics(&self) -> Physics {
        self.gravity.physics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_fallback() {
        assert_eq!(GravityTier::from_index(0), GravityTier::Strong);
        assert_eq!(GravityTier::from_index(7), GravityTier::Normal);
        assert_eq!(MapVariant::from_index(99), MapVariant::Day);
        assert_eq!(WeatherPolicy::from_index(1), WeatherPolicy::On);
        assert_eq!(WeatherPolicy::from_index(3), WeatherPolicy::Auto);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(GravityTier::from_str("WEAK"), Some(GravityTier::Weak));
        assert_eq!(MapVariant::from_str("night"), Some(MapVariant::Night));
        assert_eq!(WeatherPolicy::from_str("Off"), Some(WeatherPolicy::Off));
        assert_eq!(WeatherPolicy::from_str("sometimes"), None);
    }

    #[test]
    fn test_gravity_tiers_ordered() {
        let strong = GravityTier::Strong.physics();
        let normal = GravityTier::Normal.physics();
        let weak = GravityTier::Weak.physics();
        assert!(strong.gravity > normal.gravity && normal.gravity > weak.gravity);
        assert_eq!(normal.gravity, 1800.0);
        assert_eq!(normal.jump_velocity, -520.0);
        assert!(weak.jump_velocity > normal.jump_velocity);
    }

    #[test]
    fn test_json_options() {
        let options = RunOptions::from_json(r#"{"gravity":"strong","precipitation":"on","seed":7}"#);
        assert_eq!(options.gravity, GravityTier::Strong);
        assert_eq!(options.precipitation, WeatherPolicy::On);
        assert_eq!(options.haze, WeatherPolicy::Auto);
        assert_eq!(options.seed, Some(7));

        let reparsed = RunOptions::from_json(&options.to_json());
        assert_eq!(reparsed, options);
    }

    #[test]
    fn test_json_fallback() {
        assert_eq!(RunOptions::from_json("not json"), RunOptions::default());
        assert!(RunOptions::try_from_json(r#"{"gravity":"sideways"}"#).is_err());
    }
}

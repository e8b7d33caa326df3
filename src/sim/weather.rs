//! Milestone-driven weather
//!
//! Weather is a pure function of the number of gates passed and the run's
//! policies. Under `Auto`, five-milestone bands alternate
//! clear, haze, rain, haze, rain, ...:
//! - haze when `passed >= 5` and `passed / 5` is odd
//! - rain when `passed >= 10` and `passed / 5` is even

use serde::{Deserialize, Serialize};

use crate::consts::{HAZE_OPACITY, WEATHER_BAND};
use crate::settings::WeatherPolicy;

/// The two environmental flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeatherFlags {
    pub precipitation: bool,
    pub haze: bool,
}

impl WeatherFlags {
    pub const CLEAR: WeatherFlags = WeatherFlags {
        precipitation: false,
        haze: false,
    };

    /// Opacity of the haze overlay
    pub fn haze_opacity(&self) -> f32 {
        if self.haze { HAZE_OPACITY } else { 0.0 }
    }

    pub fn phase(&self) -> WeatherPhase {
        match (self.precipitation, self.haze) {
            (false, false) => WeatherPhase::Clear,
            (false, true) => WeatherPhase::Haze,
            (true, false) => WeatherPhase::Rain,
            (true, true) => WeatherPhase::Storm,
        }
    }
}

/// Named view of the flags for HUD display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherPhase {
    Clear,
    Haze,
    Rain,
    /// Only reachable when both flags are forced on
    Storm,
}

/// Haze flag of the automatic cycle
pub fn cyclic_haze(passed: u32) -> bool {
    passed >= WEATHER_BAND && (passed / WEATHER_BAND) % 2 == 1
}

/// Precipitation flag of the automatic cycle
pub fn cyclic_precipitation(passed: u32) -> bool {
    passed >= 2 * WEATHER_BAND && (passed / WEATHER_BAND) % 2 == 0
}

fn resolve(policy: WeatherPolicy, cyclic: bool) -> bool {
    match policy {
        WeatherPolicy::Off => false,
        WeatherPolicy::On => true,
        WeatherPolicy::Auto => cyclic,
    }
}

/// Flags for `passed` milestones under the given policies
pub fn weather_for(passed: u32, haze: WeatherPolicy, precipitation: WeatherPolicy) -> WeatherFlags {
    WeatherFlags {
        precipitation: resolve(precipitation, cyclic_precipitation(passed)),
        haze: resolve(haze, cyclic_haze(passed)),
    }
}

/// Holds the policies for a run and the flags last derived from them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherStateMachine {
    pub haze_policy: WeatherPolicy,
    pub precipitation_policy: WeatherPolicy,
    flags: WeatherFlags,
}

impl WeatherStateMachine {
    pub fn new(haze_policy: WeatherPolicy, precipitation_policy: WeatherPolicy) -> Self {
        Self {
            haze_policy,
            precipitation_policy,
            flags: weather_for(0, haze_policy, precipitation_policy),
        }
    }

    /// Back to the zero-milestone phase
    pub fn reset(&mut self) {
        self.flags = weather_for(0, self.haze_policy, self.precipitation_policy);
    }

    pub fn flags(&self) -> WeatherFlags {
        self.flags
    }

    /// Re-derive the flags after a milestone; returns them when they changed
    pub fn on_milestone(&mut self, passed: u32) -> Option<WeatherFlags> {
        let flags = weather_for(passed, self.haze_policy, self.precipitation_policy);
        if flags == self.flags {
            return None;
        }
        log::debug!("Weather at {} gates: {:?}", passed, flags.phase());
        self.flags = flags;
        Some(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cyclic_bands() {
        let auto = |n| weather_for(n, WeatherPolicy::Auto, WeatherPolicy::Auto).phase();
        assert_eq!(auto(0), WeatherPhase::Clear);
        assert_eq!(auto(4), WeatherPhase::Clear);
        assert_eq!(auto(5), WeatherPhase::Haze);
        assert_eq!(auto(9), WeatherPhase::Haze);
        assert_eq!(auto(10), WeatherPhase::Rain);
        assert_eq!(auto(15), WeatherPhase::Haze);
        assert_eq!(auto(20), WeatherPhase::Rain);
        assert_eq!(auto(35), WeatherPhase::Haze);
    }

    #[test]
    fn test_thirty_one_gates_rains() {
        let flags = weather_for(31, WeatherPolicy::Auto, WeatherPolicy::Auto);
        assert!(flags.precipitation);
        assert!(!flags.haze);
    }

    #[test]
    fn test_fixed_policies() {
        for n in [0, 7, 12, 31] {
            let flags = weather_for(n, WeatherPolicy::On, WeatherPolicy::Off);
            assert!(flags.haze);
            assert!(!flags.precipitation);
        }
        let storm = weather_for(0, WeatherPolicy::On, WeatherPolicy::On);
        assert_eq!(storm.phase(), WeatherPhase::Storm);
    }

    #[test]
    fn test_on_milestone_reports_changes() {
        let mut weather = WeatherStateMachine::new(WeatherPolicy::Auto, WeatherPolicy::Auto);
        assert_eq!(weather.flags(), WeatherFlags::CLEAR);
        assert_eq!(weather.on_milestone(4), None);
        let haze = weather.on_milestone(5).unwrap();
        assert!(haze.haze);
        assert_eq!(haze.haze_opacity(), HAZE_OPACITY);
        assert_eq!(weather.on_milestone(6), None);

        weather.reset();
        assert_eq!(weather.flags(), WeatherFlags::CLEAR);
    }

    #[test]
    fn test_forced_rain_from_start() {
        let weather = WeatherStateMachine::new(WeatherPolicy::Off, WeatherPolicy::On);
        assert!(weather.flags().precipitation);
        assert_eq!(weather.flags().haze_opacity(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_auto_flags_never_both(n in any::<u32>()) {
            let flags = weather_for(n, WeatherPolicy::Auto, WeatherPolicy::Auto);
            prop_assert!(!(flags.haze && flags.precipitation));
        }

        #[test]
        fn prop_replays_are_identical(seq in proptest::collection::vec(0u32..200, 0..50)) {
            let mut a = WeatherStateMachine::new(WeatherPolicy::Auto, WeatherPolicy::Auto);
            let mut b = WeatherStateMachine::new(WeatherPolicy::Auto, WeatherPolicy::Auto);
            for n in seq {
                prop_assert_eq!(a.on_milestone(n), b.on_milestone(n));
                prop_assert_eq!(a.flags(), b.flags());
            }
        }
    }
}

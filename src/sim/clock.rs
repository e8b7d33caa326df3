//! Frame clock
//!
//! Turns raw host timestamps (seconds) into a clamped simulation delta.

use crate::consts::MAX_DT;

/// Tracks the previous frame timestamp
#[derive(Debug, Clone, Default)]
pub struct Clock {
    last: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Forget the baseline; the next tick returns 0
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Delta since the previous tick, clamped to `[0, MAX_DT]`
    pub fn tick(&mut self, timestamp: f64) -> f32 {
        if !timestamp.is_finite() {
            log::warn!("Ignoring non-finite timestamp {}", timestamp);
            return 0.0;
        }
        let Some(last) = self.last.replace(timestamp) else {
            return 0.0;
        };

        let dt = timestamp - last;
        if dt < 0.0 {
            log::warn!("Clock went backwards by {:.4}s, holding", -dt);
            return 0.0;
        }
        (dt as f32).min(MAX_DT)
    }

    /// Whether a baseline has been recorded since the last reset
    pub fn is_anchored(&self) -> bool {
        self.last.is_some()
    }
}

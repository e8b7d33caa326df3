//! Score accounting
//!
//! A gate scores once, the first frame the flyer's horizontal center lies
//! strictly inside it. Scoring ignores the vertical axis; collision is
//! checked separately (and afterwards).

use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::obstacles::Gate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u32,
    /// Gates passed this run (drives the weather cycle)
    milestones: u32,
}

impl ScoreTracker {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn milestones(&self) -> u32 {
        self.milestones
    }

    /// Mark newly passed gates; returns their ids in gate order
    pub fn evaluate(&mut self, flyer: &Flyer, gates: &mut [Gate]) -> Vec<u32> {
        let center = flyer.center_x();
        let mut scored = Vec::new();

        for gate in gates.iter_mut().filter(|g| !g.scored) {
            if center > gate.x && center < gate.x + gate.width {
                gate.scored = true;
                self.score += 1;
                self.milestones += 1;
                scored.push(gate.id);
            }
        }
        scored
    }
}

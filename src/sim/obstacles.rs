//! Gate spawning, scrolling and removal
//!
//! Gates scroll right-to-left at a constant speed. A new gate is placed
//! exactly `GATE_SPACING` behind the most recent one, so spacing does not
//! depend on frame timing. Gates are kept in spawn order (oldest first).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// A pair of blocking segments sharing one horizontal position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub id: u32,
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Top of the gap (also the height of the upper segment)
    pub gap_start: f32,
    pub gap_size: f32,
    /// Set once the flyer has passed this gate
    pub scored: bool,
}

impl Gate {
    pub fn new(id: u32, x: f32, gap_start: f32, gap_size: f32) -> Self {
        Self {
            id,
            x,
            width: GATE_WIDTH,
            gap_start,
            gap_size,
            scored: false,
        }
    }

    #[inline]
    pub fn top_height(&self) -> f32 {
        self.gap_start
    }

    #[inline]
    pub fn bottom_height(&self, world_height: f32) -> f32 {
        world_height - (self.gap_start + self.gap_size)
    }

    /// Upper and lower segment rectangles
    pub fn rects(&self, world_height: f32) -> (Rect, Rect) {
        let bottom_height = self.bottom_height(world_height);
        let top = Rect::new(
            Vec2::new(self.x, 0.0),
            Vec2::new(self.width, self.top_height()),
        );
        let bottom = Rect::new(
            Vec2::new(self.x, world_height - bottom_height),
            Vec2::new(self.width, bottom_height),
        );
        (top, bottom)
    }
}

/// Owns the active gates
#[derive(Debug, Clone)]
pub struct ObstacleManager {
    gates: Vec<Gate>,
    rng: Pcg32,
    next_id: u32,
    world_width: f32,
    world_height: f32,
    speed: f32,
    spacing: f32,
    gap_size: f32,
    margin: f32,
    reap_margin: f32,
}

impl ObstacleManager {
    pub fn new(seed: u64) -> Self {
        Self {
            gates: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            speed: GATE_SPEED,
            spacing: GATE_SPACING,
            gap_size: GATE_GAP,
            margin: GATE_MARGIN,
            reap_margin: REAP_MARGIN,
        }
    }

    /// Clear all gates, reseed, and spawn the first gate
    pub fn reset(&mut self, seed: u64) {
        self.gates.clear();
        self.rng = Pcg32::seed_from_u64(seed);
        self.next_id = 1;
        self.spawn();
    }

    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    pub fn gates_mut(&mut self) -> &mut [Gate] {
        &mut self.gates
    }

    /// Scroll, spawn when due, then reap gates past the left edge
    pub fn advance(&mut self, dt: f32) {
        let shift = self.speed * dt;
        for gate in &mut self.gates {
            gate.x -= shift;
        }

        while self.spawn_due() {
            self.spawn();
        }

        self.reap();
    }

    fn spawn_due(&self) -> bool {
        match self.gates.last() {
            None => true,
            Some(last) => last.x < self.world_width - self.spacing,
        }
    }

    /// Add a gate behind the most recent one (or at the right edge)
    ///
    /// Follow-up gates land at `last.x + spacing`, which is up to one
    /// frame's scroll inside the right edge. Spacing stays exact.
    pub fn spawn(&mut self) -> &Gate {
        let x = self
            .gates
            .last()
            .map(|last| last.x + self.spacing)
            .unwrap_or(self.world_width);

        let min_start = self.margin;
        let max_start = self.world_height - self.gap_size - self.margin;
        let gap_start = if max_start > min_start {
            self.rng.random_range(min_start..=max_start)
        } else {
            min_start
        };

        let id = self.next_id;
        self.next_id += 1;
        log::trace!("Spawned gate {} at x={:.1} gap={:.1}", id, x, gap_start);

        self.gates.push(Gate::new(id, x, gap_start, self.gap_size));
        &self.gates[self.gates.len() - 1]
    }

    /// Remove gates fully past the left edge plus slack
    pub fn reap(&mut self) -> usize {
        let reap_margin = self.reap_margin;
        let before = self.gates.len();
        self.gates.retain(|gate| {
            let keep = gate.x >= -(gate.width + reap_margin);
            if !keep {
                log::trace!("Reaped gate {}", gate.id);
            }
            keep
        });
        before - self.gates.len()
    }

    #[cfg(test)]
    pub(crate) fn push_gate(&mut self, gate: Gate) {
        self.next_id = self.next_id.max(gate.id + 1);
        self.gates.push(gate);
    }
}

//! Rain particle pool
//!
//! A fixed number of drops fall while precipitation is on. A drop that
//! leaves the bottom of the world is moved to a random point above it.
//! The pool never grows after construction.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct ParticleField {
    drops: Vec<Vec2>,
    size: Vec2,
    speed: f32,
    world_width: f32,
    world_height: f32,
    rng: Pcg32,
}

impl ParticleField {
    pub fn new(seed: u64) -> Self {
        let mut field = Self {
            drops: Vec::with_capacity(PARTICLE_COUNT),
            size: Vec2::new(PARTICLE_WIDTH, PARTICLE_HEIGHT),
            speed: PARTICLE_SPEED,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            rng: Pcg32::seed_from_u64(seed),
        };
        field.reset(seed);
        field
    }

    /// Reseed and scatter every drop above the world
    pub fn reset(&mut self, seed: u64) {
        self.rng = Pcg32::seed_from_u64(seed);
        self.drops.clear();
        for _ in 0..PARTICLE_COUNT {
            let pos = self.random_spawn();
            self.drops.push(pos);
        }
    }

    fn random_spawn(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(0.0..self.world_width),
            self.rng.random_range(-self.world_height..0.0),
        )
    }

    /// Let every drop fall; does nothing unless `active`
    pub fn advance(&mut self, dt: f32, active: bool) {
        if !active {
            return;
        }

        let fall = self.speed * dt;
        for i in 0..self.drops.len() {
            let y = self.drops[i].y + fall;
            if y > self.world_height {
                self.drops[i] = self.random_spawn();
            } else {
                self.drops[i].y = y;
            }
        }
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.drops
    }

    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.drops.iter().map(|&pos| Rect::new(pos, self.size))
    }

    pub fn len(&self) -> usize {
        self.drops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drops.is_empty()
    }
}

//! Axis-aligned collision detection
//!
//! Rectangles overlap only with strictly positive overlap on both axes, so
//! touching edges never count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::flyer::Flyer;
use super::obstacles::Gate;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict overlap test
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionCause {
    /// Hit a gate segment
    Obstacle,
    /// Reached the ground line
    Ground,
}

/// Check the flyer against every gate segment and the ground flag
///
/// `ground_contact` is the flag raised by [`Flyer::integrate`] this frame.
pub fn check(
    flyer: &Flyer,
    gates: &[Gate],
    world_height: f32,
    ground_contact: bool,
) -> Option<CollisionCause> {
    if ground_contact {
        return Some(CollisionCause::Ground);
    }

    let body = flyer.rect();
    gates
        .iter()
        .any(|gate| {
            let (top, bottom) = gate.rects(world_height);
            body.overlaps(&top) || body.overlaps(&bottom)
        })
        .then_some(CollisionCause::Obstacle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn gate_at(x: f32, gap_start: f32) -> Gate {
        Gate::new(1, x, gap_start, GATE_GAP)
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let below = Rect::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_flyer_inside_gap() {
        let mut flyer = Flyer::default();
        flyer.pos.y = 250.0;
        let gates = [gate_at(100.0, 200.0)];
        assert_eq!(check(&flyer, &gates, WORLD_HEIGHT, false), None);
    }

    #[test]
    fn test_flyer_hits_top_segment() {
        let mut flyer = Flyer::default();
        flyer.pos.y = 190.0;
        let gates = [gate_at(100.0, 200.0)];
        assert_eq!(check(&flyer, &gates, WORLD_HEIGHT, false), Some(CollisionCause::Obstacle));
    }

    #[test]
    fn test_flyer_hits_bottom_segment() {
        let mut flyer = Flyer::default();
        flyer.pos.y = 320.0;
        let gates = [gate_at(60.0, 200.0)];
        assert_eq!(check(&flyer, &gates, WORLD_HEIGHT, false), Some(CollisionCause::Obstacle));
    }

    #[test]
    fn test_flyer_resting_on_gap_edge_is_safe() {
        // Bottom edge exactly on the lower segment's top
        let mut flyer = Flyer::default();
        flyer.pos.y = 350.0 - FLYER_HEIGHT;
        let gates = [gate_at(100.0, 200.0)];
        assert_eq!(check(&flyer, &gates, WORLD_HEIGHT, false), None);
    }

    #[test]
    fn test_ground_flag_wins() {
        let flyer = Flyer::default();
        assert_eq!(check(&flyer, &[], WORLD_HEIGHT, true), Some(CollisionCause::Ground));
    }
}

//! The player-controlled flyer
//!
//! Falls under gravity, gets a fixed upward velocity on each jump, and is
//! clamped between the ceiling and the ground line.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Drawing pose, derived from vertical velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pose {
    Up,
    #[default]
    Mid,
    Down,
}

impl Pose {
    pub fn from_velocity(vel: f32) -> Self {
        if vel < -POSE_THRESHOLD {
            Pose::Up
        } else if vel > POSE_THRESHOLD {
            Pose::Down
        } else {
            Pose::Mid
        }
    }
}

/// Outcome of one integration step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlyerStep {
    /// The flyer reached the ground line this step
    pub ground_contact: bool,
    /// New pose, only when it differs from the previous one
    pub pose_changed: Option<Pose>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flyer {
    /// Top-left corner; `x` never changes during a run
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/s, positive is down)
    pub vel: f32,
    pub pose: Pose,
}

impl Default for Flyer {
    fn default() -> Self {
        Self {
            pos: Vec2::new(FLYER_X, FLYER_START_Y),
            size: Vec2::new(FLYER_WIDTH, FLYER_HEIGHT),
            vel: 0.0,
            pose: Pose::Mid,
        }
    }
}

impl Flyer {
    /// Back to the start position, at rest
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Advance velocity and position by `dt`, clamping against `ground`
    pub fn integrate(&mut self, dt: f32, gravity: f32, ground: f32) -> FlyerStep {
        let mut step = FlyerStep::default();

        self.vel += gravity * dt;
        let next_y = self.pos.y + self.vel * dt;
        let floor = ground - self.size.y;

        if next_y < 0.0 {
            // Ceiling is inelastic
            self.pos.y = 0.0;
            self.vel = 0.0;
        } else if next_y > floor {
            self.pos.y = floor.max(0.0);
            step.ground_contact = true;
        } else {
            self.pos.y = next_y;
        }

        let pose = Pose::from_velocity(self.vel);
        if pose != self.pose {
            self.pose = pose;
            step.pose_changed = Some(pose);
        }
        step
    }

    /// Set the upward velocity for a jump, scaled by `modifier`
    pub fn jump(&mut self, jump_velocity: f32, modifier: f32) {
        self.vel = jump_velocity * modifier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integrate_free_fall() {
        let mut flyer = Flyer::default();
        assert_eq!(flyer.pos.y, 250.0);

        let step = flyer.integrate(0.05, 1800.0, GROUND_LEVEL);
        assert!(!step.ground_contact);
        assert!((flyer.vel - 90.0).abs() < 1e-4);
        assert!((flyer.pos.y - 254.5).abs() < 1e-4);
        assert_eq!(step.pose_changed, None);
    }

    #[test]
    fn test_ground_contact_clamps() {
        let mut flyer = Flyer::default();
        flyer.pos.y = 545.0;
        flyer.vel = 300.0;

        let step = flyer.integrate(0.02, 0.0, 550.0);
        assert!(step.ground_contact);
        assert_eq!(flyer.pos.y, 510.0);
    }

    #[test]
    fn test_ceiling_is_inelastic() {
        let mut flyer = Flyer::default();
        flyer.pos.y = 2.0;
        flyer.jump(-520.0, 1.0);

        let step = flyer.integrate(0.02, 1800.0, GROUND_LEVEL);
        assert!(!step.ground_contact);
        assert_eq!(flyer.pos.y, 0.0);
        assert_eq!(flyer.vel, 0.0);
        assert_eq!(flyer.pose, Pose::Mid);
    }

    #[test]
    fn test_pose_reported_on_transition_only() {
        let mut flyer = Flyer::default();
        flyer.jump(-520.0, 1.0);

        let step = flyer.integrate(0.01, 1800.0, GROUND_LEVEL);
        assert_eq!(step.pose_changed, Some(Pose::Up));
        let step = flyer.integrate(0.01, 1800.0, GROUND_LEVEL);
        assert_eq!(step.pose_changed, None);
    }

    #[test]
    fn test_rain_jump_is_weaker() {
        let mut flyer = Flyer::default();
        flyer.jump(-520.0, 0.6);
        assert!((flyer.vel - -312.0).abs() < 1e-4);
    }

    #[test]
    fn test_pose_thresholds() {
        assert_eq!(Pose::from_velocity(-200.5), Pose::Up);
        assert_eq!(Pose::from_velocity(-200.0), Pose::Mid);
        assert_eq!(Pose::from_velocity(200.0), Pose::Mid);
        assert_eq!(Pose::from_velocity(201.0), Pose::Down);
    }

    proptest! {
        #[test]
        fn prop_flyer_stays_in_bounds(
            steps in proptest::collection::vec((0.0f32..=MAX_DT, any::<bool>()), 1..200)
        ) {
            let mut flyer = Flyer::default();
            for (dt, jump) in steps {
                if jump {
                    flyer.jump(JUMP_VELOCITY, 1.0);
                }
                let step = flyer.integrate(dt, GRAVITY, GROUND_LEVEL);
                prop_assert!(flyer.pos.y >= 0.0);
                prop_assert!(flyer.pos.y <= GROUND_LEVEL - flyer.size.y);
                if step.ground_contact {
                    break;
                }
            }
        }
    }
}

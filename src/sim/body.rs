//! Shared kinematics for everything that flies
//!
//! Ship, bullets and rocks all move the same way: Euler integration at one
//! step per tick, a loose off-screen check, and toroidal wrapping at the
//! play field edges.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, velocity and heading shared by every entity.
///
/// Heading is in degrees. `alive == false` excludes the entity from
/// collision checks and schedules it for removal at end-of-tick cleanup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub pos: Vec2,
    pub vel: Vec2,
    pub heading: f32,
    pub alive: bool,
}

impl KinematicBody {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            heading,
            alive: true,
        }
    }

    /// One Euler step. Tick rate is fixed by the frame driver, so there is
    /// no delta-time scaling anywhere in the core.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Adjust heading by `delta` degrees. Once a full revolution has
    /// accumulated the heading snaps back through zero instead of taking a
    /// modulus; spin and turn both feed through here, so the snap is
    /// observable gameplay feel and stays as-is.
    pub fn rotate(&mut self, delta: f32) {
        if self.heading > 360.0 || self.heading < -360.0 {
            self.heading = 0.0;
        }
        self.heading += delta;
    }

    /// Loose bounds check, not a clamp: at or past the upper edge, or below
    /// zero, on either axis.
    pub fn is_off_screen(&self, width: f32, height: f32) -> bool {
        self.pos.x >= width || self.pos.y >= height || self.pos.x < 0.0 || self.pos.y < 0.0
    }

    /// Toroidal wrap: an out-of-range coordinate is set to the opposite
    /// bound. Both axes are corrected in the same call in case a corner
    /// exit pushes both out in one tick.
    pub fn wrap(&mut self, width: f32, height: f32) {
        if self.pos.x >= width {
            self.pos.x = 0.0;
        } else if self.pos.x <= 0.0 {
            self.pos.x = width;
        }

        if self.pos.y >= height {
            self.pos.y = 0.0;
        } else if self.pos.y <= 0.0 {
            self.pos.y = height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_is_one_euler_step() {
        let mut body = KinematicBody::new(Vec2::new(10.0, 20.0), 0.0);
        body.vel = Vec2::new(1.5, -2.5);
        body.advance();
        assert_eq!(body.pos, Vec2::new(11.5, 17.5));
        body.advance();
        assert_eq!(body.pos, Vec2::new(13.0, 15.0));
    }

    #[test]
    fn test_off_screen_bounds() {
        let mut body = KinematicBody::new(Vec2::new(400.0, 300.0), 0.0);
        assert!(!body.is_off_screen(800.0, 600.0));

        body.pos = Vec2::new(800.0, 300.0);
        assert!(body.is_off_screen(800.0, 600.0));

        body.pos = Vec2::new(-0.1, 300.0);
        assert!(body.is_off_screen(800.0, 600.0));

        body.pos = Vec2::new(400.0, 600.0);
        assert!(body.is_off_screen(800.0, 600.0));

        body.pos = Vec2::new(0.0, 0.0);
        assert!(!body.is_off_screen(800.0, 600.0));
    }

    #[test]
    fn test_wrap_sends_entity_to_opposite_edge() {
        let mut body = KinematicBody::new(Vec2::new(805.0, 300.0), 0.0);
        body.wrap(800.0, 600.0);
        assert_eq!(body.pos, Vec2::new(0.0, 300.0));

        body.pos = Vec2::new(-3.0, 300.0);
        body.wrap(800.0, 600.0);
        assert_eq!(body.pos, Vec2::new(800.0, 300.0));

        // Corner exit: both axes corrected in one call.
        body.pos = Vec2::new(900.0, -10.0);
        body.wrap(800.0, 600.0);
        assert_eq!(body.pos, Vec2::new(0.0, 600.0));
    }

    #[test]
    fn test_rotate_snaps_through_zero_after_full_turn() {
        let mut body = KinematicBody::new(Vec2::ZERO, 359.0);
        body.rotate(3.0);
        assert_eq!(body.heading, 362.0);
        // Next rotation resets to zero first, then applies the delta.
        body.rotate(3.0);
        assert_eq!(body.heading, 3.0);

        body.heading = -361.0;
        body.rotate(-3.0);
        assert_eq!(body.heading, -3.0);
    }

    proptest! {
        #[test]
        fn prop_wrap_lands_inside_bounds(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
        ) {
            let mut body = KinematicBody::new(Vec2::new(x, y), 0.0);
            body.wrap(800.0, 600.0);
            prop_assert!(body.pos.x >= 0.0 && body.pos.x <= 800.0);
            prop_assert!(body.pos.y >= 0.0 && body.pos.y <= 600.0);
        }

        #[test]
        fn prop_wrap_is_idempotent_for_onscreen(
            x in 0.1f32..799.9,
            y in 0.1f32..599.9,
        ) {
            let mut body = KinematicBody::new(Vec2::new(x, y), 0.0);
            let before = body.pos;
            body.wrap(800.0, 600.0);
            prop_assert_eq!(body.pos, before);
        }
    }
}

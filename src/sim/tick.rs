//! Fixed per-frame simulation tick
//!
//! The external frame driver calls [`tick`] exactly once per frame (60 Hz
//! nominal) with the current held-input set. All world mutation happens
//! inside that call, run to completion, single-threaded.

use super::collision::resolve_collisions;
use super::state::WorldState;

/// Input state for a single tick.
///
/// Turn and thrust are held inputs: the driver keeps them `true` for as
/// long as the key is down. `fire` is an edge: set on the press, cleared
/// by the driver once the tick has consumed it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust_forward: bool,
    pub thrust_reverse: bool,
    pub fire: bool,
}

impl WorldState {
    /// Apply the held-input set to the ship. Called exactly once per tick;
    /// reading the held set in more than one place would let intra-tick
    /// state drift.
    ///
    /// Turning is a ratchet, not a plain `heading += rate`: the
    /// accumulator resets to zero whenever the opposite direction's
    /// condition holds and then steps by the turn rate, so the first tick
    /// after a direction change is a dead tick. That is the intended feel;
    /// keep it.
    pub fn apply_held_inputs(&mut self, input: &TickInput) {
        if !self.ship.body.alive {
            return;
        }

        if input.turn_left {
            if self.turn_accum >= 0.0 {
                self.turn_accum = 0.0;
            }
            self.turn_accum += self.ship.turn_rate;
            self.ship.body.rotate(self.turn_accum);
        }

        if input.turn_right {
            if self.turn_accum <= 0.0 {
                self.turn_accum = 0.0;
            }
            self.turn_accum -= self.ship.turn_rate;
            self.ship.body.rotate(self.turn_accum);
        }

        if input.thrust_forward {
            self.ship.apply_thrust(true);
        }

        if input.thrust_reverse {
            self.ship.apply_thrust(false);
        }
    }
}

/// Advance the world by one tick.
///
/// Fixed order: fire edge, held inputs, advance every body, wrap every
/// body (ship, rocks, bullets), cleanup, collision passes (which end with
/// a second cleanup). Cleanup is idempotent, so running it twice is safe
/// by construction.
pub fn tick(world: &mut WorldState, input: &TickInput) {
    if input.fire {
        world.fire_projectile();
    }

    world.apply_held_inputs(input);

    world.ship.body.advance();
    for projectile in world.projectiles.iter_mut() {
        projectile.advance();
    }
    for rock in world.asteroids.iter_mut() {
        rock.advance();
    }

    let (width, height) = (world.config.screen_width, world.config.screen_height);
    if world.ship.body.is_off_screen(width, height) {
        world.ship.body.wrap(width, height);
    }
    for rock in world.asteroids.iter_mut() {
        if rock.body.is_off_screen(width, height) {
            rock.body.wrap(width, height);
        }
    }
    for projectile in world.projectiles.iter_mut() {
        if projectile.body.is_off_screen(width, height) {
            projectile.body.wrap(width, height);
        }
    }

    world.cleanup();
    resolve_collisions(world);

    world.time_ticks += 1;
}

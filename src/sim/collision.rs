//! Collision detection and fragmentation triggering
//!
//! Proximity is an independent-axis box test, not a Euclidean distance
//! check: two entities are "too close" when both coordinate deltas are
//! under the sum of their radii. The square hitbox is the intended
//! gameplay shape; do not upgrade it to a circle.

use glam::Vec2;

use super::state::WorldState;

/// Box proximity test: `|dx| < reach && |dy| < reach` where `reach` is the
/// sum of both radii. Strict inequality on both axes.
#[inline]
pub fn box_overlap(a: Vec2, b: Vec2, reach: f32) -> bool {
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// Run the per-tick collision passes and then a cleanup.
///
/// Bullet pass: each bullet sweeps every rock. A bullet's aliveness is
/// latched at the start of its sweep, so one bullet overlapping two rocks
/// splits both in the same tick; there is no first-hit-wins rule. A rock
/// already split this tick is skipped, so it never splits twice.
///
/// Ship pass: a rock striking the ship splits against it. The ship only
/// dies from the hit when `lethal_ship_collisions` is set; in the classic
/// tuning rocks break harmlessly on the hull.
pub fn resolve_collisions(world: &mut WorldState) {
    for projectile in world.projectiles.iter_mut() {
        if !projectile.body.alive {
            continue;
        }
        for rock in world.asteroids.iter_mut() {
            if !rock.body.alive {
                continue;
            }
            let reach = projectile.radius + rock.radius;
            if box_overlap(projectile.body.pos, rock.body.pos, reach) {
                projectile.body.alive = false;
                rock.hit = true;
                rock.split();
            }
        }
    }

    for rock in world.asteroids.iter_mut() {
        if !world.ship.body.alive || !rock.body.alive {
            continue;
        }
        let reach = world.ship.radius + rock.radius;
        if box_overlap(world.ship.body.pos, rock.body.pos, reach) {
            rock.hit = true;
            rock.split();
            if world.config.lethal_ship_collisions {
                world.ship.die();
            }
        }
    }

    world.cleanup();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::sim::state::{Asteroid, AsteroidTier, Projectile};
    use proptest::prelude::*;

    fn empty_world() -> WorldState {
        let mut world = WorldState::new(0, WorldConfig::default());
        world.asteroids.clear();
        world.projectiles.clear();
        world
    }

    fn bullet_at(world: &WorldState, pos: Vec2) -> Projectile {
        let mut bullet = Projectile::new(&world.config);
        bullet.body.pos = pos;
        bullet
    }

    fn rock_at(world: &WorldState, tier: AsteroidTier, pos: Vec2, vel: Vec2) -> Asteroid {
        Asteroid::new(tier, pos, vel, &world.config)
    }

    #[test]
    fn test_box_rule_boundary() {
        // reach = r1 + r2; just inside hits, the boundary itself and
        // anything past it misses.
        let reach = 40.0;
        let origin = Vec2::ZERO;
        assert!(box_overlap(origin, Vec2::new(39.999, 0.0), reach));
        assert!(!box_overlap(origin, Vec2::new(40.0, 0.0), reach));
        assert!(!box_overlap(origin, Vec2::new(40.001, 0.0), reach));
    }

    #[test]
    fn test_box_rule_is_square_not_circular() {
        // Euclidean distance here is ~55, well past the reach, but both
        // axis deltas are inside it. The square hitbox collides.
        let reach = 40.0;
        assert!(box_overlap(Vec2::ZERO, Vec2::new(39.0, 39.0), reach));
    }

    #[test]
    fn test_bullet_splits_large_rock_into_three() {
        let mut world = empty_world();
        world
            .asteroids
            .push(rock_at(&world, AsteroidTier::Large, Vec2::new(100.0, 100.0), Vec2::ZERO));
        let bullet = bullet_at(&world, Vec2::new(100.0, 100.0));
        world.projectiles.push(bullet);

        resolve_collisions(&mut world);

        assert!(world.projectiles.is_empty());
        assert_eq!(world.asteroids.len(), 3);
        let positions: Vec<Vec2> = world.asteroids.iter().map(|r| r.body.pos).collect();
        assert_eq!(positions[0], Vec2::new(120.0, 120.0));
        assert_eq!(positions[1], Vec2::new(80.0, 80.0));
        assert_eq!(positions[2], Vec2::new(120.0, 80.0));
        assert_eq!(world.asteroids[0].body.vel, Vec2::new(2.0, 2.0));
        assert_eq!(world.asteroids[1].body.vel, Vec2::new(-2.0, -2.0));
        assert_eq!(world.asteroids[2].body.vel, Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_one_bullet_can_take_two_rocks_in_one_tick() {
        let mut world = empty_world();
        world
            .asteroids
            .push(rock_at(&world, AsteroidTier::Small, Vec2::new(98.0, 100.0), Vec2::ZERO));
        world
            .asteroids
            .push(rock_at(&world, AsteroidTier::Small, Vec2::new(102.0, 100.0), Vec2::ZERO));
        world
            .projectiles
            .push(bullet_at(&world, Vec2::new(100.0, 100.0)));

        resolve_collisions(&mut world);

        // Both small rocks were inside the box; both are gone.
        assert!(world.asteroids.is_empty());
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_rock_splits_only_once_per_tick() {
        let mut world = empty_world();
        world
            .asteroids
            .push(rock_at(&world, AsteroidTier::Medium, Vec2::new(100.0, 100.0), Vec2::ZERO));
        world
            .projectiles
            .push(bullet_at(&world, Vec2::new(99.0, 100.0)));
        world
            .projectiles
            .push(bullet_at(&world, Vec2::new(101.0, 100.0)));

        resolve_collisions(&mut world);

        // First bullet split the rock; the second found it already dead
        // and flew on.
        assert_eq!(world.asteroids.len(), 2);
        assert_eq!(world.projectiles.len(), 1);
    }

    #[test]
    fn test_ship_survives_rock_strike_by_default() {
        let mut world = empty_world();
        let ship_pos = world.ship.body.pos;
        world
            .asteroids
            .push(rock_at(&world, AsteroidTier::Large, ship_pos, Vec2::ZERO));

        resolve_collisions(&mut world);

        assert!(world.ship.body.alive);
        // The rock still split against the hull.
        assert_eq!(world.asteroids.len(), 3);
    }

    #[test]
    fn test_lethal_flag_kills_ship() {
        let mut config = WorldConfig::default();
        config.lethal_ship_collisions = true;
        let mut world = WorldState::new(0, config);
        world.asteroids.clear();
        world.projectiles.clear();
        let ship_pos = world.ship.body.pos;
        world
            .asteroids
            .push(rock_at(&world, AsteroidTier::Large, ship_pos, Vec2::ZERO));

        resolve_collisions(&mut world);

        assert!(!world.ship.body.alive);
    }

    #[test]
    fn test_dead_entities_are_excluded() {
        let mut world = empty_world();
        let mut rock = rock_at(&world, AsteroidTier::Large, Vec2::new(100.0, 100.0), Vec2::ZERO);
        rock.split();
        world.asteroids.push(rock);
        world
            .projectiles
            .push(bullet_at(&world, Vec2::new(100.0, 100.0)));

        resolve_collisions(&mut world);

        // The bullet never touched the already-dead rock; cleanup swapped
        // it for offspring and the bullet lives on.
        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.asteroids.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_box_overlap_is_symmetric(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0,
            by in -1000.0f32..1000.0,
            reach in 0.1f32..100.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(box_overlap(a, b, reach), box_overlap(b, a, reach));
        }

        #[test]
        fn prop_box_overlap_never_reaches_past_radii(
            dx in 0.0f32..500.0,
            reach in 0.1f32..100.0,
        ) {
            // Anything at or beyond the reach on one axis can never hit.
            prop_assume!(dx >= reach);
            prop_assert!(!box_overlap(Vec2::ZERO, Vec2::new(dx, 0.0), reach));
        }
    }
}

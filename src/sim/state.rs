//! Entity state and world ownership
//!
//! The world owns one ship plus unordered projectile and asteroid
//! collections, and is the sole mutator of membership. Everything here is
//! deterministic: spawn randomness comes from a seeded `Pcg32` only.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::KinematicBody;
use crate::config::WorldConfig;
use crate::heading_to_velocity;

/// Diagonal offset of fragmentation offspring from the parent's last
/// position, in play field units.
const SPLIT_OFFSET: f32 = 20.0;
/// Speed bump added to a large rock's offspring velocities.
const LARGE_SPLIT_KICK: f32 = 2.0;
/// Speed bump added to a medium rock's offspring velocities.
const MEDIUM_SPLIT_KICK: f32 = 1.5;

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub body: KinematicBody,
    /// Degrees per held-turn tick.
    pub turn_rate: f32,
    /// Velocity gained per held-thrust tick.
    pub thrust: f32,
    /// Collision extent.
    pub radius: f32,
}

impl Ship {
    pub fn new(config: &WorldConfig) -> Self {
        // Classic spawn point: horizontal center, width - height up from
        // the bottom edge. Facing up.
        let spawn = Vec2::new(
            config.screen_width / 2.0,
            config.screen_width - config.screen_height,
        );
        Self {
            body: KinematicBody::new(spawn, 90.0),
            turn_rate: config.ship_turn_rate,
            thrust: config.ship_thrust,
            radius: config.ship_radius,
        }
    }

    /// Accumulate thrust into velocity. There is no damping anywhere, so
    /// every call here is permanent.
    ///
    /// The x component is `thrust / tan(|heading|)`. At headings near a
    /// multiple of 180 degrees the tangent vanishes and the quotient blows
    /// up; one bad tick would corrupt the velocity forever, so the x
    /// component clamps to zero when the tangent is tiny or the quotient
    /// is non-finite.
    pub fn apply_thrust(&mut self, forward: bool) {
        let tangent = self.body.heading.to_radians().abs().tan();
        let ddx = self.thrust / tangent;
        let ddx = if tangent.abs() < 1e-6 || !ddx.is_finite() {
            0.0
        } else {
            ddx
        };
        let ddy = if forward { self.thrust } else { -self.thrust };
        self.body.vel += Vec2::new(ddx, ddy);
    }

    pub fn die(&mut self) {
        self.body.alive = false;
    }
}

/// A fired bullet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub body: KinematicBody,
    pub radius: f32,
    /// Ticks since spawn; the bullet dies exactly when this reaches `life`.
    pub age: u32,
    pub life: u32,
    pub fired: bool,
}

impl Projectile {
    pub fn new(config: &WorldConfig) -> Self {
        let spawn = Vec2::new(
            config.screen_width / 2.0,
            config.screen_width - config.screen_height,
        );
        Self {
            body: KinematicBody::new(spawn, 0.0),
            radius: config.bullet_radius,
            age: 0,
            life: config.bullet_life,
            fired: false,
        }
    }

    /// Launch along `angle_deg` at `speed`.
    pub fn fire(&mut self, angle_deg: f32, speed: f32) {
        self.body.vel = heading_to_velocity(angle_deg, speed);
        self.fired = true;
    }

    /// Integrate and age. A bullet that misses everything wraps at the
    /// screen edges like anything else; only its lifetime ends it.
    pub fn advance(&mut self) {
        self.body.advance();
        self.age += 1;
        if self.age == self.life {
            self.body.alive = false;
        }
    }
}

/// Rock size class. Controls radius, spin rate, and what a split produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    pub fn radius(self, config: &WorldConfig) -> f32 {
        match self {
            AsteroidTier::Large => config.large_rock.radius,
            AsteroidTier::Medium => config.medium_rock.radius,
            AsteroidTier::Small => config.small_rock.radius,
        }
    }

    pub fn spin(self, config: &WorldConfig) -> f32 {
        match self {
            AsteroidTier::Large => config.large_rock.spin,
            AsteroidTier::Medium => config.medium_rock.spin,
            AsteroidTier::Small => config.small_rock.spin,
        }
    }
}

/// A drifting rock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: KinematicBody,
    pub tier: AsteroidTier,
    pub radius: f32,
    /// Degrees added to the heading each tick. Cosmetic rotation only.
    pub spin: f32,
    /// Set by the collision engine when something strikes this rock.
    pub hit: bool,
}

impl Asteroid {
    pub fn new(tier: AsteroidTier, pos: Vec2, vel: Vec2, config: &WorldConfig) -> Self {
        let mut body = KinematicBody::new(pos, 0.0);
        body.vel = vel;
        Self {
            body,
            tier,
            radius: tier.radius(config),
            spin: tier.spin(config),
            hit: false,
        }
    }

    /// Spin, then integrate.
    pub fn advance(&mut self) {
        self.body.rotate(self.spin);
        self.body.advance();
    }

    /// Mark this rock dead. Cleanup replaces it with its offspring.
    pub fn split(&mut self) {
        self.body.alive = false;
    }

    /// Fragmentation rule, tier-indexed:
    /// - Large -> 2 Medium + 1 Small
    /// - Medium -> 2 Small
    /// - Small -> nothing
    ///
    /// Offspring sit 20 units diagonally off the parent, carrying the
    /// parent's velocity plus a tier-specific kick; the second child is
    /// mirrored, and the large rock's extra small child keeps only the x
    /// component.
    pub fn offspring(&self, config: &WorldConfig) -> Vec<Asteroid> {
        let pos = self.body.pos;
        let vel = self.body.vel;
        match self.tier {
            AsteroidTier::Large => {
                let kicked = vel + Vec2::splat(LARGE_SPLIT_KICK);
                vec![
                    Asteroid::new(
                        AsteroidTier::Medium,
                        pos + Vec2::splat(SPLIT_OFFSET),
                        kicked,
                        config,
                    ),
                    Asteroid::new(
                        AsteroidTier::Medium,
                        pos - Vec2::splat(SPLIT_OFFSET),
                        -kicked,
                        config,
                    ),
                    Asteroid::new(
                        AsteroidTier::Small,
                        pos + Vec2::new(SPLIT_OFFSET, -SPLIT_OFFSET),
                        Vec2::new(kicked.x, 0.0),
                        config,
                    ),
                ]
            }
            AsteroidTier::Medium => {
                let kicked = vel + Vec2::splat(MEDIUM_SPLIT_KICK);
                vec![
                    Asteroid::new(
                        AsteroidTier::Small,
                        pos + Vec2::splat(SPLIT_OFFSET),
                        kicked,
                        config,
                    ),
                    Asteroid::new(
                        AsteroidTier::Small,
                        pos - Vec2::splat(SPLIT_OFFSET),
                        -kicked,
                        config,
                    ),
                ]
            }
            AsteroidTier::Small => Vec::new(),
        }
    }
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldState {
    /// Run seed for reproducibility.
    pub seed: u64,
    pub config: WorldConfig,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    /// Ratchet accumulator for held-turn input. Resets toward zero on a
    /// direction change; see `apply_held_inputs`.
    pub turn_accum: f32,
    /// Simulation tick counter.
    pub time_ticks: u64,
}

impl WorldState {
    /// Create a world with the ship at its spawn point and the initial
    /// field of large rocks at seeded-random positions.
    pub fn new(seed: u64, config: WorldConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut asteroids = Vec::with_capacity(config.initial_rock_count as usize);
        for _ in 0..config.initial_rock_count {
            let pos = Vec2::new(
                rng.random_range(0..=config.screen_width as i32) as f32,
                rng.random_range(0..=config.screen_height as i32) as f32,
            );
            // Sign draw includes zero, so a fresh rock may sit still on
            // one or both axes.
            let vel = Vec2::new(
                config.rock_base_speed * rng.random_range(-1..=1) as f32,
                config.rock_base_speed * rng.random_range(-1..=1) as f32,
            );
            asteroids.push(Asteroid::new(AsteroidTier::Large, pos, vel, &config));
        }

        log::info!(
            "world seeded: seed={seed} rocks={}",
            config.initial_rock_count
        );

        Self {
            seed,
            ship: Ship::new(&config),
            projectiles: Vec::new(),
            asteroids,
            config,
            turn_accum: 0.0,
            time_ticks: 0,
        }
    }

    /// Spawn a bullet aligned to the ship and launch it along the ship's
    /// heading. Called on the fire edge; ignored once the ship is gone.
    pub fn fire_projectile(&mut self) {
        if !self.ship.body.alive {
            return;
        }
        let mut projectile = Projectile::new(&self.config);
        projectile.body.pos = self.ship.body.pos;
        projectile.body.heading = self.ship.body.heading;
        projectile.fire(self.ship.body.heading, self.config.bullet_speed);
        log::debug!(
            "bullet fired: heading={:.1} pos=({:.1}, {:.1})",
            projectile.body.heading,
            projectile.body.pos.x,
            projectile.body.pos.y,
        );
        self.projectiles.push(projectile);
    }

    /// Remove dead entities and insert fragmentation offspring.
    ///
    /// Two-phase: the collision engine only marks entities dead, and this
    /// pass rebuilds the live collections, so nothing is removed from a
    /// list mid-traversal. Runs twice per tick and is idempotent since it
    /// only acts on `alive == false` entries.
    pub fn cleanup(&mut self) {
        self.projectiles.retain(|p| p.body.alive);

        let rocks = std::mem::take(&mut self.asteroids);
        let mut live = Vec::with_capacity(rocks.len());
        let mut spawned = Vec::new();
        for rock in rocks {
            if rock.body.alive {
                live.push(rock);
            } else {
                log::debug!(
                    "rock split: tier={:?} at ({:.1}, {:.1})",
                    rock.tier,
                    rock.body.pos.x,
                    rock.body.pos.y,
                );
                spawned.extend(rock.offspring(&self.config));
            }
        }
        live.append(&mut spawned);
        self.asteroids = live;
    }
}

//! Game tuning constants
//!
//! One immutable struct passed into `WorldState::new` and threaded through
//! the entity factories. No ambient globals: two worlds with different
//! tunings can coexist in one process.

use serde::{Deserialize, Serialize};

/// Per-tier asteroid tuning. Spin is degrees added to the heading every
/// tick (cosmetic rotation only, it never affects velocity).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RockTuning {
    pub radius: f32,
    pub spin: f32,
}

/// Complete world tuning. `Default` reproduces the classic values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Play field bounds; entities wrap at these edges.
    pub screen_width: f32,
    pub screen_height: f32,

    /// Bullet collision extent, muzzle speed, and lifetime in ticks.
    pub bullet_radius: f32,
    pub bullet_speed: f32,
    pub bullet_life: u32,

    /// Ship turn step (degrees per held tick), thrust per held tick, and
    /// collision extent.
    pub ship_turn_rate: f32,
    pub ship_thrust: f32,
    pub ship_radius: f32,

    /// Number of large rocks spawned at world creation.
    pub initial_rock_count: u32,
    /// Base speed for freshly spawned large rocks; each axis gets this
    /// times a random sign drawn from {-1, 0, +1}.
    pub rock_base_speed: f32,

    pub large_rock: RockTuning,
    pub medium_rock: RockTuning,
    pub small_rock: RockTuning,

    /// Whether a rock strike destroys the ship. Off by default: in the
    /// classic behavior rocks split against the ship without harming it.
    pub lethal_ship_collisions: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,

            bullet_radius: 30.0,
            bullet_speed: 10.0,
            bullet_life: 60,

            ship_turn_rate: 3.0,
            ship_thrust: 0.25,
            ship_radius: 30.0,

            initial_rock_count: 5,
            rock_base_speed: 1.5,

            large_rock: RockTuning { radius: 15.0, spin: 1.0 },
            medium_rock: RockTuning { radius: 5.0, spin: -2.0 },
            small_rock: RockTuning { radius: 2.0, spin: 5.0 },

            lethal_ship_collisions: false,
        }
    }
}

impl WorldConfig {
    /// Parse a tuning override from JSON. All fields are required; keep a
    /// serialized `WorldConfig::default()` around as a starting point.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

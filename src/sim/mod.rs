//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no delta-time scaling
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::KinematicBody;
pub use collision::{box_overlap, resolve_collisions};
pub use state::{Asteroid, AsteroidTier, Projectile, Ship, WorldState};
pub use tick::{TickInput, tick};

//! Rockfield - an asteroids-style arcade simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, world state)
//! - `config`: Data-driven game tuning
//!
//! The crate has no rendering or windowing dependency. An external frame
//! driver calls [`sim::tick()`] once per frame and reads entity positions,
//! headings and tiers afterward to draw.

pub mod config;
pub mod sim;

pub use config::WorldConfig;
pub use sim::{TickInput, WorldState, tick};

use glam::Vec2;

/// Velocity vector for a speed along a heading given in degrees.
#[inline]
pub fn heading_to_velocity(heading_deg: f32, speed: f32) -> Vec2 {
    let theta = heading_deg.to_radians();
    Vec2::new(theta.cos() * speed, theta.sin() * speed)
}

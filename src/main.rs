//! Rockfield entry point
//!
//! Headless demo driver: seeds a world, scripts a few seconds of input,
//! and prints what is left of the rock field. A real front end would call
//! `tick` from its frame callback and read entity state to draw; this
//! binary stands in for that driver without any rendering dependency.

use rockfield::{TickInput, WorldConfig, WorldState, tick};

const DEMO_TICKS: u32 = 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0x520C_F1E1);

    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load tuning from {path}: {err}");
                std::process::exit(2);
            }
        },
        None => WorldConfig::default(),
    };

    let mut world = WorldState::new(seed, config);
    let mut input = TickInput::default();

    for frame in 0..DEMO_TICKS {
        // Sweep the field: hold a turn for a stretch, burn the engine now
        // and then, fire twice a second.
        input.turn_left = frame % 120 < 45;
        input.turn_right = frame % 120 >= 90;
        input.thrust_forward = frame % 97 < 20;
        input.fire = frame % 30 == 0;
        tick(&mut world, &input);
    }

    let large = world
        .asteroids
        .iter()
        .filter(|r| r.tier == rockfield::sim::AsteroidTier::Large)
        .count();
    println!(
        "after {DEMO_TICKS} ticks: {} rocks ({large} still large), {} bullets in flight, ship at ({:.1}, {:.1}) heading {:.1}",
        world.asteroids.len(),
        world.projectiles.len(),
        world.ship.body.pos.x,
        world.ship.body.pos.y,
        world.ship.body.heading,
    );
}

fn load_config(path: &str) -> Result<WorldConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(WorldConfig::from_json(&json)?)
}

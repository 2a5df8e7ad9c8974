//! Step a seeded system for a simulated year and checkpoint the trajectory
//!
//! Usage: cargo run -p orrery --example track_positions
//!
//! Records every planet's daily heliocentric position into one [steps, 2]
//! array per planet, saves the lot as a compressed checkpoint, and reloads
//! it to confirm the round trip.

use std::collections::BTreeMap;

use checkpoint::Array;
use orrery::{generate_planets, SolarSystem, Star};
use units::Time;

const DAYS: usize = 365;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sun = Star::default();
    let planets = generate_planets(&sun, 4, Some(3), 0.7, 6.0)?;
    let mut system = SolarSystem::new(sun, planets);

    let names: Vec<String> = system.iter().map(|p| p.name.clone()).collect();
    let mut tracks: Vec<Vec<f64>> = vec![Vec::with_capacity(DAYS * 2); system.len()];

    let dt = Time::from_days(1.0);
    for _ in 0..DAYS {
        system.step(dt)?;
        for (track, planet) in tracks.iter_mut().zip(system.iter()) {
            let pos = planet.position_m();
            track.push(pos.x);
            track.push(pos.y);
        }
    }

    let mut arrays = BTreeMap::new();
    for (name, track) in names.iter().zip(tracks) {
        arrays.insert(name.clone(), Array::from_shape_vec(vec![DAYS, 2], track)?);
    }

    let path = std::env::temp_dir().join("orrery_trajectory.bin.gz");
    checkpoint::save(&path, &arrays)?;

    let restored = checkpoint::load(&path)?;
    assert_eq!(restored, arrays);

    println!(
        "Tracked {} planets for {} days -> {}",
        names.len(),
        DAYS,
        path.display()
    );
    Ok(())
}

//! Generate a seeded system and print one row per planet
//!
//! Usage: cargo run -p orrery --example generate_planets
//!
//! Output: CSV with one row per planet, innermost first

use orrery::{generate_planets, SolarSystem, Star, DEFAULT_INNER_AU, DEFAULT_OUTER_AU};

fn main() -> orrery::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let sun = Star::default();
    let planets = generate_planets(&sun, 8, Some(42), DEFAULT_INNER_AU, DEFAULT_OUTER_AU)?;
    let system = SolarSystem::new(sun, planets);

    // CSV header
    println!("name,kind,mass_earth,radius_earth,distance_au,period_days,speed_km_s");

    for planet in system.iter() {
        println!(
            "{},{},{:.4},{:.4},{:.4},{:.2},{:.2}",
            planet.name,
            planet.kind,
            planet.mass.to_earth_masses(),
            planet.radius.to_earth_radii(),
            planet.distance.to_au(),
            planet.period.to_days(),
            planet.orbital_speed.to_km_per_sec(),
        );
    }

    eprintln!("Generated {} planets", system.len());
    Ok(())
}

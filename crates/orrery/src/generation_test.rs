mod tests {
    use approx::assert_relative_eq;
    use units::{Length, Mass, AU_M};

    use crate::constants::SOLAR_LUMINOSITY_W;
    use crate::error::Error;
    use crate::generation::{add_custom_planet, generate_planets, snowline_au, CustomPlanet};
    use crate::planet_kind::PlanetKind;
    use crate::star::Star;
    use crate::system::SolarSystem;

    #[test]
    fn test_snowline_scales_with_luminosity() {
        // Sun-like: ~2.7 AU
        assert_relative_eq!(snowline_au(SOLAR_LUMINOSITY_W), 2.7);

        // Four times the luminosity doubles the snowline
        assert_relative_eq!(snowline_au(4.0 * SOLAR_LUMINOSITY_W), 5.4);

        // Dark or unphysical stars clamp to zero
        assert_relative_eq!(snowline_au(0.0), 0.0);
        assert_relative_eq!(snowline_au(-1.0), 0.0);
    }

    #[test]
    fn test_kind_thresholds() {
        let snowline = 2.7;
        assert_eq!(PlanetKind::from_distance(1.0, snowline), PlanetKind::Rocky);
        // 0.8 × snowline is the first gas giant orbit
        assert_eq!(
            PlanetKind::from_distance(0.8 * snowline, snowline),
            PlanetKind::GasGiant
        );
        assert_eq!(
            PlanetKind::from_distance(5.2, snowline),
            PlanetKind::GasGiant
        );
        assert_eq!(
            PlanetKind::from_distance(19.2, snowline),
            PlanetKind::IceGiant
        );
        assert_eq!(
            PlanetKind::from_distance(8.0 * snowline, snowline),
            PlanetKind::Dwarf
        );
    }

    #[test]
    fn test_generate_count_and_sorted() {
        let sun = Star::default();
        let planets = generate_planets(&sun, 10, Some(42), 0.5, 20.0).unwrap();

        assert_eq!(planets.len(), 10);
        assert!(planets
            .windows(2)
            .all(|pair| pair[0].distance <= pair[1].distance));

        for p in &planets {
            assert!(p.period.to_seconds() > 0.0);
            assert!(p.orbital_speed.to_meters_per_sec() > 0.0);
            assert!(p.phase_rad >= 0.0 && p.phase_rad < std::f64::consts::TAU);
        }

        // Jitter can push at most 8% past the nominal bounds
        assert!(planets[0].distance.to_au() > 0.5 * 0.92);
        assert!(planets[9].distance.to_au() < 20.0 * 1.08);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let sun = Star::default();
        let a = generate_planets(&sun, 6, Some(7), 0.4, 40.0).unwrap();
        let b = generate_planets(&sun, 6, Some(7), 0.4, 40.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let sun = Star::default();
        let a = generate_planets(&sun, 6, Some(1), 0.4, 40.0).unwrap();
        let b = generate_planets(&sun, 6, Some(2), 0.4, 40.0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generate_names_follow_generation_order() {
        let sun = Star::default();
        let planets = generate_planets(&sun, 3, Some(11), 0.4, 40.0).unwrap();
        let mut names: Vec<&str> = planets.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Planet 1", "Planet 2", "Planet 3"]);
    }

    #[test]
    fn test_generate_zero_planets() {
        let sun = Star::default();
        assert!(generate_planets(&sun, 0, Some(5), 0.4, 40.0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_generate_rejects_bad_bounds() {
        let sun = Star::default();
        assert!(matches!(
            generate_planets(&sun, 3, None, -1.0, 10.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_planets(&sun, 3, None, 10.0, 1.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            generate_planets(&sun, 3, None, 1.0, 1.0),
            Err(Error::InvalidArgument(_))
        ));
        // Bounds are validated even when no planets are requested
        assert!(matches!(
            generate_planets(&sun, 0, None, 0.0, 10.0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_seeded_four_planet_scenario() {
        let sun = Star::new(
            "Sun",
            Mass::from_kg(1.98847e30),
            Length::from_solar_radii(1.0),
            SOLAR_LUMINOSITY_W,
        );
        let planets = generate_planets(&sun, 4, Some(3), 0.7, 6.0).unwrap();

        assert_eq!(planets.len(), 4);
        assert!(planets
            .windows(2)
            .all(|pair| pair[0].distance < pair[1].distance));
        for p in &planets {
            assert!(p.distance.to_m() > 0.7 * 0.92 * AU_M);
            assert!(p.distance.to_m() < 6.0 * 1.08 * AU_M);
        }
    }

    #[test]
    fn test_add_custom_planet_appends_and_sorts() {
        let sun = Star::default();
        let planets = generate_planets(&sun, 3, Some(0), 0.6, 5.0).unwrap();
        let mut system = SolarSystem::new(sun, planets);

        let before = system.len();
        add_custom_planet(
            &mut system,
            CustomPlanet::new("X", PlanetKind::Rocky, 1.5),
        )
        .unwrap();

        assert_eq!(system.len(), before + 1);
        assert!(system
            .planets
            .windows(2)
            .all(|pair| pair[0].distance <= pair[1].distance));
    }

    #[test]
    fn test_add_custom_planet_wraps_phase() {
        let sun = Star::default();
        let mut system = SolarSystem::new(sun, Vec::new());

        let mut retro = CustomPlanet::new("Retro", PlanetKind::IceGiant, 12.0);
        retro.phase_deg = -90.0;
        add_custom_planet(&mut system, retro).unwrap();

        // -90° wraps to 270°
        assert_relative_eq!(system.planets[0].phase_rad, 270.0_f64.to_radians());
    }

    #[test]
    fn test_add_custom_planet_rejects_bad_distance() {
        let sun = Star::default();
        let mut system = SolarSystem::new(sun, Vec::new());
        let result = add_custom_planet(
            &mut system,
            CustomPlanet::new("X", PlanetKind::Rocky, 0.0),
        );
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert!(system.is_empty());
    }

    #[test]
    fn test_add_custom_planet_orbit_conflict() {
        let sun = Star::default();
        let mut system = SolarSystem::new(sun, Vec::new());
        add_custom_planet(
            &mut system,
            CustomPlanet::new("First", PlanetKind::Rocky, 1.0),
        )
        .unwrap();

        let result = add_custom_planet(
            &mut system,
            CustomPlanet::new("Second", PlanetKind::Rocky, 1.0),
        );
        assert!(matches!(result, Err(Error::OrbitConflict(_))));
        // Failed insertion leaves the sequence untouched
        assert_eq!(system.len(), 1);

        let mut overlapping = CustomPlanet::new("Trojan", PlanetKind::Rocky, 1.0);
        overlapping.allow_overlap = true;
        add_custom_planet(&mut system, overlapping).unwrap();
        assert_eq!(system.len(), 2);
    }
}

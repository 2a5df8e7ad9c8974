mod tests {
    use approx::assert_relative_eq;

    use crate::error::Error;
    use crate::generation::generate_planets;
    use crate::io::{from_json, to_json};
    use crate::planet_kind::PlanetKind;
    use crate::star::Star;
    use crate::system::SolarSystem;

    #[test]
    fn test_roundtrip_preserves_everything() {
        let sun = Star::default();
        let planets = generate_planets(&sun, 5, Some(42), 0.4, 40.0).unwrap();
        let system = SolarSystem::new(sun, planets);

        let restored = from_json(&to_json(&system).unwrap()).unwrap();
        assert_eq!(restored, system);

        // Planet order survives the trip
        let names: Vec<&str> = restored.iter().map(|p| p.name.as_str()).collect();
        let original: Vec<&str> = system.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, original);
    }

    #[test]
    fn test_wire_field_names() {
        let system = SolarSystem::new(Star::default(), Vec::new());
        let text = to_json(&system).unwrap();

        assert!(text.contains("\"mass_kg\""));
        assert!(text.contains("\"radius_m\""));
        assert!(text.contains("\"luminosity_w\""));
        assert!(text.contains("\"planets\""));
    }

    #[test]
    fn test_star_defaults_on_missing_fields() {
        let text = r#"{"sun": {"mass_kg": 2.0e30, "radius_m": 7.0e8}}"#;
        let system = from_json(text).unwrap();

        assert_eq!(system.sun.name, "Sun");
        assert_relative_eq!(system.sun.luminosity_w, 0.0);
        assert!(system.is_empty());
    }

    #[test]
    fn test_planet_phase_defaults_to_zero() {
        let text = r#"{
            "sun": {"mass_kg": 2.0e30, "radius_m": 7.0e8},
            "planets": [{
                "name": "P", "kind": "ice_giant",
                "mass_kg": 8.681e25, "radius_m": 2.5362e7,
                "distance_m": 4.5e12,
                "period_s": 5.2e9, "orbital_speed_mps": 5430.0
            }]
        }"#;
        let system = from_json(text).unwrap();

        assert_eq!(system.planets[0].kind, PlanetKind::IceGiant);
        assert_relative_eq!(system.planets[0].phase_rad, 0.0);
    }

    #[test]
    fn test_missing_required_field() {
        // Star without a mass
        let text = r#"{"sun": {"radius_m": 7.0e8}}"#;
        assert!(matches!(from_json(text), Err(Error::MissingField(_))));
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let text = r#"{
            "sun": {"mass_kg": 2.0e30, "radius_m": 7.0e8},
            "planets": [{
                "name": "P", "kind": "lava",
                "mass_kg": 1.0, "radius_m": 1.0, "distance_m": 1.0,
                "period_s": 1.0, "orbital_speed_mps": 1.0
            }]
        }"#;
        assert!(matches!(from_json(text), Err(Error::MissingField(_))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(from_json("not json"), Err(Error::Json(_))));
    }
}

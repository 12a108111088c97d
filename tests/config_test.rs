use discforge::config::{
    Config, FlightModel, ScoringWeights, SelectionPolicy, DEFAULT_FEET_PER_SPEED,
};
use discforge::error::DiscForgeError;
use discforge::scorer::Scorer;
use discforge::shot::SkillLevel;
use std::fs::File;
use std::io::Write;

#[test]
fn default_scorer_matches_default_config() {
    let built = Scorer::new(Config::default()).unwrap();
    let default = Scorer::default();
    for skill in [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Pro,
    ] {
        assert_eq!(built.feet_per_speed(skill), default.feet_per_speed(skill));
        assert_eq!(built.speed_cap(skill), default.speed_cap(skill));
        assert_eq!(
            built.feet_per_speed(skill),
            DEFAULT_FEET_PER_SPEED[skill.index()]
        );
    }
}

#[test]
fn weights_file_overrides_only_given_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    let mut f = File::create(&path).unwrap();
    write!(f, r#"{{"range_weight": 4.0, "feet_per_speed": "30,40,50,60"}}"#).unwrap();

    let w = ScoringWeights::load_from_file(&path).unwrap();
    assert_eq!(w.range_weight, 4.0);
    assert_eq!(w.get_feet_per_speed().unwrap(), [30.0, 40.0, 50.0, 60.0]);
    assert_eq!(w.overstable_weight, ScoringWeights::default().overstable_weight);
}

#[test]
fn bad_weights_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    let mut f = File::create(&path).unwrap();
    write!(f, r#"{{"range_weight": -1.0}}"#).unwrap();
    assert!(matches!(
        ScoringWeights::load_from_file(&path),
        Err(DiscForgeError::Config(_))
    ));

    let mut f = File::create(&path).unwrap();
    write!(f, "not json").unwrap();
    assert!(matches!(
        ScoringWeights::load_from_file(&path),
        Err(DiscForgeError::Json(_))
    ));
}

#[test]
fn invalid_config_is_rejected_by_the_scorer() {
    let bad_phases = Config {
        flight: FlightModel {
            turn_end: 0.8,
            fade_start: 0.5,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(Scorer::new(bad_phases), Err(DiscForgeError::Config(_))));

    let bad_caps = Config {
        selection: SelectionPolicy {
            speed_caps: "7,10,x,14".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(Scorer::new(bad_caps).is_err());

    let bad_table = Config {
        weights: ScoringWeights {
            feet_per_speed: "35,0,55,65".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(Scorer::new(bad_table).is_err());

    let too_few_samples = Config {
        flight: FlightModel {
            default_samples: 1,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(Scorer::new(too_few_samples).is_err());

    let default_over_limit = Config {
        flight: FlightModel {
            default_samples: 200,
            max_samples: 100,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(matches!(
        Scorer::new(default_over_limit),
        Err(DiscForgeError::Config(_))
    ));
}

#[test]
fn config_round_trips_through_json() {
    let cfg = Config::default();
    let json = serde_json::to_string(&cfg).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back.weights.feet_per_speed, cfg.weights.feet_per_speed);
    assert_eq!(back.flight.default_samples, cfg.flight.default_samples);

    let partial: Config = serde_json::from_str(r#"{"selection": {"enforce_speed_cap": true}}"#).unwrap();
    assert!(partial.selection.enforce_speed_cap);
    assert_eq!(partial.selection.speed_caps, "7,10,12,14");
}

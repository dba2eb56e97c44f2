//! Tests for attribute parsing and preset files

use dice3d_widget::widget::{DiceType, DieAttributes, DieConfig, DieError, RollBudget};

fn attributes(pairs: &[(&str, &str)]) -> DieAttributes {
    let mut attributes = DieAttributes::default();
    for (name, value) in pairs {
        assert!(attributes.set(name, *value), "unknown attribute {name}");
    }
    attributes
}

#[test]
fn test_full_attribute_set() {
    let config = attributes(&[
        ("bgcoloreven", "ivory"),
        ("bgcolorodd", "#eee"),
        ("dotcolor", "rgb(10, 20, 30)"),
        ("time", "1.5"),
        ("initialvalue", "3"),
        ("allowedrolls", "5"),
        ("minrollvalue", "2"),
        ("maxrollvalue", "8"),
    ])
    .parse()
    .unwrap();

    assert_eq!(config.colors.even, "ivory");
    assert_eq!(config.colors.odd, "#eee");
    assert_eq!(config.colors.dot, "rgb(10, 20, 30)");
    assert_eq!(config.roll_time, 1.5);
    assert_eq!(config.initial_value, 3);
    assert_eq!(config.allowed_rolls, RollBudget::Limited(5));
    assert_eq!((config.min_roll, config.max_roll), (2, 8));
}

#[test]
fn test_inverted_range_is_rejected() {
    let err = attributes(&[("minrollvalue", "10"), ("maxrollvalue", "4")])
        .parse()
        .unwrap_err();
    assert!(matches!(err, DieError::InvertedRange { min: 10, max: 4 }));
}

#[test]
fn test_negative_budget_is_rejected() {
    let err = attributes(&[("allowedrolls", "-1")]).parse().unwrap_err();
    assert!(matches!(err, DieError::NegativeBudget(-1)));
}

#[test]
fn test_zero_budget_is_allowed() {
    let config = attributes(&[("allowedrolls", "0")]).parse().unwrap();
    assert_eq!(config.allowed_rolls, RollBudget::Limited(0));
}

#[test]
fn test_non_numeric_values_are_rejected() {
    for name in ["maxrollvalue", "minrollvalue", "initialvalue", "allowedrolls", "time"] {
        let err = attributes(&[(name, "lots")]).parse().unwrap_err();
        match err {
            DieError::InvalidNumber { attribute, value } => {
                assert_eq!(attribute, name);
                assert_eq!(value, "lots");
            }
            other => panic!("{name}: unexpected error {other:?}"),
        }
    }
}

#[test]
fn test_negative_face_values_are_rejected() {
    let err = attributes(&[("minrollvalue", "-3")]).parse().unwrap_err();
    assert!(matches!(err, DieError::InvalidNumber { .. }));
}

#[test]
fn test_invalid_colors_are_rejected() {
    let err = attributes(&[("bgcolor", "not-a-color")]).parse().unwrap_err();
    match err {
        DieError::InvalidColor { attribute, .. } => assert_eq!(attribute, "bgcoloreven"),
        other => panic!("unexpected error {other:?}"),
    }

    let err = attributes(&[("dotcolor", "#12")]).parse().unwrap_err();
    assert!(matches!(err, DieError::InvalidColor { .. }));
}

#[test]
fn test_non_positive_roll_time_is_rejected() {
    for time in ["0", "-2", "NaN"] {
        let err = attributes(&[("time", time)]).parse().unwrap_err();
        assert!(
            matches!(err, DieError::InvalidRollTime(_)),
            "time {time}: {err:?}"
        );
    }
}

#[test]
fn test_enormous_roll_time_is_rejected() {
    let err = attributes(&[("time", "1e19")]).parse().unwrap_err();
    assert!(matches!(err, DieError::RollTimeTooLong(_)), "{err:?}");
    assert!(attributes(&[("time", "3600")]).parse().is_ok());
}

#[test]
fn test_ron_preset_round_trip() {
    let config = DieConfig {
        allowed_rolls: RollBudget::Unlimited,
        initial_value: 6,
        ..DieConfig::for_dice(DiceType::D6)
    };
    let ron = config.to_ron_string().unwrap();
    assert_eq!(DieConfig::from_ron_str(&ron).unwrap(), config);
}

#[test]
fn test_json_preset_fills_defaults() {
    let config = DieConfig::from_json_str(r#"{ "max_roll": 12, "allowed_rolls": 3 }"#).unwrap();
    assert_eq!(config.max_roll, 12);
    assert_eq!(config.min_roll, 1);
    assert_eq!(config.allowed_rolls, RollBudget::Limited(3));
    assert_eq!(config.colors.even, "goldenrod");
    assert_eq!(config.roll_time, 2.0);
}

#[test]
fn test_json_preset_null_budget_is_unlimited() {
    let config = DieConfig::from_json_str(r#"{ "allowed_rolls": null }"#).unwrap();
    assert_eq!(config.allowed_rolls, RollBudget::Unlimited);
}

#[test]
fn test_preset_is_validated() {
    let err = DieConfig::from_json_str(r#"{ "min_roll": 7, "max_roll": 6 }"#).unwrap_err();
    assert!(matches!(err, DieError::InvertedRange { .. }));

    let err = DieConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, DieError::Serde(_)));
}

#[test]
fn test_load_picks_format_from_extension() {
    let dir = std::env::temp_dir().join(format!("dice3d-widget-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let ron_path = dir.join("d8.ron");
    std::fs::write(&ron_path, "(max_roll: 8, allowed_rolls: Some(2))").unwrap();
    let config = DieConfig::load(&ron_path).unwrap();
    assert_eq!(config.max_roll, 8);
    assert_eq!(config.allowed_rolls, RollBudget::Limited(2));

    let json_path = dir.join("d10.json");
    std::fs::write(&json_path, r#"{ "max_roll": 10 }"#).unwrap();
    assert_eq!(DieConfig::load(&json_path).unwrap().max_roll, 10);

    let missing = DieConfig::load(dir.join("missing.ron")).unwrap_err();
    assert!(matches!(missing, DieError::Io(_)));

    std::fs::remove_dir_all(&dir).unwrap();
}

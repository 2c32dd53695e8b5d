#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_page_constants() {
    let config = PageConfig::default();
    assert_eq!(config.reload_delay_ms, 1_800_000);
    assert_eq!(config.star_count, 200);
    assert_eq!(config.repel_radius, 150.0);
    assert_eq!(config.favorites_max_age_secs, 3600);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = PageConfig::from_json(r#"{ "starCount": 50, "reloadDelayMs": 60000 }"#).expect("valid config");
    assert_eq!(config.star_count, 50);
    assert_eq!(config.reload_delay_ms, 60_000);
    assert_eq!(config.ease_rate, EASE_RATE);
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(PageConfig::from_json("{}").expect("valid config"), PageConfig::default());
}

#[test]
fn invalid_json_is_a_config_error() {
    assert!(matches!(PageConfig::from_json("not json"), Err(PageError::Config(_))));
    assert!(matches!(PageConfig::from_json(r#"{ "starCount": "many" }"#), Err(PageError::Config(_))));
}

fn out_of_range_field(raw: &str) -> &'static str {
    match PageConfig::from_json(raw) {
        Err(PageError::ConfigOutOfRange { field, .. }) => field,
        other => panic!("expected out-of-range error for {raw}, got {other:?}"),
    }
}

#[test]
fn repel_divisor_must_be_positive() {
    assert_eq!(out_of_range_field(r#"{ "repelDivisor": 0 }"#), "repelDivisor");
    assert_eq!(out_of_range_field(r#"{ "repelDivisor": -2.5 }"#), "repelDivisor");
}

#[test]
fn repel_radius_must_be_positive() {
    assert_eq!(out_of_range_field(r#"{ "repelRadius": 0 }"#), "repelRadius");
    assert_eq!(out_of_range_field(r#"{ "repelRadius": -150 }"#), "repelRadius");
}

#[test]
fn ease_rate_must_lie_in_unit_interval() {
    assert_eq!(out_of_range_field(r#"{ "easeRate": 0 }"#), "easeRate");
    assert_eq!(out_of_range_field(r#"{ "easeRate": 3.0 }"#), "easeRate");
    assert_eq!(out_of_range_field(r#"{ "easeRate": -0.01 }"#), "easeRate");
    assert_eq!(PageConfig::from_json(r#"{ "easeRate": 1.0 }"#).expect("upper bound is inclusive").ease_rate, 1.0);
}

#[test]
fn accent_probability_must_lie_in_unit_interval() {
    assert_eq!(out_of_range_field(r#"{ "accentProbability": 1.5 }"#), "accentProbability");
    assert_eq!(out_of_range_field(r#"{ "accentProbability": -0.1 }"#), "accentProbability");
    assert!(PageConfig::from_json(r#"{ "accentProbability": 0 }"#).is_ok());
    assert!(PageConfig::from_json(r#"{ "accentProbability": 1 }"#).is_ok());
}

#[test]
fn defaults_pass_validation() {
    assert!(PageConfig::default().validate().is_ok());
}

#[test]
fn validated_config_keeps_stars_finite_near_pointer() {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use crate::starfield::Starfield;

    let config = PageConfig::from_json(r#"{ "repelDivisor": 0.5, "easeRate": 1.0 }"#).expect("in range");
    let mut rng = SmallRng::seed_from_u64(3);
    let mut field = Starfield::new(300.0, 300.0, &config, &mut rng);
    for _ in 0..50 {
        field.step(&mut rng);
    }
    assert!(field.stars().iter().all(|s| s.pos.x.is_finite() && s.pos.y.is_finite()));
}

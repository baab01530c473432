#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_constants() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.min_pill, MIN_PILL);
    assert_eq!(cfg.min_part, MIN_PART);
    assert_eq!(cfg.corner_radius, CORNER_RADIUS);
    assert_eq!(cfg.shift_back, SHIFT_BACK_PX);
    assert_eq!(cfg.shift_clearance, SHIFT_CLEARANCE_PX);
    assert_eq!(cfg.color_seed, None);
}

#[test]
fn empty_lookup_yields_defaults() {
    let cfg = EditorConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn lookup_overrides_every_field() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[
        (ENV_MIN_PILL, "60"),
        (ENV_MIN_PART, "25.5"),
        (ENV_CORNER_RADIUS, "8"),
        (ENV_SHIFT_BACK, "12"),
        (ENV_SHIFT_CLEARANCE, " 3 "),
        (ENV_COLOR_SEED, "42"),
    ]))
    .unwrap();
    assert_eq!(cfg.min_pill, 60.0);
    assert_eq!(cfg.min_part, 25.5);
    assert_eq!(cfg.corner_radius, 8.0);
    assert_eq!(cfg.shift_back, 12.0);
    assert_eq!(cfg.shift_clearance, 3.0);
    assert_eq!(cfg.color_seed, Some(42));
}

#[test]
fn non_numeric_pixels_rejected() {
    let err = EditorConfig::from_lookup(lookup_from(&[(ENV_MIN_PART, "wide")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPixels { var: ENV_MIN_PART, value: "wide".into() });
}

#[test]
fn negative_pixels_rejected() {
    let err = EditorConfig::from_lookup(lookup_from(&[(ENV_SHIFT_BACK, "-1")])).unwrap_err();
    assert!(err.to_string().contains(ENV_SHIFT_BACK));
}

#[test]
fn infinite_pixels_rejected() {
    let err = EditorConfig::from_lookup(lookup_from(&[(ENV_CORNER_RADIUS, "inf")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPixels { .. }));
}

#[test]
fn bad_seed_rejected() {
    let err = EditorConfig::from_lookup(lookup_from(&[(ENV_COLOR_SEED, "-7")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSeed { .. }));
}

#[test]
fn min_pill_below_min_part_rejected() {
    let err = EditorConfig::from_lookup(lookup_from(&[(ENV_MIN_PILL, "10")])).unwrap_err();
    assert_eq!(err, ConfigError::Inconsistent { min_pill: 10.0, min_part: 20.0 });
    assert!(err.to_string().contains("below minimum part size"));
}

#[test]
fn equal_minimums_accepted() {
    let cfg = EditorConfig::from_lookup(lookup_from(&[(ENV_MIN_PILL, "20")])).unwrap();
    assert!(cfg.validate().is_ok());
}

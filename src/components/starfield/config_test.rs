use std::f64::consts::PI;

use super::config::{
	DEFAULT_DENSITY, DEFAULT_FEATURE_STAR_RATE, DEFAULT_MAX_FRAME_DT, DEFAULT_SPARKLE_RATE,
	DEFAULT_STREAK_ANGLE, DEFAULT_STREAK_INTERVAL_MS, MAX_DENSITY, MAX_FEATURE_STAR_RATE,
	StarfieldConfig,
};
use super::sampling::SampleRange;

#[test]
fn test_defaults() {
	let config = StarfieldConfig::default();
	assert_eq!(config.density, 0.0025);
	assert_eq!(config.feature_star_rate, 0.018);
	assert!(config.enable_streaks);
	assert_eq!(config.sparkle_rate, 0.0022);
	assert_eq!(config.streak_interval_ms, SampleRange::new(3000.0, 5000.0));
	assert_eq!(config.streak_angle, SampleRange::new(PI * 0.20, PI * 0.32));
	assert_eq!(config.max_frame_dt, 0.033);
}

#[test]
fn test_empty_json_gives_defaults() {
	let config = StarfieldConfig::from_json("{}").expect("empty object parses");
	assert_eq!(config, StarfieldConfig::default());
}

#[test]
fn test_partial_json_overrides_only_given_fields() {
	let json = r#"{
		"density": 0.004,
		"enableStreaks": false,
		"streakIntervalMs": { "min": 1000, "max": 2000 }
	}"#;
	let config = StarfieldConfig::from_json(json).expect("valid config");

	assert_eq!(config.density, 0.004);
	assert!(!config.enable_streaks);
	assert_eq!(config.streak_interval_ms, SampleRange::new(1000.0, 2000.0));
	assert_eq!(config.feature_star_rate, DEFAULT_FEATURE_STAR_RATE);
	assert_eq!(config.sparkle_rate, DEFAULT_SPARKLE_RATE);
	assert_eq!(config.streak_angle, DEFAULT_STREAK_ANGLE);
}

#[test]
fn test_malformed_json_is_an_error() {
	assert!(StarfieldConfig::from_json("{ density: }").is_err());
	assert!(StarfieldConfig::from_json(r#"{ "enableStreaks": "yes" }"#).is_err());
	assert!(StarfieldConfig::from_json(r#"{ "density": "lots" }"#).is_err());
}

#[test]
fn test_sanitize_rejects_negative_and_non_finite() {
	let config = StarfieldConfig {
		density: -1.0,
		feature_star_rate: f64::NAN,
		sparkle_rate: f64::INFINITY,
		max_frame_dt: 0.0,
		..StarfieldConfig::default()
	}
	.sanitized();

	assert_eq!(config.density, 0.0);
	assert_eq!(config.feature_star_rate, 0.0);
	assert_eq!(config.sparkle_rate, 0.0);
	assert_eq!(config.max_frame_dt, DEFAULT_MAX_FRAME_DT);
}

#[test]
fn test_sanitize_fixes_ranges() {
	let config = StarfieldConfig {
		streak_interval_ms: SampleRange::new(5000.0, -200.0),
		streak_angle: SampleRange::new(f64::NAN, 1.0),
		..StarfieldConfig::default()
	}
	.sanitized();

	assert_eq!(config.streak_interval_ms, SampleRange::new(0.0, 5000.0));
	assert_eq!(config.streak_angle, DEFAULT_STREAK_ANGLE);

	let untouched = StarfieldConfig::default().sanitized();
	assert_eq!(untouched.density, DEFAULT_DENSITY);
	assert_eq!(untouched.streak_interval_ms, DEFAULT_STREAK_INTERVAL_MS);
}

#[test]
fn test_sanitize_caps_oversized_density() {
	let config = StarfieldConfig::from_json(r#"{ "density": 1e12, "featureStarRate": 50 }"#)
		.expect("numbers parse");

	assert_eq!(config.density, MAX_DENSITY);
	assert_eq!(config.feature_star_rate, MAX_FEATURE_STAR_RATE);
}

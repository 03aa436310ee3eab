//! Tunable knobs for the starfield.
//!
//! Every field has a default matching the stock look, so a page can supply a
//! partial JSON object (camelCase keys) and only override what it needs.

use std::f64::consts::PI;

use serde::Deserialize;

use super::sampling::SampleRange;

/// Ordinary stars per square CSS pixel.
pub const DEFAULT_DENSITY: f64 = 0.0025;
/// Feature stars as a fraction of the ordinary star count.
pub const DEFAULT_FEATURE_STAR_RATE: f64 = 0.018;
/// Highest accepted density; eight times the default.
pub const MAX_DENSITY: f64 = 0.02;
/// Highest accepted feature star rate: one feature star per ordinary star.
pub const MAX_FEATURE_STAR_RATE: f64 = 1.0;
/// Per-frame sparkle probability for a star with sparkle weight 1.
pub const DEFAULT_SPARKLE_RATE: f64 = 0.0022;
/// Gap between shooting stars, in milliseconds.
pub const DEFAULT_STREAK_INTERVAL_MS: SampleRange = SampleRange::new(3000.0, 5000.0);
/// Shooting-star heading in radians, measured clockwise from +x in canvas space.
pub const DEFAULT_STREAK_ANGLE: SampleRange = SampleRange::new(PI * 0.20, PI * 0.32);
/// Longest frame step in seconds. Caps the jump after a backgrounded tab resumes.
pub const DEFAULT_MAX_FRAME_DT: f64 = 0.033;

/// Starfield configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarfieldConfig {
	/// Ordinary stars per square CSS pixel, at most [`MAX_DENSITY`].
	pub density: f64,
	/// Feature stars per ordinary star, at most [`MAX_FEATURE_STAR_RATE`].
	pub feature_star_rate: f64,
	/// Spawn occasional shooting stars. Ignored under reduced motion.
	pub enable_streaks: bool,
	/// Base per-frame sparkle probability.
	pub sparkle_rate: f64,
	/// Gap between shooting stars, in milliseconds.
	pub streak_interval_ms: SampleRange,
	/// Shooting-star heading in radians.
	pub streak_angle: SampleRange,
	/// Longest simulated step per frame, in seconds.
	pub max_frame_dt: f64,
}

impl Default for StarfieldConfig {
	fn default() -> Self {
		Self {
			density: DEFAULT_DENSITY,
			feature_star_rate: DEFAULT_FEATURE_STAR_RATE,
			enable_streaks: true,
			sparkle_rate: DEFAULT_SPARKLE_RATE,
			streak_interval_ms: DEFAULT_STREAK_INTERVAL_MS,
			streak_angle: DEFAULT_STREAK_ANGLE,
			max_frame_dt: DEFAULT_MAX_FRAME_DT,
		}
	}
}

impl StarfieldConfig {
	/// Parse a JSON object and sanitize the result.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Self>(text).map(Self::sanitized)
	}

	/// Replace values that would break rendering.
	///
	/// Negative or non-finite rates become 0, and density and feature star
	/// rate are capped so the star population stays allocatable. A
	/// non-positive frame cap falls back to the default, reversed ranges are
	/// swapped and negative spawn gaps are raised to 0.
	pub fn sanitized(self) -> Self {
		let interval = self
			.streak_interval_ms
			.normalized(DEFAULT_STREAK_INTERVAL_MS);
		Self {
			density: non_negative(self.density).min(MAX_DENSITY),
			feature_star_rate: non_negative(self.feature_star_rate).min(MAX_FEATURE_STAR_RATE),
			sparkle_rate: non_negative(self.sparkle_rate),
			streak_interval_ms: SampleRange::new(interval.min.max(0.0), interval.max.max(0.0)),
			streak_angle: self.streak_angle.normalized(DEFAULT_STREAK_ANGLE),
			max_frame_dt: if self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0 {
				self.max_frame_dt
			} else {
				DEFAULT_MAX_FRAME_DT
			},
			..self
		}
	}
}

fn non_negative(value: f64) -> f64 {
	if value.is_finite() { value.max(0.0) } else { 0.0 }
}

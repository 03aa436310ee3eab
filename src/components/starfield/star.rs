//! Fixed "fiber optic" stars that twinkle in place.

use std::f64::consts::TAU;

use rand::Rng;

use super::sampling::{SampleRange, power_law};
use super::theme::{Color, StarStyle};
use super::viewport::Viewport;

/// Lowest brightness a star can twinkle down to.
pub const MIN_BRIGHTNESS: f64 = 0.05;
/// Brightness ceiling, also applied after a sparkle.
pub const MAX_BRIGHTNESS: f64 = 1.0;
/// Extra brightness added on a sparkle frame.
pub const SPARKLE_BOOST: SampleRange = SampleRange::new(0.15, 0.4);
/// Upper bound on either population, whatever density is asked for.
pub const MAX_STARS: usize = 200_000;

const PHASE: SampleRange = SampleRange::new(0.0, TAU);

/// Which population a star was drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StarKind {
	/// The bulk of the field: tiny, dim, mostly cool white.
	Fiber,
	/// Rare larger, brighter stars with a slower twinkle.
	Feature,
}

/// How a star's warmth is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WarmthDistribution {
	/// `u^exponent`; exponents above 1 keep most stars cool.
	PowerLaw(f64),
	/// Uniform in `[0, 1)`.
	Uniform,
}

/// Parameter ranges for one star population.
#[derive(Clone, Debug)]
pub struct StarProfile {
	pub kind: StarKind,
	pub radius: SampleRange,
	pub base_brightness: SampleRange,
	pub twinkle_amplitude: SampleRange,
	/// Radians per second.
	pub twinkle_speed: SampleRange,
	pub sparkle_weight: SampleRange,
	pub warmth: WarmthDistribution,
}

impl StarProfile {
	pub const FIBER: StarProfile = StarProfile {
		kind: StarKind::Fiber,
		radius: SampleRange::new(0.35, 0.95),
		base_brightness: SampleRange::new(0.12, 0.55),
		twinkle_amplitude: SampleRange::new(0.15, 0.35),
		twinkle_speed: SampleRange::new(0.12, 0.4),
		sparkle_weight: SampleRange::new(0.2, 1.0),
		warmth: WarmthDistribution::PowerLaw(2.2),
	};

	pub const FEATURE: StarProfile = StarProfile {
		kind: StarKind::Feature,
		radius: SampleRange::new(0.9, 1.6),
		base_brightness: SampleRange::new(0.35, 0.9),
		twinkle_amplitude: SampleRange::new(0.12, 0.25),
		twinkle_speed: SampleRange::new(0.08, 0.25),
		sparkle_weight: SampleRange::new(0.4, 1.2),
		warmth: WarmthDistribution::Uniform,
	};
}

/// A single star. Immutable once placed; brightness is derived from time.
#[derive(Clone, Debug, PartialEq)]
pub struct StarParticle {
	pub kind: StarKind,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub base_brightness: f64,
	pub twinkle_amplitude: f64,
	pub twinkle_speed: f64,
	pub twinkle_phase: f64,
	/// 0.0 = cool white, 1.0 = warm white.
	pub warmth: f64,
	pub sparkle_weight: f64,
}

impl StarParticle {
	/// Place a star uniformly inside the viewport with parameters from `profile`.
	pub fn sample<R: Rng + ?Sized>(rng: &mut R, profile: &StarProfile, viewport: &Viewport) -> Self {
		// Draw order is fixed so a seeded rng reproduces the same field.
		let x = SampleRange::new(0.0, viewport.width).sample(rng);
		let y = SampleRange::new(0.0, viewport.height).sample(rng);
		let radius = profile.radius.sample(rng);
		let base_brightness = profile.base_brightness.sample(rng);
		let twinkle_amplitude = profile.twinkle_amplitude.sample(rng);
		let twinkle_speed = profile.twinkle_speed.sample(rng);
		let twinkle_phase = PHASE.sample(rng);
		let warmth = match profile.warmth {
			WarmthDistribution::PowerLaw(exponent) => power_law(rng, exponent),
			WarmthDistribution::Uniform => SampleRange::new(0.0, 1.0).sample(rng),
		};
		let sparkle_weight = profile.sparkle_weight.sample(rng);

		Self {
			kind: profile.kind,
			x,
			y,
			radius,
			base_brightness,
			twinkle_amplitude,
			twinkle_speed,
			twinkle_phase,
			warmth,
			sparkle_weight,
		}
	}

	/// Twinkle brightness at animation time `t` (seconds).
	pub fn brightness(&self, t: f64) -> f64 {
		let twinkle = (t * self.twinkle_speed + self.twinkle_phase).sin() * self.twinkle_amplitude;
		(self.base_brightness + twinkle).clamp(MIN_BRIGHTNESS, MAX_BRIGHTNESS)
	}

	/// Probability that this star sparkles on a given frame.
	pub fn sparkle_chance(&self, sparkle_rate: f64) -> f64 {
		sparkle_rate * self.sparkle_weight
	}

	/// Fill color at the given brightness.
	pub fn color(&self, style: &StarStyle, brightness: f64) -> Color {
		style.tint(self.warmth).with_alpha(brightness)
	}
}

/// Apply a one-frame sparkle boost to `brightness`.
pub fn sparkle<R: Rng + ?Sized>(rng: &mut R, brightness: f64) -> f64 {
	(brightness + SPARKLE_BOOST.sample(rng)).clamp(0.0, MAX_BRIGHTNESS)
}

/// Number of `(fiber, feature)` stars for a viewport.
///
/// Each count is capped at [`MAX_STARS`] regardless of the inputs.
pub fn star_counts(viewport: &Viewport, density: f64, feature_star_rate: f64) -> (usize, usize) {
	let fiber = capped_count(viewport.area() * density);
	let feature = capped_count(fiber as f64 * feature_star_rate);
	(fiber, feature)
}

fn capped_count(value: f64) -> usize {
	// NaN fails `max` and lands on 0
	value.floor().max(0.0).min(MAX_STARS as f64) as usize
}

/// Generate a fresh population: fiber stars first, then feature stars.
pub fn populate<R: Rng + ?Sized>(
	rng: &mut R,
	viewport: &Viewport,
	density: f64,
	feature_star_rate: f64,
) -> Vec<StarParticle> {
	let (fiber, feature) = star_counts(viewport, density, feature_star_rate);
	let mut stars = Vec::with_capacity(fiber.saturating_add(feature));

	for _ in 0..fiber {
		stars.push(StarParticle::sample(rng, &StarProfile::FIBER, viewport));
	}
	for _ in 0..feature {
		stars.push(StarParticle::sample(rng, &StarProfile::FEATURE, viewport));
	}

	stars
}

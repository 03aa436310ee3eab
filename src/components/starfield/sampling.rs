//! Random sampling helpers for particle parameters.

use rand::Rng;
use serde::Deserialize;

/// A closed interval that particle parameters are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SampleRange {
	/// Lower bound.
	pub min: f64,
	/// Upper bound.
	pub max: f64,
}

impl SampleRange {
	/// Construct a range. No ordering is enforced here; see [`SampleRange::normalized`].
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// Draw a value uniformly from the range.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		uniform(rng, self.min, self.max)
	}

	/// Whether `value` lies within `[min, max]`.
	pub fn contains(&self, value: f64) -> bool {
		value >= self.min && value <= self.max
	}

	/// Swap reversed bounds; fall back to `fallback` if either bound is not finite.
	pub fn normalized(self, fallback: SampleRange) -> Self {
		if !self.min.is_finite() || !self.max.is_finite() {
			return fallback;
		}
		if self.min > self.max {
			Self::new(self.max, self.min)
		} else {
			self
		}
	}
}

/// Uniform sample in `[lo, hi)`. A collapsed range (`lo == hi`) yields `lo`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
	lo + rng.random::<f64>() * (hi - lo)
}

/// Sample `u^exponent` for `u` uniform in `[0, 1)`.
///
/// Exponents above 1 bias the result toward zero.
pub fn power_law<R: Rng + ?Sized>(rng: &mut R, exponent: f64) -> f64 {
	rng.random::<f64>().powf(exponent)
}

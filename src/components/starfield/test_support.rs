use rand::RngCore;

use super::render::Surface;
use super::theme::{BackdropStyle, Color, GradientStop};
use super::viewport::Viewport;

/// An rng that always returns the same word. `FixedRng::LOW` makes every
/// uniform draw land on its lower bound; `FixedRng::HIGH` on its upper bound.
pub struct FixedRng(pub u64);

impl FixedRng {
	pub const LOW: FixedRng = FixedRng(0);
	pub const HIGH: FixedRng = FixedRng(u64::MAX);
}

impl RngCore for FixedRng {
	fn next_u32(&mut self) -> u32 {
		(self.0 >> 32) as u32
	}

	fn next_u64(&mut self) -> u64 {
		self.0
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		dst.fill(self.0 as u8);
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarDraw {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StreakDraw {
	pub head: (f64, f64),
	pub tail: (f64, f64),
	pub width: f64,
	pub stops: Vec<GradientStop>,
}

/// Records every paint call.
#[derive(Default)]
pub struct RecordingSurface {
	pub configured: Vec<Viewport>,
	pub backdrops: usize,
	pub stars: Vec<StarDraw>,
	pub streaks: Vec<StreakDraw>,
}

impl RecordingSurface {
	/// Total paint calls of any kind.
	pub fn paint_calls(&self) -> usize {
		self.backdrops + self.stars.len() + self.streaks.len()
	}

	pub fn clear_paint(&mut self) {
		self.backdrops = 0;
		self.stars.clear();
		self.streaks.clear();
	}
}

impl Surface for RecordingSurface {
	fn configure(&mut self, viewport: &Viewport) {
		self.configured.push(*viewport);
	}

	fn fill_backdrop(&mut self, _viewport: &Viewport, _style: &BackdropStyle) {
		self.backdrops += 1;
	}

	fn fill_star(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.stars.push(StarDraw { x, y, radius, color });
	}

	fn stroke_streak(&mut self, head: (f64, f64), tail: (f64, f64), width: f64, stops: &[GradientStop]) {
		self.streaks.push(StreakDraw {
			head,
			tail,
			width,
			stops: stops.to_vec(),
		});
	}
}

/// Timestamps in milliseconds for `frames` frames at 60 Hz starting at 0.
pub fn frames_at_60hz(frames: usize) -> impl Iterator<Item = f64> {
	(0..frames).map(|i| i as f64 * 1000.0 / 60.0)
}

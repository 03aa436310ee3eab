//! Short-lived shooting stars and their spawn timing.

use rand::Rng;

use super::sampling::SampleRange;
use super::viewport::Viewport;

/// Spawn x as a fraction of width. Slightly wider than the surface so streaks
/// can enter from the edges.
const SPAWN_X: SampleRange = SampleRange::new(-0.05, 1.05);
/// Spawn y as a fraction of height. Kept to the upper third.
const SPAWN_Y: SampleRange = SampleRange::new(-0.05, 0.35);
/// Pixels per second.
const SPEED: SampleRange = SampleRange::new(420.0, 820.0);
/// Life lost per second.
const DECAY_RATE: SampleRange = SampleRange::new(1.4, 2.0);
/// Trail length in pixels.
const LENGTH: SampleRange = SampleRange::new(80.0, 160.0);
/// Stroke width in pixels.
const WIDTH: SampleRange = SampleRange::new(0.8, 1.6);

/// A shooting star moving in a straight line while it fades.
#[derive(Clone, Debug, PartialEq)]
pub struct StreakParticle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Starts at 1 and counts down; the streak is dead at or below 0.
	pub life: f64,
	pub decay_rate: f64,
	pub length: f64,
	pub width: f64,
}

impl StreakParticle {
	/// Spawn a streak near the top of the viewport heading within `heading` radians.
	pub fn spawn<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport, heading: &SampleRange) -> Self {
		let x = SPAWN_X.sample(rng) * viewport.width;
		let y = SPAWN_Y.sample(rng) * viewport.height;
		let speed = SPEED.sample(rng);
		let angle = heading.sample(rng);

		Self {
			x,
			y,
			vx: angle.cos() * speed,
			vy: angle.sin() * speed,
			life: 1.0,
			decay_rate: DECAY_RATE.sample(rng),
			length: LENGTH.sample(rng),
			width: WIDTH.sample(rng),
		}
	}

	/// Move and fade by `dt` seconds.
	pub fn advance(&mut self, dt: f64) {
		self.x += self.vx * dt;
		self.y += self.vy * dt;
		self.life -= self.decay_rate * dt;
	}

	pub fn is_alive(&self) -> bool {
		self.life > 0.0
	}

	/// Remaining life clamped to `[0, 1]` for drawing.
	pub fn visible_life(&self) -> f64 {
		self.life.clamp(0.0, 1.0)
	}

	/// Unit vector along the velocity. A stationary streak has no direction.
	pub fn direction(&self) -> (f64, f64) {
		let magnitude = self.vx.hypot(self.vy);
		if magnitude > 0.0 {
			(self.vx / magnitude, self.vy / magnitude)
		} else {
			(0.0, 0.0)
		}
	}

	/// End of the trail, `length` pixels behind the head.
	pub fn tail(&self) -> (f64, f64) {
		let (nx, ny) = self.direction();
		(self.x - nx * self.length, self.y - ny * self.length)
	}
}

/// Decides when the next streak spawns.
///
/// The first poll always spawns. Each spawn pushes the deadline out by a gap
/// drawn from `interval_ms`.
#[derive(Clone, Debug)]
pub struct StreakScheduler {
	interval_ms: SampleRange,
	next_spawn_ms: Option<f64>,
}

impl StreakScheduler {
	pub fn new(interval_ms: SampleRange) -> Self {
		Self {
			interval_ms,
			next_spawn_ms: None,
		}
	}

	/// Returns `true` if a streak should spawn at `now_ms`, rescheduling if so.
	pub fn poll<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
		let due = self.next_spawn_ms.is_none_or(|deadline| now_ms >= deadline);
		if due {
			self.next_spawn_ms = Some(now_ms + self.interval_ms.sample(rng));
		}
		due
	}

	/// Deadline of the next spawn, if one has been scheduled.
	pub fn next_spawn_ms(&self) -> Option<f64> {
		self.next_spawn_ms
	}
}

//! Frame timing.

/// Tracks the animation clock and derives a bounded step per frame.
#[derive(Clone, Debug)]
pub struct FrameClock {
	last_ms: Option<f64>,
	now_ms: f64,
	max_dt: f64,
}

impl FrameClock {
	/// `max_dt` is the largest step, in seconds, a single frame may report.
	pub fn new(max_dt: f64) -> Self {
		Self {
			last_ms: None,
			now_ms: 0.0,
			max_dt,
		}
	}

	/// Record a frame timestamp and return the elapsed seconds since the
	/// previous one, clamped to `[0, max_dt]`. The first tick returns 0.
	pub fn tick(&mut self, now_ms: f64) -> f64 {
		let dt = match self.last_ms {
			Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, self.max_dt),
			None => 0.0,
		};
		self.last_ms = Some(now_ms);
		self.now_ms = now_ms;
		// NaN timestamps would otherwise poison every later frame.
		if dt.is_nan() { 0.0 } else { dt }
	}

	/// Animation time in seconds of the latest tick.
	pub fn seconds(&self) -> f64 {
		self.now_ms / 1000.0
	}
}

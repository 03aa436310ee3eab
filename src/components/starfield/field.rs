//! Starfield simulation state and the per-frame step.
//!
//! A [`ParticleField`] owns everything one backdrop instance needs: the star
//! population, live shooting stars, spawn schedule, frame clock and its own
//! random source. [`ParticleField::frame`] advances the simulation and paints
//! a complete frame onto a [`Surface`], so it runs the same way under the
//! browser loop and in tests.

use log::debug;
use rand::Rng;

use super::clock::FrameClock;
use super::config::StarfieldConfig;
use super::render::Surface;
use super::star::{self, StarParticle};
use super::streak::{StreakParticle, StreakScheduler};
use super::theme::SkyTheme;
use super::viewport::{SurfaceSize, Viewport};

/// What happened during one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
	/// Seconds since the previous frame, after clamping.
	pub dt: f64,
	pub stars_drawn: usize,
	/// Stars that got a sparkle boost this frame.
	pub sparkles: usize,
	pub streak_spawned: bool,
	/// Streaks still alive after this frame.
	pub active_streaks: usize,
}

/// State for one animated starfield.
pub struct ParticleField<R> {
	config: StarfieldConfig,
	theme: SkyTheme,
	viewport: Viewport,
	stars: Vec<StarParticle>,
	streaks: Vec<StreakParticle>,
	scheduler: StreakScheduler,
	clock: FrameClock,
	reduced_motion: bool,
	/// Latest resize request, applied at the next frame boundary.
	pending_resize: Option<SurfaceSize>,
	rng: R,
}

impl<R: Rng> ParticleField<R> {
	/// Create an empty field. Call [`ParticleField::resize`] or
	/// [`ParticleField::request_resize`] to populate it.
	pub fn new(config: StarfieldConfig, rng: R) -> Self {
		let config = config.sanitized();
		Self {
			theme: SkyTheme::default(),
			viewport: Viewport::default(),
			stars: Vec::new(),
			streaks: Vec::new(),
			scheduler: StreakScheduler::new(config.streak_interval_ms),
			clock: FrameClock::new(config.max_frame_dt),
			reduced_motion: false,
			pending_resize: None,
			rng,
			config,
		}
	}

	/// Replace the viewport and regenerate every star immediately.
	pub fn resize(&mut self, size: SurfaceSize) -> &Viewport {
		self.viewport = Viewport::from_size(size);
		self.stars = star::populate(
			&mut self.rng,
			&self.viewport,
			self.config.density,
			self.config.feature_star_rate,
		);
		debug!(
			"starlight: {}x{} @{} -> {} stars",
			self.viewport.width,
			self.viewport.height,
			self.viewport.dpr,
			self.stars.len()
		);
		&self.viewport
	}

	/// Queue a resize for the next frame. Later requests replace earlier ones.
	pub fn request_resize(&mut self, size: SurfaceSize) {
		self.pending_resize = Some(size);
	}

	pub fn has_pending_resize(&self) -> bool {
		self.pending_resize.is_some()
	}

	/// Toggle reduced motion. Enabling it also clears any shooting stars in flight.
	pub fn set_reduced_motion(&mut self, reduced: bool) {
		if reduced && !self.reduced_motion {
			self.streaks.clear();
		}
		self.reduced_motion = reduced;
	}

	/// Advance to `now_ms` and paint one frame.
	pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> FrameStats {
		if let Some(size) = self.pending_resize.take() {
			self.resize(size);
			surface.configure(&self.viewport);
		}

		let dt = self.clock.tick(now_ms);
		let t = self.clock.seconds();

		surface.fill_backdrop(&self.viewport, &self.theme.backdrop);
		let sparkles = self.draw_stars(t, surface);

		let streak_spawned = self.streaks_enabled() && self.scheduler.poll(now_ms, &mut self.rng);
		if streak_spawned {
			let streak = StreakParticle::spawn(&mut self.rng, &self.viewport, &self.config.streak_angle);
			self.streaks.push(streak);
		}

		for streak in &mut self.streaks {
			streak.advance(dt);
		}
		self.streaks.retain(StreakParticle::is_alive);
		self.draw_streaks(surface);

		FrameStats {
			dt,
			stars_drawn: self.stars.len(),
			sparkles,
			streak_spawned,
			active_streaks: self.streaks.len(),
		}
	}

	fn draw_stars<S: Surface + ?Sized>(&mut self, t: f64, surface: &mut S) -> usize {
		let allow_sparkle = !self.reduced_motion;
		let mut sparkles = 0;

		for s in &self.stars {
			let mut brightness = s.brightness(t);
			if allow_sparkle && self.rng.random::<f64>() < s.sparkle_chance(self.config.sparkle_rate) {
				brightness = star::sparkle(&mut self.rng, brightness);
				sparkles += 1;
			}
			surface.fill_star(s.x, s.y, s.radius, s.color(&self.theme.stars, brightness));
		}

		sparkles
	}

	fn draw_streaks<S: Surface + ?Sized>(&self, surface: &mut S) {
		for streak in &self.streaks {
			let stops = self.theme.streaks.stops(streak.visible_life());
			surface.stroke_streak((streak.x, streak.y), streak.tail(), streak.width, &stops);
		}
	}

	fn streaks_enabled(&self) -> bool {
		self.config.enable_streaks && !self.reduced_motion
	}

	pub fn viewport(&self) -> &Viewport {
		&self.viewport
	}

	pub fn stars(&self) -> &[StarParticle] {
		&self.stars
	}

	pub fn streaks(&self) -> &[StreakParticle] {
		&self.streaks
	}

	pub fn scheduler(&self) -> &StreakScheduler {
		&self.scheduler
	}

	pub fn reduced_motion(&self) -> bool {
		self.reduced_motion
	}
}

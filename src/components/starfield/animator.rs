//! Run/stop control for a field bound to a surface.
//!
//! The browser glue asks the animator whether to keep requesting frames.
//! Once stopped it never paints again, even if a frame callback that was
//! already queued still fires.

use rand::Rng;

use super::field::{FrameStats, ParticleField};
use super::render::Surface;
use super::viewport::{SurfaceSize, Viewport};

/// Whether the loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// Frames paint and request the next one.
	Running,
	/// Torn down; frames are ignored.
	Stopped,
}

/// A [`ParticleField`] paired with the surface it paints on.
pub struct Animator<S, R> {
	field: ParticleField<R>,
	surface: S,
	state: LoopState,
	/// Handle of the frame callback currently queued with the host.
	pending_frame: Option<i32>,
	last_stats: Option<FrameStats>,
}

impl<S: Surface, R: Rng> Animator<S, R> {
	pub fn new(field: ParticleField<R>, surface: S) -> Self {
		Self {
			field,
			surface,
			state: LoopState::Running,
			pending_frame: None,
			last_stats: None,
		}
	}

	/// Resize now and reconfigure the surface. Use before the loop starts.
	pub fn resize(&mut self, size: SurfaceSize) -> Viewport {
		let viewport = *self.field.resize(size);
		self.surface.configure(&viewport);
		viewport
	}

	/// Queue a resize for the next frame boundary.
	pub fn request_resize(&mut self, size: SurfaceSize) {
		self.field.request_resize(size);
	}

	pub fn set_reduced_motion(&mut self, reduced: bool) {
		self.field.set_reduced_motion(reduced);
	}

	/// Handle a frame callback. Returns `true` if another frame should be requested.
	pub fn on_frame(&mut self, now_ms: f64) -> bool {
		self.pending_frame = None;
		if self.state == LoopState::Stopped {
			return false;
		}
		self.last_stats = Some(self.field.frame(now_ms, &mut self.surface));
		true
	}

	/// Record the handle of a newly requested frame.
	pub fn frame_requested(&mut self, handle: i32) {
		self.pending_frame = Some(handle);
	}

	/// Stop the loop. Returns the queued frame handle so the caller can cancel
	/// it; repeated calls return `None`.
	pub fn stop(&mut self) -> Option<i32> {
		self.state = LoopState::Stopped;
		self.pending_frame.take()
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	pub fn is_running(&self) -> bool {
		self.state == LoopState::Running
	}

	pub fn field(&self) -> &ParticleField<R> {
		&self.field
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Stats from the most recent painted frame.
	pub fn last_stats(&self) -> Option<&FrameStats> {
		self.last_stats.as_ref()
	}
}

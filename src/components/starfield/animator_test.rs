use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::animator::{Animator, LoopState};
use super::config::StarfieldConfig;
use super::field::ParticleField;
use super::test_support::{RecordingSurface, frames_at_60hz};
use super::viewport::SurfaceSize;

fn animator() -> Animator<RecordingSurface, ChaCha8Rng> {
	let field = ParticleField::new(StarfieldConfig::default(), ChaCha8Rng::seed_from_u64(17));
	Animator::new(field, RecordingSurface::default())
}

#[test]
fn test_resize_configures_surface_immediately() {
	let mut a = animator();
	let viewport = a.resize(SurfaceSize::new(320.0, 240.0, 2.0));

	assert_eq!(viewport.backing_width(), 640);
	assert_eq!(a.surface().configured, vec![viewport]);
	assert_eq!(a.field().stars().len(), 192 + 3);
}

#[test]
fn test_running_loop_paints_and_requests_more() {
	let mut a = animator();
	a.resize(SurfaceSize::new(120.0, 80.0, 1.0));

	for (handle, now) in frames_at_60hz(5).enumerate() {
		assert!(a.on_frame(now));
		a.frame_requested(handle as i32);
	}
	assert_eq!(a.surface().backdrops, 5);
	assert_eq!(a.last_stats().map(|s| s.stars_drawn), Some(a.field().stars().len()));
}

#[test]
fn test_no_paint_after_stop() {
	let mut a = animator();
	a.resize(SurfaceSize::new(200.0, 100.0, 1.0));

	assert!(a.on_frame(0.0));
	a.frame_requested(41);
	let painted = a.surface().paint_calls();
	assert!(painted > 0);

	assert_eq!(a.stop(), Some(41));
	assert_eq!(a.state(), LoopState::Stopped);

	// A refresh tick that was already queued still arrives
	assert!(!a.on_frame(16.0));
	assert!(!a.on_frame(33.0));
	assert_eq!(a.surface().paint_calls(), painted);
}

#[test]
fn test_stop_is_idempotent() {
	let mut a = animator();
	a.frame_requested(7);

	assert_eq!(a.stop(), Some(7));
	assert_eq!(a.stop(), None);
	assert!(!a.is_running());
}

#[test]
fn test_handle_cleared_once_frame_fires() {
	let mut a = animator();
	a.frame_requested(3);
	assert!(a.on_frame(0.0));
	// Nothing queued between the callback and the next request
	assert_eq!(a.stop(), None);
}

#[test]
fn test_queued_resize_reaches_surface_on_next_frame() {
	let mut a = animator();
	a.resize(SurfaceSize::new(100.0, 100.0, 1.0));
	a.request_resize(SurfaceSize::new(300.0, 100.0, 1.0));
	assert_eq!(a.surface().configured.len(), 1);

	a.on_frame(0.0);
	assert_eq!(a.surface().configured.len(), 2);
	assert_eq!(a.field().viewport().width, 300.0);
}

#[test]
fn test_reduced_motion_forwarded() {
	let mut a = animator();
	a.resize(SurfaceSize::new(200.0, 200.0, 1.0));
	a.set_reduced_motion(true);

	for now in frames_at_60hz(600) {
		a.on_frame(now);
	}
	assert!(a.surface().streaks.is_empty());
	assert!(a.field().reduced_motion());
}

//! Leptos component wrapping the starfield canvas.
//!
//! The component creates a canvas that fills its positioned parent, sizes the
//! backing store to the parent's bounding box, and drives the field with
//! `requestAnimationFrame`. Window resizes are queued and applied at the next
//! frame. Everything the loop holds onto is owned by a [`LoopGuard`] that is
//! dropped when the component is cleaned up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::animator::Animator;
use super::config::StarfieldConfig;
use super::field::ParticleField;
use super::render::CanvasSurface;
use super::viewport::SurfaceSize;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

type SharedAnimator = Rc<RefCell<Animator<CanvasSurface, ChaCha8Rng>>>;
type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Renders an animated night sky on a canvas behind its siblings.
///
/// Place it inside a positioned container; the canvas is absolutely
/// positioned to fill it and ignores pointer input. If the browser cannot
/// provide a 2D context, nothing is drawn.
#[component]
pub fn StarlightHeadliner(
	/// Tuning knobs. Defaults reproduce the stock look.
	#[prop(optional)]
	config: Option<StarfieldConfig>,
	/// Extra CSS classes for the canvas element.
	#[prop(into, optional)]
	class: String,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let surface = match CanvasSurface::acquire(canvas.clone()) {
			Ok(surface) => surface,
			Err(e) => {
				warn!("starlight: {}; backdrop disabled", e);
				return;
			}
		};

		let field = ParticleField::new(config.clone(), ChaCha8Rng::seed_from_u64(entropy_seed()));
		let mut animator = Animator::new(field, surface);
		animator.set_reduced_motion(prefers_reduced_motion(&window));
		animator.resize(measure(&window, &canvas));

		let guard = SendWrapper::new(LoopGuard::start(window, canvas, Rc::new(RefCell::new(animator))));
		on_cleanup(move || drop(guard.take()));
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=format!("starlight-headliner {class}")
			aria-hidden="true"
			style="position: absolute; inset: 0; width: 100%; height: 100%; display: block; pointer-events: none;"
		/>
	}
}

/// Browser callbacks for one running starfield.
///
/// Dropping the guard stops the animator, cancels the queued frame, detaches
/// the resize listener and frees the frame closure.
struct LoopGuard {
	window: Window,
	animator: SharedAnimator,
	frame_cb: FrameCallback,
	resize_cb: Option<Closure<dyn FnMut()>>,
}

impl LoopGuard {
	fn start(window: Window, canvas: HtmlCanvasElement, animator: SharedAnimator) -> Self {
		let (animator_resize, window_resize) = (animator.clone(), window.clone());
		let resize_cb: Closure<dyn FnMut()> = Closure::new(move || {
			let size = measure(&window_resize, &canvas);
			let mut a = animator_resize.borrow_mut();
			a.set_reduced_motion(prefers_reduced_motion(&window_resize));
			a.request_resize(size);
		});
		let listening = window
			.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
			.is_ok();
		let resize_cb = if listening {
			Some(resize_cb)
		} else {
			warn!("starlight: could not listen for resize; field stays at its initial size");
			None
		};

		let frame_cb: FrameCallback = Rc::new(RefCell::new(None));
		let (animator_frame, frame_inner) = (animator.clone(), frame_cb.clone());
		*frame_cb.borrow_mut() = Some(Closure::new(move |now: f64| {
			if animator_frame.borrow_mut().on_frame(now) {
				request_frame(&animator_frame, &frame_inner);
			}
		}));
		request_frame(&animator, &frame_cb);
		debug!("starlight: animation loop started");

		Self {
			window,
			animator,
			frame_cb,
			resize_cb,
		}
	}
}

impl Drop for LoopGuard {
	fn drop(&mut self) {
		if let Some(handle) = self.animator.borrow_mut().stop() {
			let _ = self.window.cancel_animation_frame(handle);
		}
		if let Some(cb) = self.resize_cb.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		// The frame closure holds a handle to its own slot; clearing it breaks the cycle.
		self.frame_cb.borrow_mut().take();
		debug!("starlight: animation loop stopped");
	}
}

fn request_frame(animator: &SharedAnimator, frame_cb: &FrameCallback) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(ref cb) = *frame_cb.borrow() {
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(handle) => animator.borrow_mut().frame_requested(handle),
			Err(_) => warn!("starlight: requestAnimationFrame failed; animation halted"),
		}
	}
}

/// Size of the canvas's parent, or of the canvas itself when detached.
fn measure(window: &Window, canvas: &HtmlCanvasElement) -> SurfaceSize {
	let rect = canvas
		.parent_element()
		.map(|p| p.get_bounding_client_rect())
		.unwrap_or_else(|| canvas.get_bounding_client_rect());
	SurfaceSize::new(rect.width(), rect.height(), window.device_pixel_ratio())
}

fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media(REDUCED_MOTION_QUERY)
		.ok()
		.flatten()
		.is_some_and(|query| query.matches())
}

/// Per-instance seed so multiple backdrops on one page differ.
fn entropy_seed() -> u64 {
	let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
	noise ^ js_sys::Date::now().to_bits()
}

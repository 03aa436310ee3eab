//! Drawing backends for the starfield.
//!
//! [`Surface`] is the small set of paint operations a frame needs. The browser
//! implementation, [`CanvasSurface`], drives a `CanvasRenderingContext2d`.
//! Paint order within a frame is fixed by the field:
//! 1. Backdrop fill, then vignette
//! 2. Stars
//! 3. Shooting stars

use std::f64::consts::PI;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::{BackdropStyle, Color, GradientStop};
use super::viewport::Viewport;

/// Paint operations used by a frame. Coordinates are CSS pixels.
pub trait Surface {
	/// Resize the backing store and rescale the coordinate space for `viewport`.
	fn configure(&mut self, viewport: &Viewport);

	/// Paint the full-surface backdrop, including the vignette if any.
	fn fill_backdrop(&mut self, viewport: &Viewport, style: &BackdropStyle);

	/// Fill a circle.
	fn fill_star(&mut self, x: f64, y: f64, radius: f64, color: Color);

	/// Stroke a round-capped line from `head` to `tail` with a linear gradient.
	fn stroke_streak(&mut self, head: (f64, f64), tail: (f64, f64), width: f64, stops: &[GradientStop]);
}

/// Why a canvas could not be used for drawing.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// `getContext("2d")` failed or returned nothing.
	#[error("canvas 2d context unavailable")]
	ContextUnavailable,
	/// The context object has an unexpected type.
	#[error("canvas context is not a CanvasRenderingContext2d")]
	NotCanvas2d,
}

/// A [`Surface`] backed by an HTML canvas element.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the canvas's 2D context.
	pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|_| SurfaceError::ContextUnavailable)?
			.ok_or(SurfaceError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::NotCanvas2d)?;
		Ok(Self { canvas, ctx })
	}
}

impl Surface for CanvasSurface {
	fn configure(&mut self, viewport: &Viewport) {
		// Resizing the backing store also resets the context transform.
		self.canvas.set_width(viewport.backing_width());
		self.canvas.set_height(viewport.backing_height());

		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", viewport.width));
		let _ = style.set_property("height", &format!("{}px", viewport.height));

		let _ = self
			.ctx
			.set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0);
	}

	fn fill_backdrop(&mut self, viewport: &Viewport, style: &BackdropStyle) {
		draw_background(&self.ctx, viewport, style);
		if style.vignette.is_some() {
			draw_vignette(&self.ctx, viewport, style);
		}
	}

	fn fill_star(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}

	fn stroke_streak(&mut self, head: (f64, f64), tail: (f64, f64), width: f64, stops: &[GradientStop]) {
		let gradient = self.ctx.create_linear_gradient(head.0, head.1, tail.0, tail.1);
		for stop in stops {
			let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_css());
		}

		#[allow(deprecated)]
		self.ctx.set_stroke_style(&gradient);
		self.ctx.set_line_width(width);
		self.ctx.set_line_cap("round");
		self.ctx.begin_path();
		self.ctx.move_to(head.0, head.1);
		self.ctx.line_to(tail.0, tail.1);
		self.ctx.stroke();
	}
}

fn draw_background(ctx: &CanvasRenderingContext2d, viewport: &Viewport, style: &BackdropStyle) {
	ctx.set_fill_style_str(&style.fill.to_css());
	ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

fn draw_vignette(ctx: &CanvasRenderingContext2d, viewport: &Viewport, style: &BackdropStyle) {
	let Some(vignette) = &style.vignette else {
		return;
	};
	let (cx, cy) = (
		viewport.width * vignette.focus_x,
		viewport.height * vignette.focus_y,
	);

	let Ok(gradient) = ctx.create_radial_gradient(
		cx,
		cy,
		viewport.shorter_side() * vignette.inner_radius,
		cx,
		cy,
		viewport.longer_side() * vignette.outer_radius,
	) else {
		// Degenerate radii on an empty surface; nothing to darken.
		return;
	};

	let _ = gradient.add_color_stop(0.0, &vignette.edge.with_alpha(0.0).to_css());
	let _ = gradient.add_color_stop(1.0, &vignette.edge.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

//! Surface dimensions and device-pixel-ratio handling.
//!
//! Everything the renderer draws is expressed in CSS pixels. The canvas
//! backing store is `dpr` times larger and the 2D context is scaled by `dpr`,
//! so drawing code never sees device pixels.

/// Lowest device pixel ratio used for the backing store.
pub const MIN_DEVICE_PIXEL_RATIO: f64 = 1.0;

/// Highest device pixel ratio used for the backing store. Caps memory and
/// fill cost on very dense displays.
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.5;

/// Container measurement as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
	/// Raw `window.devicePixelRatio`.
	pub device_pixel_ratio: f64,
}

impl SurfaceSize {
	pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
		Self {
			width,
			height,
			device_pixel_ratio,
		}
	}
}

/// Sanitized drawing area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	/// Whole CSS pixels.
	pub width: f64,
	/// Whole CSS pixels.
	pub height: f64,
	/// Device pixel ratio clamped to [`MIN_DEVICE_PIXEL_RATIO`, `MAX_DEVICE_PIXEL_RATIO`].
	pub dpr: f64,
}

impl Default for Viewport {
	fn default() -> Self {
		Self {
			width: 0.0,
			height: 0.0,
			dpr: MIN_DEVICE_PIXEL_RATIO,
		}
	}
}

impl Viewport {
	pub fn from_size(size: SurfaceSize) -> Self {
		Self {
			width: whole_pixels(size.width),
			height: whole_pixels(size.height),
			dpr: clamp_device_pixel_ratio(size.device_pixel_ratio),
		}
	}

	/// Area in square CSS pixels.
	pub fn area(&self) -> f64 {
		self.width * self.height
	}

	pub fn is_empty(&self) -> bool {
		self.area() <= 0.0
	}

	pub fn shorter_side(&self) -> f64 {
		self.width.min(self.height)
	}

	pub fn longer_side(&self) -> f64 {
		self.width.max(self.height)
	}

	/// Backing-store width in device pixels.
	pub fn backing_width(&self) -> u32 {
		(self.width * self.dpr).floor() as u32
	}

	/// Backing-store height in device pixels.
	pub fn backing_height(&self) -> u32 {
		(self.height * self.dpr).floor() as u32
	}
}

/// Clamp a reported device pixel ratio. Non-finite values map to 1.
pub fn clamp_device_pixel_ratio(dpr: f64) -> f64 {
	if !dpr.is_finite() {
		return MIN_DEVICE_PIXEL_RATIO;
	}
	dpr.clamp(MIN_DEVICE_PIXEL_RATIO, MAX_DEVICE_PIXEL_RATIO)
}

fn whole_pixels(value: f64) -> f64 {
	if value.is_finite() && value > 0.0 {
		value.floor()
	} else {
		0.0
	}
}

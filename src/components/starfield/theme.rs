//! Visual theming for the starfield.
//!
//! Provides the RGBA color type and the headliner sky palette: backdrop
//! fill, vignette, star tints and shooting-star gradients.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Linear interpolation between two colors.
	///
	/// Channels are truncated toward zero, so a blend never rounds up into the
	/// next integer value.
	pub fn lerp(self, other: Color, t: f64) -> Self {
		let t = t.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * (1.0 - t) + other.r as f64 * t) as u8,
			g: (self.g as f64 * (1.0 - t) + other.g as f64 * t) as u8,
			b: (self.b as f64 * (1.0 - t) + other.b as f64 * t) as u8,
			a: self.a * (1.0 - t) + other.a * t,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A color stop on a canvas gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
	/// Position along the gradient, 0.0 to 1.0.
	pub offset: f64,
	pub color: Color,
}

/// Radial darkening toward the edges of the surface.
///
/// Focus and radii are fractions of the surface: the focus of `(fx, fy)` sits
/// at `(w * fx, h * fy)`, the inner radius is a fraction of the shorter side
/// and the outer radius a fraction of the longer side.
#[derive(Clone, Debug)]
pub struct VignetteStyle {
	pub focus_x: f64,
	pub focus_y: f64,
	pub inner_radius: f64,
	pub outer_radius: f64,
	/// Color at the outer radius. The inner radius is always transparent.
	pub edge: Color,
}

/// Background paint applied at the start of every frame.
#[derive(Clone, Debug)]
pub struct BackdropStyle {
	/// Full-surface fill. Translucent fills leave a faint trail of the previous frame.
	pub fill: Color,
	pub vignette: Option<VignetteStyle>,
}

/// Star tints. Each star blends between them by its warmth.
#[derive(Clone, Debug)]
pub struct StarStyle {
	pub cool: Color,
	pub warm: Color,
}

impl StarStyle {
	/// Tint for a star with the given warmth (0.0 = cool, 1.0 = warm).
	pub fn tint(&self, warmth: f64) -> Color {
		self.cool.lerp(self.warm, warmth)
	}
}

/// Shooting-star stroke gradient, head to tail.
#[derive(Clone, Debug)]
pub struct StreakStyle {
	/// Head color; its alpha is scaled by the streak's remaining life.
	pub head: Color,
	/// Body color at `body_offset`; alpha scaled by life.
	pub body: Color,
	pub body_offset: f64,
	/// Tail color, drawn as-is.
	pub tail: Color,
}

impl StreakStyle {
	/// Gradient stops for a streak with `life` in `[0, 1]`.
	pub fn stops(&self, life: f64) -> [GradientStop; 3] {
		let life = life.clamp(0.0, 1.0);
		[
			GradientStop {
				offset: 0.0,
				color: self.head.with_alpha(self.head.a * life),
			},
			GradientStop {
				offset: self.body_offset,
				color: self.body.with_alpha(self.body.a * life),
			},
			GradientStop {
				offset: 1.0,
				color: self.tail,
			},
		]
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct SkyTheme {
	/// Background fill and vignette.
	pub backdrop: BackdropStyle,
	/// Star tints.
	pub stars: StarStyle,
	/// Shooting-star gradient.
	pub streaks: StreakStyle,
}

impl SkyTheme {
	/// Car-headliner look: near-black velvet, fiber-optic stars (default)
	pub fn headliner() -> Self {
		Self {
			backdrop: BackdropStyle {
				fill: Color::rgba(0, 0, 0, 0.92),
				vignette: Some(VignetteStyle {
					focus_x: 0.55,
					focus_y: 0.45,
					inner_radius: 0.1,
					outer_radius: 0.85,
					edge: Color::rgba(0, 0, 0, 0.55),
				}),
			},
			stars: StarStyle {
				cool: Color::rgb(230, 235, 255),
				warm: Color::rgb(255, 252, 235),
			},
			streaks: StreakStyle {
				head: Color::rgba(255, 255, 255, 0.55),
				body: Color::rgba(230, 240, 255, 0.22),
				body_offset: 0.3,
				tail: Color::rgba(255, 255, 255, 0.0),
			},
		}
	}
}

impl Default for SkyTheme {
	fn default() -> Self {
		Self::headliner()
	}
}

//! Animated starfield backdrop.
//!
//! Renders a "starlight headliner" night sky on an HTML canvas with:
//! - Thousands of tiny fiber-optic stars with a slow sinusoidal twinkle
//! - A sprinkling of larger, brighter feature stars
//! - Rare one-frame micro-sparkles
//! - Occasional shooting stars that fade as they cross the upper sky
//! - A velvet backdrop with an off-center vignette
//!
//! Sparkles and shooting stars are suppressed when the user prefers reduced
//! motion.
//!
//! # Example
//!
//! ```ignore
//! use starlight::{StarfieldConfig, StarlightHeadliner};
//!
//! view! {
//!     <section style="position: relative; height: 60vh;">
//!         <StarlightHeadliner config=StarfieldConfig { density: 0.004, ..Default::default() } />
//!         <h1>"Hello"</h1>
//!     </section>
//! }
//! ```

mod animator;
mod clock;
mod component;
pub mod config;
mod field;
mod render;
pub mod sampling;
mod star;
mod streak;
pub mod theme;
mod viewport;

pub use animator::{Animator, LoopState};
pub use clock::FrameClock;
pub use component::StarlightHeadliner;
pub use config::StarfieldConfig;
pub use field::{FrameStats, ParticleField};
pub use render::{CanvasSurface, Surface, SurfaceError};
pub use star::{StarKind, StarParticle, StarProfile};
pub use streak::{StreakParticle, StreakScheduler};
pub use theme::{Color, SkyTheme};
pub use viewport::{SurfaceSize, Viewport, clamp_device_pixel_ratio};

#[cfg(test)]
mod test_support;

#[cfg(test)]
mod animator_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod theme_test;

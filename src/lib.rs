//! starlight: Animated starfield headliner backdrop for the web.
//!
//! This crate provides a WASM canvas component that paints a twinkling night
//! sky with occasional shooting stars, plus a minimal hero page hosting it.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::starfield::{StarfieldConfig, StarlightHeadliner};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("starlight: logging initialized");
}

/// Load starfield settings from a script element with id="starlight-config".
/// Expected format: a JSON object with any subset of the config fields, e.g.
/// `{ "density": 0.003, "enableStreaks": false }`.
fn load_config() -> Option<StarfieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("starlight-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match StarfieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"starlight: loaded config (density {}, streaks {})",
				config.density, config.enable_streaks
			);
			Some(config)
		}
		Err(e) => {
			warn!("starlight: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads configuration from the DOM and renders a hero over the starfield.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Starlight" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section
			class="starlight-hero"
			style="position: relative; min-height: 100vh; overflow: hidden; background: #000;"
		>
			<StarlightHeadliner config=config />
			<div
				class="starlight-hero__content"
				style="position: relative; display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; color: #f5f7ff; text-align: center;"
			>
				<h1>"Every conversation, under one sky"</h1>
				<p class="subtitle">"Voice agents, a unified inbox and live insights in one workspace."</p>
			</div>
		</section>
	}
}

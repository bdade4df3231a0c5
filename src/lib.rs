//! pointer-field: ambient pointer-attractor particle field for canvas backdrops.
//!
//! This crate provides a WASM-based decorative background component: a
//! particle ensemble that orbits the mouse pointer, wobbles, fades with
//! scroll position, and tapers out near the viewport edges.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Pulled in for its "js" feature so `rand` works on the wasm target.
use getrandom as _;

pub mod components;

pub use components::particle_field::{ParticleFieldCanvas, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("pointer-field: logging initialized");
}

/// Reads the initial color mode from the document's `data-theme` attribute.
/// Anything other than "light" (including no attribute) counts as dark.
fn detect_dark_mode() -> bool {
	web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.document_element())
		.and_then(|element| element.get_attribute("data-theme"))
		.map(|theme| theme != "light")
		.unwrap_or(true)
}

/// Main application component.
/// A minimal shell standing in for the page that hosts the field: it owns
/// the color mode flag and composites the canvas beneath its content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let dark_mode = RwSignal::new(detect_dark_mode());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || if dark_mode.get() { "dark" } else { "light" } />
		<Title text="Ambient Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas dark_mode=dark_mode />
		<div class="field-overlay">
			<h1>"Ambient Particle Field"</h1>
			<p class="subtitle">"Move the mouse. Scroll down to fade the field out."</p>
		</div>
	}
}

//! Ambient pointer-attractor particle field.
//!
//! Renders a fixed ensemble of particles orbiting the mouse pointer on a
//! fullscreen HTML canvas, composited beneath the page:
//! - Per-particle wobbling orbits with exponential position smoothing
//! - Fade/respawn cycle that keeps the layout from going static
//! - Scroll-driven global fade and viewport edge tapering
//! - Dark/light theming with wholesale ensemble rebuild on flips
//!
//! # Example
//!
//! ```ignore
//! use pointer_field::ParticleFieldCanvas;
//!
//! let dark_mode = RwSignal::new(true);
//! view! { <ParticleFieldCanvas dark_mode=dark_mode /> }
//! ```

mod component;
pub mod ensemble;
pub mod fade;
mod render;
pub mod state;
pub mod theme;

pub use component::ParticleFieldCanvas;
pub use theme::Theme;

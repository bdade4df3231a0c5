//! Field-level state shared between event handlers and the frame loop.
//!
//! Pointer, scroll, and resize handlers only write fields here; the frame
//! loop reads one consistent snapshot per tick. The slight staleness this
//! allows is deliberate: it is what makes the ensemble trail the pointer.

use super::ensemble::Ensemble;
use super::fade;
use super::theme::Theme;

/// Mutable state owned by the frame loop for the life of the mounted view.
pub struct FieldState {
	pub ensemble: Ensemble,
	/// Latest pointer position, written by the mousemove handler.
	pub pointer: (f64, f64),
	/// Frame counter driving the wobble phase.
	pub time: f64,
	/// Scroll-driven global opacity multiplier in `[0, 1]`.
	pub fade_opacity: f64,
	/// Whether the scroll fade leaves anything to draw. Bookkeeping only;
	/// the loop keeps running either way so it can resume instantly.
	pub is_visible: bool,
	pub width: f64,
	pub height: f64,
}

impl FieldState {
	/// Builds the field with the pointer assumed at the viewport center,
	/// where it stays until the first mousemove arrives.
	pub fn new(theme: &Theme, width: f64, height: f64, seed: u64) -> Self {
		let pointer = (width / 2.0, height / 2.0);
		Self {
			ensemble: Ensemble::new(&theme.particles, pointer, seed),
			pointer,
			time: 0.0,
			fade_opacity: 1.0,
			is_visible: true,
			width,
			height,
		}
	}

	/// Replaces the ensemble with one built for `theme`.
	///
	/// Particle color and opacity ceilings are baked into per-particle
	/// constants at spawn, so recreation is the re-theme operation. New
	/// particles start at the current pointer position.
	pub fn apply_theme(&mut self, theme: &Theme, seed: u64) {
		self.ensemble = Ensemble::new(&theme.particles, self.pointer, seed);
	}

	pub fn set_pointer(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
	}

	/// Recomputes the global fade from a scroll offset.
	pub fn on_scroll(&mut self, scroll_y: f64) {
		self.fade_opacity = fade::scroll_fade(scroll_y, self.height);
		self.is_visible = self.fade_opacity > 0.0;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Advances one frame.
	///
	/// While fully faded out the particle state is frozen rather than
	/// advanced invisibly, so scrolling back up resumes exactly where the
	/// field left off.
	pub fn tick(&mut self) {
		if self.fade_opacity <= 0.0 {
			return;
		}
		self.time += 1.0;
		self.ensemble.step(self.time, self.pointer);
	}
}

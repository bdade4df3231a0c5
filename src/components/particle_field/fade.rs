//! Scroll-driven and edge-proximity opacity policy.
//!
//! Two independent multipliers shape the final alpha of every particle:
//!
//! - a global fade that takes the whole field from fully visible to fully
//!   hidden as the page scrolls past its hero section, and
//! - a per-particle taper near the viewport edges so particles dissolve
//!   instead of being clipped by the canvas boundary.

/// Scroll offset (as a fraction of viewport height) where the fade begins.
const FADE_START_FRAC: f64 = 0.6;
/// Scroll offset (as a fraction of viewport height) where the field is gone.
const FADE_END_FRAC: f64 = 0.9;

/// Width of the taper band along each viewport edge, in pixels.
pub const EDGE_FADE_DISTANCE: f64 = 120.0;

/// Decelerating cubic ease: fast start, soft landing at 1.
pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Symmetric quadratic ease, slow at both ends.
pub fn ease_in_out_quad(t: f64) -> f64 {
	if t < 0.5 {
		2.0 * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
	}
}

/// Global opacity multiplier for a given scroll offset.
///
/// Full opacity above `0.6 * viewport_height`, zero past `0.9`, eased in
/// between so the effect falls away quickly but lands gently.
pub fn scroll_fade(scroll_y: f64, viewport_height: f64) -> f64 {
	let fade_start = viewport_height * FADE_START_FRAC;
	let fade_end = viewport_height * FADE_END_FRAC;

	if scroll_y < fade_start {
		1.0
	} else if scroll_y < fade_end {
		let progress = (scroll_y - fade_start) / (fade_end - fade_start);
		1.0 - ease_out_cubic(progress)
	} else {
		0.0
	}
}

/// Edge-proximity multiplier for a particle position.
///
/// Within [`EDGE_FADE_DISTANCE`] of any viewport edge the particle tapers
/// toward zero; the minimum across all four edges wins, so corners fade
/// fastest. Positions clear of every band return 1.
pub fn edge_fade(x: f64, y: f64, width: f64, height: f64) -> f64 {
	let mut fade = 1.0_f64;

	if x < EDGE_FADE_DISTANCE {
		fade = fade.min(ease_in_out_quad(x / EDGE_FADE_DISTANCE));
	}
	if x > width - EDGE_FADE_DISTANCE {
		fade = fade.min(ease_in_out_quad((width - x) / EDGE_FADE_DISTANCE));
	}
	if y < EDGE_FADE_DISTANCE {
		fade = fade.min(ease_in_out_quad(y / EDGE_FADE_DISTANCE));
	}
	if y > height - EDGE_FADE_DISTANCE {
		fade = fade.min(ease_in_out_quad((height - y) / EDGE_FADE_DISTANCE));
	}

	fade
}

// Host-side tests for the scroll fade and edge fade policy.

use pointer_field::components::particle_field::fade::{
	EDGE_FADE_DISTANCE, ease_in_out_quad, ease_out_cubic, edge_fade, scroll_fade,
};

const EPS: f64 = 1e-9;

#[test]
fn easing_endpoints() {
	assert!((ease_out_cubic(0.0) - 0.0).abs() < EPS);
	assert!((ease_out_cubic(1.0) - 1.0).abs() < EPS);
	assert!((ease_in_out_quad(0.0) - 0.0).abs() < EPS);
	assert!((ease_in_out_quad(0.5) - 0.5).abs() < EPS);
	assert!((ease_in_out_quad(1.0) - 1.0).abs() < EPS);
}

#[test]
fn scroll_fade_is_full_before_fade_start() {
	assert_eq!(scroll_fade(0.0, 1000.0), 1.0);
	assert_eq!(scroll_fade(599.0, 1000.0), 1.0);
}

#[test]
fn scroll_fade_is_zero_past_fade_end() {
	assert_eq!(scroll_fade(900.0, 1000.0), 0.0);
	assert_eq!(scroll_fade(5000.0, 1000.0), 0.0);
}

#[test]
fn scroll_fade_midpoint_matches_ease_out_cubic() {
	// progress 0.5 in the 600..900 band: 1 - (1 - 0.5^3 adjusted) = 0.125
	let fade = scroll_fade(750.0, 1000.0);
	assert!(
		(fade - 0.125).abs() < EPS,
		"expected 0.125 at progress 0.5, got {fade}"
	);
}

#[test]
fn scroll_fade_strictly_decreases_inside_band() {
	let mut prev = scroll_fade(600.0, 1000.0);
	let mut y = 610.0;
	while y < 900.0 {
		let fade = scroll_fade(y, 1000.0);
		assert!(fade < prev, "fade not decreasing at scroll_y {y}");
		prev = fade;
		y += 10.0;
	}
}

#[test]
fn edge_fade_is_zero_on_the_boundary() {
	assert_eq!(edge_fade(0.0, 500.0, 1920.0, 1080.0), 0.0);
	assert_eq!(edge_fade(1920.0, 500.0, 1920.0, 1080.0), 0.0);
	assert_eq!(edge_fade(500.0, 0.0, 1920.0, 1080.0), 0.0);
	assert_eq!(edge_fade(500.0, 1080.0, 1920.0, 1080.0), 0.0);
}

#[test]
fn edge_fade_is_unity_clear_of_every_band() {
	assert_eq!(edge_fade(EDGE_FADE_DISTANCE, 500.0, 1920.0, 1080.0), 1.0);
	assert_eq!(edge_fade(960.0, 540.0, 1920.0, 1080.0), 1.0);
}

#[test]
fn edge_fade_follows_ease_in_out_quad_inside_band() {
	// Quarter, half, and three-quarter way into the left band.
	let cases = [(30.0, 0.125), (60.0, 0.5), (90.0, 0.875)];
	for (x, expected) in cases {
		let fade = edge_fade(x, 540.0, 1920.0, 1080.0);
		assert!(
			(fade - expected).abs() < EPS,
			"expected {expected} at x {x}, got {fade}"
		);
	}
}

#[test]
fn edge_fade_takes_minimum_across_edges_in_corners() {
	// x is halfway in (0.5), y a quarter in (0.125): corner takes the min.
	let fade = edge_fade(60.0, 30.0, 1920.0, 1080.0);
	assert!((fade - 0.125).abs() < EPS, "corner fade was {fade}");
}

// Host-side tests for the particle ensemble, field state, and theming.

use std::f64::consts::TAU;

use pointer_field::Theme;
use pointer_field::components::particle_field::ensemble::{Ensemble, sample_orbit_distance};
use pointer_field::components::particle_field::state::FieldState;
use rand::SeedableRng;
use rand::rngs::StdRng;

const POINTER: (f64, f64) = (500.0, 500.0);

fn make_ensemble(seed: u64) -> Ensemble {
	Ensemble::new(&Theme::dark().particles, POINTER, seed)
}

#[test]
fn fresh_ensemble_starts_at_the_pointer() {
	let ens = make_ensemble(42);
	assert_eq!(ens.particles.len(), 100);
	for p in &ens.particles {
		assert_eq!(p.current_x, POINTER.0);
		assert_eq!(p.current_y, POINTER.1);
		assert_eq!(p.distance, p.base_distance);
		assert!(p.opacity >= 0.0 && p.opacity < p.max_opacity);
		assert!(p.angle >= 0.0 && p.angle < TAU);
		assert!(p.size >= 1.5 && p.size < 4.5);
	}
}

#[test]
fn opacity_stays_within_bounds_over_many_frames() {
	let mut ens = make_ensemble(7);
	for t in 1..=5000 {
		ens.step(t as f64, POINTER);
		for (i, p) in ens.particles.iter().enumerate() {
			assert!(
				p.opacity >= 0.0 && p.opacity <= p.max_opacity,
				"particle {i} opacity {} out of [0, {}] at frame {t}",
				p.opacity,
				p.max_opacity
			);
		}
	}
}

#[test]
fn distance_always_matches_the_wobble_formula() {
	let mut ens = make_ensemble(11);
	for t in 1..=500 {
		let time = t as f64;
		ens.step(time, POINTER);
		for p in &ens.particles {
			let expected = p.base_distance + (time * p.wobble_speed).sin() * p.wobble_amount;
			assert!(
				(p.distance - expected).abs() < 1e-9,
				"distance {} != {expected} at frame {t}",
				p.distance
			);
			assert!((p.distance - p.base_distance).abs() <= p.wobble_amount + 1e-9);
		}
	}
}

#[test]
fn orbit_mixture_is_seventy_thirty() {
	let mut rng = StdRng::seed_from_u64(123);
	let n = 20_000;
	let mut far = 0usize;
	for _ in 0..n {
		let d = sample_orbit_distance(&mut rng);
		assert!(
			(120.0..400.0).contains(&d),
			"orbit distance {d} outside both bands"
		);
		if d >= 250.0 {
			far += 1;
		}
	}
	let ratio = far as f64 / n as f64;
	assert!(
		(0.68..0.72).contains(&ratio),
		"far-band ratio {ratio} not near 0.7"
	);
}

#[test]
fn depleted_particle_respawns_with_fresh_orbit() {
	let mut ens = make_ensemble(5);
	{
		let p = &mut ens.particles[0];
		p.opacity = 0.001;
		p.fade_direction = -1.0;
		p.respawn_timer = 1.0;
	}
	ens.step(1.0, POINTER);

	let p = &ens.particles[0];
	assert_eq!(p.opacity, 0.0);
	assert_eq!(p.fade_direction, 1.0);
	assert!(
		(120.0..400.0).contains(&p.base_distance),
		"respawned distance {} outside both bands",
		p.base_distance
	);
	assert!(
		p.respawn_timer >= 300.0 && p.respawn_timer < 800.0,
		"respawn timer {} outside [300, 800)",
		p.respawn_timer
	);
}

#[test]
fn position_smoothing_converges_at_fixed_ratio() {
	let mut ens = make_ensemble(9);
	// Freeze the orbit and fade cycle so the target holds still.
	{
		let p = &mut ens.particles[0];
		p.wobble_amount = 0.0;
		p.rotation_speed = 0.0;
		p.fade_speed = 0.0;
		p.opacity = 0.3;
	}
	let (angle, base) = (ens.particles[0].angle, ens.particles[0].base_distance);
	let target = (
		POINTER.0 + angle.cos() * base,
		POINTER.1 + angle.sin() * base,
	);

	let gap = |ens: &Ensemble| {
		let p = &ens.particles[0];
		((p.current_x - target.0).powi(2) + (p.current_y - target.1).powi(2)).sqrt()
	};

	let mut prev = gap(&ens);
	for t in 1..=60 {
		ens.step(t as f64, POINTER);
		let g = gap(&ens);
		assert!(g < prev, "gap not shrinking at frame {t}");
		assert!(
			(g / prev - 0.88).abs() < 1e-9,
			"per-frame ratio {} != 0.88",
			g / prev
		);
		prev = g;
	}
	for t in 61..=300 {
		ens.step(t as f64, POINTER);
	}
	assert!(gap(&ens) < 1e-6, "gap did not converge: {}", gap(&ens));
}

#[test]
fn field_state_initializes_pointer_at_center() {
	let state = FieldState::new(&Theme::dark(), 1000.0, 800.0, 1);
	assert_eq!(state.pointer, (500.0, 400.0));
	assert_eq!(state.fade_opacity, 1.0);
	assert!(state.is_visible);
	assert_eq!(state.time, 0.0);
}

#[test]
fn field_state_freezes_while_fully_faded() {
	let mut state = FieldState::new(&Theme::dark(), 1000.0, 1000.0, 2);
	state.on_scroll(950.0);
	assert_eq!(state.fade_opacity, 0.0);
	assert!(!state.is_visible);

	let before: Vec<(f64, f64)> = state
		.ensemble
		.particles
		.iter()
		.map(|p| (p.current_x, p.current_y))
		.collect();
	state.tick();
	assert_eq!(state.time, 0.0, "time advanced while faded out");
	for (p, (x, y)) in state.ensemble.particles.iter().zip(&before) {
		assert_eq!((p.current_x, p.current_y), (*x, *y));
	}

	// Scrolling back up resumes the loop on the next tick.
	state.on_scroll(0.0);
	state.tick();
	assert_eq!(state.time, 1.0);
}

#[test]
fn field_state_scroll_fade_tracks_viewport_height() {
	let mut state = FieldState::new(&Theme::dark(), 1000.0, 1000.0, 3);
	state.on_scroll(750.0);
	assert!((state.fade_opacity - 0.125).abs() < 1e-9);
	assert!(state.is_visible);
}

#[test]
fn field_state_resize_updates_dimensions() {
	let mut state = FieldState::new(&Theme::dark(), 1000.0, 800.0, 4);
	state.resize(1280.0, 720.0);
	assert_eq!((state.width, state.height), (1280.0, 720.0));
}

#[test]
fn theme_change_rebuilds_ensemble_at_the_pointer() {
	let mut state = FieldState::new(&Theme::dark(), 1000.0, 800.0, 5);
	state.set_pointer(123.0, 456.0);
	state.apply_theme(&Theme::light(), 6);
	for p in &state.ensemble.particles {
		assert_eq!((p.current_x, p.current_y), (123.0, 456.0));
		assert!(p.max_opacity >= 0.8 && p.max_opacity < 0.95);
	}
}

#[test]
fn themes_select_contrast_appropriate_particles() {
	let dark = Theme::dark();
	let light = Theme::light();
	assert_eq!(dark.particles.color.to_css_rgb(), "#ffffff");
	assert_eq!(light.particles.color.to_css_rgb(), "#000000");
	assert_eq!(dark.particles.max_opacity, 0.5..0.9);
	assert_eq!(light.particles.max_opacity, 0.8..0.95);
	assert_eq!(Theme::from_dark_mode(true).name, "dark");
	assert_eq!(Theme::from_dark_mode(false).name, "light");

	for theme in [dark, light] {
		let ens = Ensemble::new(&theme.particles, POINTER, 42);
		for p in &ens.particles {
			assert!(theme.particles.max_opacity.contains(&p.max_opacity));
		}
	}
}

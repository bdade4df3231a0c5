//! Particle ensemble state and the per-frame update step.
//!
//! Each particle orbits the pointer at a wobbling radius while its opacity
//! oscillates between zero and a per-particle ceiling. A particle that has
//! fully faded out eventually respawns: it draws a fresh orbital angle and
//! radius, so long-lived sessions never settle into a static layout. The
//! rendered position trails the orbital target through an exponential
//! smoothing filter, which turns rigid circles into lagging, organic drift.

use std::f64::consts::TAU;
use std::ops::Range;

use rand::prelude::*;

use super::theme::ParticleStyle;

/// Fraction of the remaining gap closed toward the orbital target each frame.
const SMOOTHING: f64 = 0.12;

/// Far orbit band, chosen 70% of the time on spawn.
const FAR_ORBIT: Range<f64> = 250.0..400.0;
/// Near orbit band, chosen the remaining 30%.
const NEAR_ORBIT: Range<f64> = 120.0..250.0;
const FAR_ORBIT_WEIGHT: f64 = 0.7;

/// Fade-out cycles a depleted particle waits through before respawning.
const RESPAWN_INTERVAL: Range<f64> = 300.0..800.0;
/// Initial countdown, shorter so early respawns are staggered.
const INITIAL_RESPAWN: Range<f64> = 0.0..500.0;

/// A single particle orbiting the pointer.
///
/// `current_x`/`current_y` are the rendered screen position; everything else
/// is either a fixed per-particle constant sampled at creation or the state
/// of the fade/respawn cycle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub current_x: f64,
	pub current_y: f64,
	/// Orbital angle in radians. Grows without bound; trig wraps it.
	pub angle: f64,
	/// Target orbit radius before wobble.
	pub base_distance: f64,
	/// `base_distance` plus the current wobble term.
	pub distance: f64,
	pub wobble_speed: f64,
	pub wobble_amount: f64,
	pub rotation_speed: f64,
	pub size: f64,
	/// Current alpha, kept within `0.0..=max_opacity`.
	pub opacity: f64,
	pub max_opacity: f64,
	pub fade_speed: f64,
	/// +1 while fading in, -1 while fading out.
	pub fade_direction: f64,
	/// Counts down once per completed fade-out; respawn fires at zero.
	pub respawn_timer: f64,
}

/// Samples an orbit radius from the two-band mixture.
///
/// Most particles sit in a wide outer halo around the pointer with a
/// smaller population filling the middle distance, which reads as depth
/// rather than a uniform cloud.
pub fn sample_orbit_distance<R: Rng>(rng: &mut R) -> f64 {
	if rng.r#gen::<f64>() < FAR_ORBIT_WEIGHT {
		rng.gen_range(FAR_ORBIT)
	} else {
		rng.gen_range(NEAR_ORBIT)
	}
}

/// The fixed collection of particles animated together.
///
/// Owns the randomness source so spawn and respawn sampling are
/// deterministic for a given seed.
pub struct Ensemble {
	pub particles: Vec<Particle>,
	rng: StdRng,
}

impl Ensemble {
	/// Creates a fresh ensemble with every particle sitting at `origin`.
	///
	/// Particles drift outward from there over the first frames as the
	/// smoothing filter pulls them toward their orbital targets.
	pub fn new(style: &ParticleStyle, origin: (f64, f64), seed: u64) -> Self {
		let mut rng = StdRng::seed_from_u64(seed);

		let particles = (0..style.count)
			.map(|_| {
				let base_distance = sample_orbit_distance(&mut rng);
				Particle {
					current_x: origin.0,
					current_y: origin.1,
					angle: rng.gen_range(0.0..TAU),
					base_distance,
					distance: base_distance,
					wobble_speed: rng.gen_range(style.wobble_speed.clone()),
					wobble_amount: rng.gen_range(style.wobble_amount.clone()),
					rotation_speed: rng.gen_range(style.rotation_speed.clone()),
					size: rng.gen_range(style.size.clone()),
					opacity: rng.r#gen::<f64>() * 0.5,
					max_opacity: rng.gen_range(style.max_opacity.clone()),
					fade_speed: rng.gen_range(style.fade_speed.clone()),
					fade_direction: if rng.gen_bool(0.5) { 1.0 } else { -1.0 },
					respawn_timer: rng.gen_range(INITIAL_RESPAWN),
				}
			})
			.collect();

		Self { particles, rng }
	}

	/// Advances every particle one frame against the same pointer and time
	/// snapshot.
	///
	/// `time` is the field's frame counter; it drives the wobble phase.
	pub fn step(&mut self, time: f64, pointer: (f64, f64)) {
		for p in &mut self.particles {
			p.opacity += p.fade_direction * p.fade_speed;

			if p.opacity >= p.max_opacity {
				p.opacity = p.max_opacity;
				p.fade_direction = -1.0;
			} else if p.opacity <= 0.0 {
				p.opacity = 0.0;
				p.fade_direction = 1.0;

				// One tick per completed fade-out, not per frame.
				p.respawn_timer -= 1.0;
				if p.respawn_timer <= 0.0 {
					p.angle = self.rng.gen_range(0.0..TAU);
					p.base_distance = sample_orbit_distance(&mut self.rng);
					p.distance = p.base_distance;
					p.respawn_timer = self.rng.gen_range(RESPAWN_INTERVAL);
				}
			}

			let wobble = (time * p.wobble_speed).sin() * p.wobble_amount;
			p.distance = p.base_distance + wobble;

			p.angle += p.rotation_speed;

			let target_x = pointer.0 + p.angle.cos() * p.distance;
			let target_y = pointer.1 + p.angle.sin() * p.distance;
			p.current_x += (target_x - p.current_x) * SMOOTHING;
			p.current_y += (target_y - p.current_y) * SMOOTHING;
		}
	}
}

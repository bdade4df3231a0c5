//! Visual theming for the particle field.
//!
//! The field renders against either a light or dark page background, so the
//! particle color and the per-particle opacity cap are theme-dependent: dark
//! pages get white particles with a lower opacity ceiling, light pages get
//! black particles pushed brighter to keep contrast comparable.

use std::ops::Range;

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
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

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Sampling ranges for per-particle motion constants.
///
/// Every particle draws its own fixed parameters from these ranges once at
/// creation (and partially again on respawn), which is what gives the
/// ensemble its heterogeneous, non-mechanical look.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles in the ensemble.
	pub count: usize,
	/// Fill color shared by all particles.
	pub color: Color,
	/// Dot radius in pixels.
	pub size: Range<f64>,
	/// Per-particle opacity ceiling for the fade cycle.
	pub max_opacity: Range<f64>,
	/// Radial wobble phase speed (radians per frame of the time counter).
	pub wobble_speed: Range<f64>,
	/// Radial wobble amplitude in pixels.
	pub wobble_amount: Range<f64>,
	/// Orbital angle advance per frame (radians).
	pub rotation_speed: Range<f64>,
	/// Opacity change per frame while fading in or out.
	pub fade_speed: Range<f64>,
	/// Shadow blur radius for the glow pass.
	pub glow_blur: f64,
}

/// Pointer halo marker style.
#[derive(Clone, Debug)]
pub struct HaloStyle {
	/// Halo color (white in both themes, matching the page cursor).
	pub color: Color,
	/// Filled core radius in pixels.
	pub radius: f64,
	/// Outer stroked ring radius in pixels.
	pub ring_radius: f64,
	/// Core alpha before the global fade is applied.
	pub fill_alpha: f64,
	/// Ring alpha before the global fade is applied.
	pub ring_alpha: f64,
	/// Ring stroke width in pixels.
	pub ring_width: f64,
	/// Shadow blur radius for the core glow.
	pub glow_blur: f64,
}

/// Complete visual theme for the field.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub particles: ParticleStyle,
	pub halo: HaloStyle,
}

impl Theme {
	/// White particles over a dark page.
	pub fn dark() -> Self {
		Self {
			name: "dark",
			particles: ParticleStyle {
				color: Color::rgb(255, 255, 255),
				max_opacity: 0.5..0.9,
				..Self::base_particles()
			},
			halo: Self::base_halo(),
		}
	}

	/// Black particles over a light page, pushed brighter for contrast.
	pub fn light() -> Self {
		Self {
			name: "light",
			particles: ParticleStyle {
				color: Color::rgb(0, 0, 0),
				max_opacity: 0.8..0.95,
				..Self::base_particles()
			},
			halo: Self::base_halo(),
		}
	}

	/// Selects the theme matching the host page's color mode flag.
	pub fn from_dark_mode(dark: bool) -> Self {
		if dark { Self::dark() } else { Self::light() }
	}

	fn base_particles() -> ParticleStyle {
		ParticleStyle {
			count: 100,
			color: Color::rgb(255, 255, 255),
			size: 1.5..4.5,
			max_opacity: 0.5..0.9,
			wobble_speed: 0.008..0.033,
			wobble_amount: 20.0..55.0,
			rotation_speed: 0.002..0.010,
			fade_speed: 0.003..0.013,
			glow_blur: 8.0,
		}
	}

	fn base_halo() -> HaloStyle {
		HaloStyle {
			color: Color::rgb(255, 255, 255),
			radius: 12.0,
			ring_radius: 16.0,
			fill_alpha: 0.9,
			ring_alpha: 0.3,
			ring_width: 1.0,
			glow_blur: 15.0,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::dark()
	}
}

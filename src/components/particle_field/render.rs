//! Canvas rasterization for the particle field.
//!
//! One pass per frame: clear, particles (fill plus a shadow-blur glow pass
//! at half alpha), then the pointer halo on top. When the scroll fade has
//! zeroed out the field, the frame is just a clear.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::fade;
use super::state::FieldState;
use super::theme::Theme;

/// Final alphas at or below this are skipped entirely.
const MIN_VISIBLE_ALPHA: f64 = 0.01;

/// Renders one frame of the field to the canvas.
pub fn render(state: &FieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	if state.fade_opacity <= 0.0 {
		return;
	}

	draw_particles(state, ctx, theme);
	draw_halo(state, ctx, theme);
}

fn draw_particles(state: &FieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.particles;
	let color = style.color.to_css_rgb();

	for p in &state.ensemble.particles {
		let edge = fade::edge_fade(p.current_x, p.current_y, state.width, state.height);
		let alpha = p.opacity * edge * state.fade_opacity;
		if alpha <= MIN_VISIBLE_ALPHA {
			continue;
		}

		ctx.save();

		ctx.begin_path();
		let _ = ctx.arc(p.current_x, p.current_y, p.size, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&color);
		ctx.set_global_alpha(alpha);
		ctx.fill();

		// Refill the same path blurred for a soft halo around the dot.
		ctx.set_shadow_blur(style.glow_blur);
		ctx.set_shadow_color(&color);
		ctx.set_global_alpha(alpha * 0.5);
		ctx.fill();

		ctx.restore();
	}
}

fn draw_halo(state: &FieldState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let halo = &theme.halo;
	let (x, y) = state.pointer;
	let color = halo.color.to_css_rgb();

	ctx.save();

	ctx.begin_path();
	let _ = ctx.arc(x, y, halo.radius, 0.0, PI * 2.0);
	ctx.set_fill_style_str(&color);
	ctx.set_global_alpha(halo.fill_alpha * state.fade_opacity);
	ctx.set_shadow_blur(halo.glow_blur);
	ctx.set_shadow_color(&color);
	ctx.fill();

	ctx.begin_path();
	let _ = ctx.arc(x, y, halo.ring_radius, 0.0, PI * 2.0);
	ctx.set_stroke_style_str(&color);
	ctx.set_line_width(halo.ring_width);
	ctx.set_global_alpha(halo.ring_alpha * state.fade_opacity);
	ctx.stroke();

	ctx.restore();
}

//! Leptos component wrapping the particle field canvas.
//!
//! The component creates a fullscreen canvas and wires up window-level
//! mousemove, scroll, and resize handlers. An animation loop runs via
//! `requestAnimationFrame`, advancing the ensemble and redrawing each frame.
//! Handlers never block; they only write [`FieldState`] fields that the next
//! frame reads. Unmounting flips a cancellation flag, cancels the pending
//! frame, and removes every listener, so nothing draws into a dead canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::FieldState;
use super::theme::Theme;

/// Bundles field state with the active theme for the frame loop.
struct FieldContext {
	state: FieldState,
	theme: Theme,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

fn ensemble_seed() -> u64 {
	js_sys::Date::now() as u64
}

/// Renders the ambient particle field on a fixed fullscreen canvas.
///
/// The field follows the pointer, fades out as the page scrolls past the
/// first viewport, and is purely decorative: the canvas ignores pointer
/// events and exposes nothing back to the page. Flipping `dark_mode`
/// rebuilds the ensemble with the matching colors and opacity ranges.
#[component]
pub fn ParticleFieldCanvas(#[prop(into)] dark_mode: Signal<bool>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let running: Rc<Cell<bool>> = Rc::new(Cell::new(false));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let scroll_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (context_init, running_init, frame_init) =
		(context.clone(), running.clone(), frame_id.clone());
	let (animate_init, pointer_init, scroll_init, resize_init) = (
		animate.clone(),
		pointer_cb.clone(),
		scroll_cb.clone(),
		resize_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if running_init.get() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// A missing 2d context disables the effect; the page stays usable.
		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|obj| obj.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("particle-field: 2d context unavailable, field disabled");
				return;
			}
		};

		let theme = Theme::from_dark_mode(dark_mode.get_untracked());
		*context_init.borrow_mut() = Some(FieldContext {
			state: FieldState::new(&theme, w, h, ensemble_seed()),
			theme,
		});

		let context_ptr = context_init.clone();
		*pointer_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			if let Some(ref mut c) = *context_ptr.borrow_mut() {
				c.state.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
			}
		}));
		if let Some(ref cb) = *pointer_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let context_scroll = context_init.clone();
		let on_scroll = move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let scroll_y = win.scroll_y().unwrap_or(0.0);
			if let Some(ref mut c) = *context_scroll.borrow_mut() {
				c.state.on_scroll(scroll_y);
			}
		};
		// Apply once so the initial fade matches wherever the page loaded.
		on_scroll();
		*scroll_init.borrow_mut() = Some(Closure::new(on_scroll));
		if let Some(ref cb) = *scroll_init.borrow() {
			let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		}

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.state.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		running_init.set(true);
		let (context_anim, running_anim, frame_anim, animate_inner) = (
			context_init.clone(),
			running_init.clone(),
			frame_init.clone(),
			animate_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.get() {
				return;
			}
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.state.tick();
				render::render(&c.state, &ctx, &c.theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
						frame_anim.set(Some(id));
					}
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.set(Some(id));
			}
		}
		info!("particle-field: loop started at {}x{}", w, h);
	});

	// Theme flips rebuild the ensemble in place; the loop and listeners
	// stay up. The first run only records the mount-time value.
	let context_theme = context.clone();
	Effect::new(move |prev: Option<bool>| {
		let dark = dark_mode.get();
		if prev.is_some_and(|p| p != dark) {
			if let Some(ref mut c) = *context_theme.borrow_mut() {
				c.theme = Theme::from_dark_mode(dark);
				c.state.apply_theme(&c.theme, ensemble_seed());
				info!("particle-field: ensemble rebuilt for {} theme", c.theme.name);
			}
		}
		dark
	});

	// `on_cleanup` requires `Send + Sync`; the captured `Rc`s are fine in
	// single-threaded wasm, so a `SendWrapper` satisfies the bound.
	let cleanup = SendWrapper::new(move || {
		running.set(false);
		let Some(window) = web_sys::window() else {
			return;
		};
		// Cancel the pending frame before dropping the closure it targets.
		if let Some(id) = frame_id.take() {
			let _ = window.cancel_animation_frame(id);
		}
		animate.borrow_mut().take();
		if let Some(cb) = pointer_cb.borrow_mut().take() {
			let _ = window
				.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = scroll_cb.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = resize_cb.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		info!("particle-field: stopped");
	});
	on_cleanup(move || cleanup.take()());

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 0;"
		/>
	}
}

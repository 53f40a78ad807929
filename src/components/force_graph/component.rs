use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::{ForceGraphState, canvas_height};
use super::types::GraphData;

/// Upper bound for one simulation step, so a backgrounded tab does not
/// make the layout jump when it comes back.
const MAX_FRAME_DT: f64 = 0.05;

fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	let width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.unwrap_or(800.0);
	(width, canvas_height(width))
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

fn set_cursor(canvas: &HtmlCanvasElement, cursor: &str) {
	if let Err(e) = web_sys::HtmlElement::style(canvas).set_property("cursor", cursor) {
		debug!("Could not set cursor: {:?}", e);
	}
}

fn open_in_new_tab(url: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
	{
		warn!("Could not open {}: {:?}", url, e);
	}
}

/// Canvas rendering of the project graph. Width follows the parent element.
#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] dark: Signal<bool>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let hover_label = RwSignal::new(None::<String>);
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("2d canvas context unavailable, graph disabled");
			return;
		};

		let mut initial = ForceGraphState::new(&data.get_untracked(), w, h);
		initial.dark = dark.get_untracked();
		*state_init.borrow_mut() = Some(initial);
		debug!("Graph canvas ready at {}x{}", w, h);

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		let last_frame = Rc::new(Cell::new(js_sys::Date::now()));
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let now = js_sys::Date::now();
			let dt = ((now - last_frame.get()) / 1000.0).clamp(0.0, MAX_FRAME_DT);
			last_frame.set(now);

			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(dt);
				render::render(s, &ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_data = state.clone();
	Effect::new(move |_| {
		let data = data.get();
		if let Some(ref mut s) = *state_data.borrow_mut() {
			s.update_data(&data);
		}
	});

	let state_theme = state.clone();
	Effect::new(move |_| {
		let dark = dark.get();
		if let Some(ref mut s) = *state_theme.borrow_mut() {
			s.dark = dark;
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.pointer_down(x, y);
			set_cursor(&canvas, s.cursor());
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		let label = match *state_mm.borrow_mut() {
			Some(ref mut s) => {
				s.pointer_move(x, y);
				set_cursor(&canvas, s.cursor());
				s.hover_label()
			}
			None => None,
		};

		if hover_label.get_untracked() != label {
			hover_label.set(label);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let target = state_mu.borrow_mut().as_mut().and_then(|s| {
			let target = s.pointer_up();
			if let Some(canvas) = canvas_ref.get_untracked() {
				set_cursor(&canvas, s.cursor());
			}
			target
		});
		if let Some(url) = target {
			open_in_new_tab(&url);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pointer_leave();
		}
		hover_label.set(None);
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			title=move || hover_label.get().unwrap_or_default()
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}

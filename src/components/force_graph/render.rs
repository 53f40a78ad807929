use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{ForceGraphState, ease_out_cubic, node_radius};
use crate::data::ProjectSource;

/// Particles per focused link and their speed as a fraction of the link per frame.
const PARTICLES_PER_LINK: usize = 2;
const PARTICLE_SPEED: f64 = 0.004;
const FRAMES_PER_SECOND: f64 = 60.0;

/// Colours that depend on the light/dark theme.
struct Palette {
	link_idle: &'static str,
	link_focus: &'static str,
	link_dimmed: &'static str,
	node_dimmed: &'static str,
	stroke: &'static str,
	stroke_dimmed: &'static str,
	label: &'static str,
	label_dimmed: &'static str,
}

const LIGHT: Palette = Palette {
	link_idle: "rgba(105, 152, 110, 0.45)",
	link_focus: "rgba(77, 118, 82, 0.95)",
	link_dimmed: "rgba(105, 152, 110, 0.2)",
	node_dimmed: "rgba(138, 171, 119, 0.26)",
	stroke: "#f5f4ef",
	stroke_dimmed: "rgba(245, 244, 239, 0.45)",
	label: "#1F2A22",
	label_dimmed: "rgba(31, 42, 34, 0.42)",
};

const DARK: Palette = Palette {
	link_idle: "rgba(105, 152, 110, 0.25)",
	link_focus: "rgba(105, 152, 110, 0.95)",
	link_dimmed: "rgba(105, 152, 110, 0.1)",
	node_dimmed: "rgba(138, 171, 119, 0.15)",
	stroke: "#0f1410",
	stroke_dimmed: "rgba(15, 20, 16, 0.45)",
	label: "#e8eee7",
	label_dimmed: "rgba(232, 238, 231, 0.42)",
};

fn source_color(source: ProjectSource) -> &'static str {
	match source {
		ProjectSource::Github => "#69986E",
		ProjectSource::Product => "#8FAE7A",
	}
}

pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let palette = if state.dark { &DARK } else { &LIGHT };
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_links(state, ctx, palette);
	draw_nodes(state, ctx, palette);
	ctx.restore();
}

fn draw_links(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let k = state.transform.k;
	let has_highlight = state.has_active_highlight();
	let phase = (state.flow_time * FRAMES_PER_SECOND * PARTICLE_SPEED).fract();

	state.graph.visit_edges(|n1, n2, edge| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let base_width = 0.8 + edge.user_data.strength * 0.6;
		let focused = state.is_link_highlighted(n1.index(), n2.index());

		let (color, width) = match (has_highlight, focused) {
			(false, _) => (palette.link_idle, base_width),
			(true, true) => (palette.link_focus, base_width + 1.0),
			(true, false) => (palette.link_dimmed, 0.45),
		};

		ctx.set_stroke_style_str(color);
		ctx.set_line_width(width / k);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		if !state.has_particles(n1.index(), n2.index()) {
			return;
		}
		ctx.set_fill_style_str(palette.link_focus);
		for i in 0..PARTICLES_PER_LINK {
			let p = (phase + i as f64 / PARTICLES_PER_LINK as f64).fract();
			ctx.begin_path();
			let _ = ctx.arc(
				x1 + (x2 - x1) * p,
				y1 + (y2 - y1) * p,
				(width * 0.5 + 1.0) / k,
				0.0,
				2.0 * PI,
			);
			ctx.fill();
		}
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, palette: &Palette) {
	let (has_highlight, t, k) = (
		state.has_active_highlight(),
		ease_out_cubic(state.hover.highlight_t),
		state.transform.k,
	);
	let font = format!("600 {}px \"Outfit\", sans-serif", 11.0 / k);

	state.graph.visit_nodes(|node| {
		let idx = node.index();
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let active = !has_highlight || state.is_highlighted(idx);
		let hovered = state.is_hovered(idx);
		let radius = node_radius(info.source) + if hovered { 2.0 * t } else { 0.0 };

		if hovered && t > 0.01 {
			let glow_radius = radius * (1.4 + 0.8 * t);
			if let Ok(gradient) = ctx.create_radial_gradient(x, y, radius * 0.5, x, y, glow_radius) {
				let _ = gradient.add_color_stop(0.0, &format!("rgba(105, 152, 110, {})", 0.35 * t));
				let _ = gradient.add_color_stop(1.0, "rgba(105, 152, 110, 0)");
				ctx.begin_path();
				let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				ctx.fill();
			}
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(if active {
			source_color(info.source)
		} else {
			palette.node_dimmed
		});
		ctx.fill();
		ctx.set_line_width(1.7 / k);
		ctx.set_stroke_style_str(if active {
			palette.stroke
		} else {
			palette.stroke_dimmed
		});
		ctx.stroke();

		ctx.set_font(&font);
		ctx.set_text_align("left");
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(if active {
			palette.label
		} else {
			palette.label_dimmed
		});
		let _ = ctx.fill_text(&info.title, x + radius + 4.0, y);
	});
}

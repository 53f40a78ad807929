use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::types::GraphData;
use crate::consts::{GRAPH_NARROW_BREAKPOINT, GRAPH_NARROW_HEIGHT, GRAPH_WIDE_HEIGHT};
use crate::data::ProjectSource;

/// Fixed repulsion between every pair of nodes.
pub const CHARGE_STRENGTH: f32 = 210.0;
/// Fraction of velocity lost each tick.
pub const VELOCITY_DECAY: f32 = 0.26;
/// Ticks after which the layout is considered stable and stops.
pub const COOLDOWN_TICKS: u32 = 100;

const LINK_BASE_DISTANCE: f64 = 142.0;
const LINK_DISTANCE_STEP: f64 = 12.0;
const LINK_STIFFNESS: f64 = 0.3;
const SEED_RADIUS: f64 = 100.0;

pub const FIT_DELAY: f64 = 0.25;
pub const FIT_DURATION: f64 = 0.5;
pub const FIT_PADDING: f64 = 38.0;
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

pub const HIT_RADIUS: f64 = 12.0;
/// Pointer travel in pixels that turns a press into a drag.
pub const CLICK_SLOP: f64 = 4.0;

/// Rest length of a link: stronger relations sit closer together.
pub fn link_distance(strength: f64) -> f64 {
	(LINK_BASE_DISTANCE - strength * LINK_DISTANCE_STEP).max(0.0)
}

/// Canvas height for a container of the given width.
pub fn canvas_height(width: f64) -> f64 {
	if width < GRAPH_NARROW_BREAKPOINT {
		GRAPH_NARROW_HEIGHT
	} else {
		GRAPH_WIDE_HEIGHT
	}
}

pub fn node_radius(source: ProjectSource) -> f64 {
	match source {
		ProjectSource::Product => 9.0,
		ProjectSource::Github => 8.0,
	}
}

pub(super) fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub title: String,
	pub role: String,
	pub source: ProjectSource,
	pub url: Option<String>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LinkInfo {
	pub strength: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl ViewTransform {
	fn lerp(&self, to: &ViewTransform, t: f64) -> ViewTransform {
		ViewTransform {
			x: self.x + (to.x - self.x) * t,
			y: self.y + (to.y - self.y) * t,
			k: self.k + (to.k - self.k) * t,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

#[derive(Clone, Debug)]
struct FitAnimation {
	from: ViewTransform,
	to: ViewTransform,
	elapsed: f64,
}

struct Built {
	graph: ForceGraph<NodeInfo, LinkInfo>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx, f64)>,
	adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>>,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
}

fn build(data: &GraphData, positions: &HashMap<String, (f32, f32)>) -> Built {
	let mut graph = ForceGraph::new(SimulationParameters {
		force_charge: CHARGE_STRENGTH,
		// Links are pulled towards their own rest length in `apply_link_force`.
		force_spring: 0.0,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 1.0 - VELOCITY_DECAY,
	});
	let mut id_to_idx = HashMap::new();
	let mut adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>> = HashMap::new();
	let mut edges = Vec::new();

	for (i, node) in data.nodes.iter().enumerate() {
		let (x, y) = positions.get(&node.id).copied().unwrap_or_else(|| {
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			(
				(SEED_RADIUS * angle.cos()) as f32,
				(SEED_RADIUS * angle.sin()) as f32,
			)
		});

		let idx = graph.add_node(NodeData {
			x,
			y,
			mass: 10.0,
			is_anchor: false,
			user_data: NodeInfo {
				id: node.id.clone(),
				title: node.title.clone(),
				role: node.role.clone(),
				source: node.source,
				url: node.url.clone(),
			},
		});
		id_to_idx.insert(node.id.clone(), idx);
		adjacency.insert(idx, HashSet::new());
	}

	for link in &data.links {
		if let (Some(&src), Some(&tgt)) =
			(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
		{
			let distance = link_distance(link.strength);
			graph.add_edge(
				src,
				tgt,
				EdgeData {
					user_data: LinkInfo {
						strength: link.strength,
					},
				},
			);
			edges.push((src, tgt, distance));
			adjacency.entry(src).or_default().insert(tgt);
			adjacency.entry(tgt).or_default().insert(src);
		}
	}

	Built {
		graph,
		edges,
		adjacency,
		id_to_idx,
	}
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, LinkInfo>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	pub dark: bool,
	ticks: u32,
	settled: bool,
	fit_delay: Option<f64>,
	fit_animation: Option<FitAnimation>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx, f64)>,
	adjacency: HashMap<DefaultNodeIdx, HashSet<DefaultNodeIdx>>,
	id_to_idx: HashMap<String, DefaultNodeIdx>,
	data: GraphData,
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let built = build(data, &HashMap::new());
		let mut state = Self {
			graph: built.graph,
			edges: built.edges,
			adjacency: built.adjacency,
			id_to_idx: built.id_to_idx,
			data: data.clone(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			dark: false,
			ticks: 0,
			settled: false,
			fit_delay: None,
			fit_animation: None,
		};
		state.schedule_fit();
		state
	}

	/// Swaps in new graph data. Node positions survive for ids present in
	/// both; a purely cosmetic change (titles, urls) keeps the layout running
	/// as is, a structural one restarts the simulation.
	pub fn update_data(&mut self, data: &GraphData) {
		if *data == self.data {
			return;
		}

		let same_shape = data.links == self.data.links
			&& data.nodes.len() == self.data.nodes.len()
			&& data
				.nodes
				.iter()
				.zip(&self.data.nodes)
				.all(|(a, b)| a.id == b.id && a.source == b.source);

		if same_shape {
			let by_idx: HashMap<DefaultNodeIdx, _> = data
				.nodes
				.iter()
				.filter_map(|n| Some((self.index_of(&n.id)?, n)))
				.collect();
			self.graph.visit_nodes_mut(|node| {
				if let Some(update) = by_idx.get(&node.index()) {
					node.data.user_data.title = update.title.clone();
					node.data.user_data.role = update.role.clone();
					node.data.user_data.url = update.url.clone();
				}
			});
		} else {
			let mut positions = HashMap::new();
			self.graph.visit_nodes(|node| {
				positions.insert(node.data.user_data.id.clone(), (node.x(), node.y()));
			});
			let built = build(data, &positions);
			debug!(
				"Rebuilt graph with {} nodes, {} links",
				data.nodes.len(),
				built.edges.len()
			);
			self.graph = built.graph;
			self.edges = built.edges;
			self.adjacency = built.adjacency;
			self.id_to_idx = built.id_to_idx;
			self.drag = DragState::default();
			self.hover = HoverState::default();
			self.reheat();
		}

		self.data = data.clone();
		self.schedule_fit();
	}

	pub fn index_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.id_to_idx.get(id).copied()
	}

	pub fn node_info(&self, idx: DefaultNodeIdx) -> Option<NodeInfo> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.clone());
			}
		});
		found
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors = node
			.and_then(|idx| self.adjacency.get(&idx))
			.cloned()
			.unwrap_or_default();

		if node.is_some() && !was_hovering {
			self.hover.delay_t = 0.0;
		}
	}

	/// Whether `idx` renders in the focused style, including while the
	/// previous focus fades out.
	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	/// A link is focused when it touches the hovered node.
	pub fn is_link_highlighted(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> bool {
		match self.hover.node.or(self.hover.prev_node) {
			Some(focus) => a == focus || b == focus,
			None => false,
		}
	}

	/// Only links of the node currently under the pointer carry particles.
	pub fn has_particles(&self, a: DefaultNodeIdx, b: DefaultNodeIdx) -> bool {
		self.hover.node.is_some_and(|focus| a == focus || b == focus)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Canvas cursor: a hand over nodes, a closed grip while dragging or
	/// panning, an open grip elsewhere.
	pub fn cursor(&self) -> &'static str {
		if self.drag.moved || self.pan.active {
			"grabbing"
		} else if self.hover.node.is_some() {
			"pointer"
		} else {
			"grab"
		}
	}

	/// `"title - role"` of the hovered node.
	pub fn hover_label(&self) -> Option<String> {
		let info = self.node_info(self.hover.node?)?;
		Some(format!("{} - {}", info.title, info.role))
	}

	/// URL opened when `idx` is clicked, if it has one.
	pub fn click_target(&self, idx: DefaultNodeIdx) -> Option<String> {
		self.node_info(idx)?.url.filter(|url| !url.is_empty())
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		if let Some(idx) = self.node_at_position(x, y) {
			self.drag.active = true;
			self.drag.moved = false;
			self.drag.node_idx = Some(idx);
			self.drag.start_x = x;
			self.drag.start_y = y;
			let drag = &mut self.drag;
			self.graph.visit_nodes(|node| {
				if node.index() == idx {
					drag.node_start_x = node.x();
					drag.node_start_y = node.y();
				}
			});
		} else {
			self.pan.active = true;
			self.pan.start_x = x;
			self.pan.start_y = y;
			self.pan.transform_start_x = self.transform.x;
			self.pan.transform_start_y = self.transform.y;
		}
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		// Update hover state when not dragging
		if !self.drag.active {
			let hovered = self.node_at_position(x, y);
			self.set_hover(hovered);
		}

		if self.drag.active {
			let Some(idx) = self.drag.node_idx else {
				return;
			};
			let (sx, sy) = (x - self.drag.start_x, y - self.drag.start_y);
			if !self.drag.moved {
				if (sx * sx + sy * sy).sqrt() < CLICK_SLOP {
					return;
				}
				self.drag.moved = true;
				self.cancel_fit();
				self.reheat();
			}
			let (nx, ny) = (
				self.drag.node_start_x + (sx / self.transform.k) as f32,
				self.drag.node_start_y + (sy / self.transform.k) as f32,
			);
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.x = nx;
					node.data.y = ny;
					node.data.is_anchor = true;
				}
			});
		} else if self.pan.active {
			self.cancel_fit();
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}
	}

	/// Ends a press. Returns the URL to open when the press was a click on a
	/// node that has one.
	pub fn pointer_up(&mut self) -> Option<String> {
		let clicked = match (self.drag.active, self.drag.moved, self.drag.node_idx) {
			(true, false, Some(idx)) => self.click_target(idx),
			_ => None,
		};
		self.drag = DragState::default();
		self.pan.active = false;
		clicked
	}

	pub fn pointer_leave(&mut self) {
		self.drag = DragState::default();
		self.pan.active = false;
		self.set_hover(None);
	}

	/// Zooms around the pointer; positive `delta_y` zooms out.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		self.cancel_fit();
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	/// Restarts the simulation for another cooldown period.
	pub fn reheat(&mut self) {
		self.ticks = 0;
		self.animation_running = true;
	}

	pub fn schedule_fit(&mut self) {
		self.fit_delay = Some(FIT_DELAY);
	}

	pub fn cancel_fit(&mut self) {
		self.fit_delay = None;
		self.fit_animation = None;
	}

	/// Transform that frames every node inside the canvas with `FIT_PADDING`
	/// to spare.
	pub fn fit_transform(&self) -> Option<ViewTransform> {
		let mut bounds: Option<(f64, f64, f64, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (x, y) = (node.x() as f64, node.y() as f64);
			bounds = Some(match bounds {
				None => (x, y, x, y),
				Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
			});
		});
		let (min_x, min_y, max_x, max_y) = bounds?;

		let (bw, bh) = ((max_x - min_x).max(1.0), (max_y - min_y).max(1.0));
		let (aw, ah) = (
			(self.width - 2.0 * FIT_PADDING).max(1.0),
			(self.height - 2.0 * FIT_PADDING).max(1.0),
		);
		let k = (aw / bw).min(ah / bh).clamp(MIN_ZOOM, MAX_ZOOM);
		let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);

		Some(ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		})
	}

	fn apply_link_force(&mut self) {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(
				node.index(),
				(node.x() as f64, node.y() as f64, node.data.is_anchor),
			);
		});

		let mut shifts: HashMap<DefaultNodeIdx, (f64, f64)> = HashMap::new();
		for &(src, tgt, distance) in &self.edges {
			let (Some(&(x1, y1, pinned1)), Some(&(x2, y2, pinned2))) =
				(positions.get(&src), positions.get(&tgt))
			else {
				continue;
			};
			let (dx, dy) = (x2 - x1, y2 - y1);
			let len = (dx * dx + dy * dy).sqrt().max(0.001);
			let pull = (len - distance) / len * LINK_STIFFNESS * 0.5;
			if !pinned1 {
				let shift = shifts.entry(src).or_default();
				shift.0 += dx * pull;
				shift.1 += dy * pull;
			}
			if !pinned2 {
				let shift = shifts.entry(tgt).or_default();
				shift.0 -= dx * pull;
				shift.1 -= dy * pull;
			}
		}

		self.graph.visit_nodes_mut(|node| {
			if let Some(&(sx, sy)) = shifts.get(&node.index()) {
				node.data.x += sx as f32;
				node.data.y += sy as f32;
			}
		});
	}

	fn advance_fit(&mut self, dt: f64) {
		if let Some(remaining) = self.fit_delay {
			let remaining = remaining - dt;
			if remaining > 0.0 {
				self.fit_delay = Some(remaining);
			} else {
				self.fit_delay = None;
				self.fit_animation = self.fit_transform().map(|to| FitAnimation {
					from: self.transform,
					to,
					elapsed: 0.0,
				});
			}
		}

		let Some(mut anim) = self.fit_animation.take() else {
			return;
		};
		anim.elapsed += dt;
		let t = (anim.elapsed / FIT_DURATION).min(1.0);
		self.transform = anim.from.lerp(&anim.to, ease_out_cubic(t));
		if t < 1.0 {
			self.fit_animation = Some(anim);
		}
	}

	pub fn tick(&mut self, dt: f64) {
		if self.animation_running {
			self.graph.update(dt as f32);
			self.apply_link_force();
			self.ticks += 1;
			if self.ticks >= COOLDOWN_TICKS {
				self.animation_running = false;
				if !self.settled {
					self.settled = true;
					debug!("Layout settled after {} ticks", self.ticks);
					self.schedule_fit();
				}
			}
		}
		self.flow_time += dt;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}

		self.advance_fit(dt);
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.schedule_fit();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};
	use crate::data::{featured_projects, project_relations};

	impl ForceGraphState {
		fn graph_to_screen(&self, gx: f64, gy: f64) -> (f64, f64) {
			(
				gx * self.transform.k + self.transform.x,
				gy * self.transform.k + self.transform.y,
			)
		}

		fn is_fitting(&self) -> bool {
			self.fit_delay.is_some() || self.fit_animation.is_some()
		}

		/// Every node id drawn in the focused style.
		fn highlighted_ids(&self) -> HashSet<String> {
			let mut ids = HashSet::new();
			self.graph.visit_nodes(|node| {
				if self.is_highlighted(node.index()) {
					ids.insert(node.data.user_data.id.clone());
				}
			});
			ids
		}

		/// Every link drawn in the focused style, as sorted id pairs.
		fn highlighted_links(&self) -> HashSet<(String, String)> {
			let mut links = HashSet::new();
			self.graph.visit_edges(|n1, n2, _| {
				if self.is_link_highlighted(n1.index(), n2.index()) {
					let (a, b) = (n1.data.user_data.id.clone(), n2.data.user_data.id.clone());
					links.insert(if a < b { (a, b) } else { (b, a) });
				}
			});
			links
		}
	}

	fn ids(values: &[&str]) -> HashSet<String> {
		values.iter().map(|v| v.to_string()).collect()
	}

	fn pair(a: &str, b: &str) -> (String, String) {
		(a.to_string(), b.to_string())
	}

	fn node(id: &str, url: Option<&str>) -> GraphNode {
		GraphNode {
			id: id.into(),
			title: id.to_uppercase(),
			role: "Engineer".into(),
			source: ProjectSource::Github,
			url: url.map(str::to_owned),
		}
	}

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			source: source.into(),
			target: target.into(),
			strength: 1.0,
		}
	}

	/// a - b - c, plus an isolated d.
	fn chain() -> GraphData {
		GraphData {
			nodes: vec![
				node("a", Some("https://a.example")),
				node("b", None),
				node("c", None),
				node("d", Some("")),
			],
			links: vec![link("a", "b"), link("b", "c")],
		}
	}

	fn screen_pos(state: &ForceGraphState, id: &str) -> (f64, f64) {
		let idx = state.index_of(id).unwrap();
		let mut pos = (0.0, 0.0);
		state.graph.visit_nodes(|n| {
			if n.index() == idx {
				pos = (n.x() as f64, n.y() as f64);
			}
		});
		state.graph_to_screen(pos.0, pos.1)
	}

	#[test]
	fn link_distance_shrinks_with_strength() {
		assert_eq!(link_distance(2.0), 118.0);
		assert_eq!(link_distance(3.0), 106.0);
		assert!(link_distance(1.0) > link_distance(2.0));
		assert_eq!(link_distance(20.0), 0.0);
	}

	#[test]
	fn seed_relation_becomes_one_edge_at_its_rest_length() {
		let data = GraphData::from_projects(&featured_projects(), &project_relations());
		let state = ForceGraphState::new(&data, 800.0, 360.0);
		let (a, b) = (
			state.index_of("ninym-assistant").unwrap(),
			state.index_of("arphatra").unwrap(),
		);

		let matching: Vec<f64> = state
			.edges
			.iter()
			.filter(|(s, t, _)| (*s, *t) == (a, b) || (*s, *t) == (b, a))
			.map(|(_, _, d)| *d)
			.collect();
		assert_eq!(matching, vec![118.0]);
	}

	#[test]
	fn canvas_is_shorter_below_breakpoint() {
		assert_eq!(canvas_height(500.0), 300.0);
		assert_eq!(canvas_height(719.0), 300.0);
		assert_eq!(canvas_height(720.0), 360.0);
	}

	#[test]
	fn hover_activates_node_and_direct_neighbours_only() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		let idx = |name: &str| state.index_of(name).unwrap();
		let (a, b, c) = (idx("a"), idx("b"), idx("c"));

		assert!(!state.has_active_highlight());
		assert!(state.highlighted_ids().is_empty());
		assert!(state.highlighted_links().is_empty());

		state.set_hover(Some(a));
		assert!(state.has_active_highlight());
		assert_eq!(state.highlighted_ids(), ids(&["a", "b"]));
		assert_eq!(state.highlighted_links(), HashSet::from([pair("a", "b")]));
		assert!(state.has_particles(a, b));
		assert!(!state.has_particles(b, c));

		state.set_hover(Some(b));
		assert_eq!(state.highlighted_ids(), ids(&["a", "b", "c"]));
		assert_eq!(
			state.highlighted_links(),
			HashSet::from([pair("a", "b"), pair("b", "c")])
		);
	}

	#[test]
	fn leaving_a_node_fades_out_then_clears() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		let a = state.index_of("a").unwrap();
		state.set_hover(Some(a));
		for _ in 0..60 {
			state.tick(0.016);
		}
		assert!(state.hover.highlight_t > 0.0);

		state.set_hover(None);
		assert_eq!(state.hover.node, None);
		assert!(state.has_active_highlight());
		assert!(!state.has_particles(a, state.index_of("b").unwrap()));

		for _ in 0..600 {
			state.tick(0.016);
		}
		assert!(!state.has_active_highlight());
	}

	#[test]
	fn hover_label_shows_title_and_role() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		state.set_hover(state.index_of("a"));
		assert_eq!(state.hover_label().as_deref(), Some("A - Engineer"));
	}

	#[test]
	fn click_opens_url_only_when_present() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);

		let (x, y) = screen_pos(&state, "a");
		state.pointer_down(x, y);
		assert_eq!(state.pointer_up().as_deref(), Some("https://a.example"));

		for id in ["b", "d"] {
			let (x, y) = screen_pos(&state, id);
			state.pointer_down(x, y);
			assert_eq!(state.pointer_up(), None, "node {id} has no url");
		}
	}

	#[test]
	fn dragging_a_node_is_not_a_click() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		let (x, y) = screen_pos(&state, "a");

		state.pointer_down(x, y);
		state.pointer_move(x + 30.0, y + 10.0);
		assert!(state.drag.moved);
		assert_eq!(state.pointer_up(), None);

		let (nx, ny) = screen_pos(&state, "a");
		assert!((nx - (x + 30.0)).abs() < 0.01);
		assert!((ny - (y + 10.0)).abs() < 0.01);
	}

	#[test]
	fn layout_cools_down() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		for _ in 0..COOLDOWN_TICKS {
			assert!(state.animation_running);
			state.tick(0.016);
		}
		assert!(!state.animation_running);
	}

	#[test]
	fn fit_frames_every_node() {
		let mut state = ForceGraphState::new(&chain(), 600.0, 300.0);
		state.animation_running = false;
		state.transform = ViewTransform {
			x: -900.0,
			y: 40.0,
			k: 0.2,
		};
		state.resize(600.0, 300.0);

		let mut elapsed = 0.0;
		while state.is_fitting() {
			state.tick(0.05);
			elapsed += 0.05;
			assert!(elapsed < FIT_DELAY + FIT_DURATION + 0.2);
		}

		for id in ["a", "b", "c", "d"] {
			let (x, y) = screen_pos(&state, id);
			assert!((FIT_PADDING - 0.5..=600.0 - FIT_PADDING + 0.5).contains(&x), "{id} x={x}");
			assert!((FIT_PADDING - 0.5..=300.0 - FIT_PADDING + 0.5).contains(&y), "{id} y={y}");
		}
	}

	#[test]
	fn user_zoom_cancels_pending_fit() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		assert!(state.is_fitting());
		state.zoom_at(10.0, 10.0, -1.0);
		assert!(!state.is_fitting());
		assert!((state.transform.k - 1.1).abs() < 1e-9);
	}

	#[test]
	fn cosmetic_update_keeps_positions() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		for _ in 0..10 {
			state.tick(0.016);
		}
		let before = screen_pos(&state, "b");

		let mut data = chain();
		data.nodes[1].url = Some("https://b.example".into());
		state.update_data(&data);

		assert_eq!(screen_pos(&state, "b"), before);
		assert_eq!(
			state.click_target(state.index_of("b").unwrap()).as_deref(),
			Some("https://b.example")
		);
	}

	#[test]
	fn structural_update_rebuilds_adjacency() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		let mut data = chain();
		data.links.push(link("c", "d"));
		state.update_data(&data);

		state.set_hover(state.index_of("d"));
		assert_eq!(state.highlighted_ids(), ids(&["c", "d"]));
		assert_eq!(state.highlighted_links(), HashSet::from([pair("c", "d")]));
		assert!(state.animation_running);
	}

	#[test]
	fn cursor_follows_pointer_state() {
		let mut state = ForceGraphState::new(&chain(), 800.0, 360.0);
		assert_eq!(state.cursor(), "grab");

		let (x, y) = screen_pos(&state, "a");
		state.pointer_move(x, y);
		assert_eq!(state.cursor(), "pointer");

		state.pointer_down(x, y);
		state.pointer_move(x + 20.0, y);
		assert_eq!(state.cursor(), "grabbing");

		state.pointer_up();
		state.pointer_move(x + 300.0, y + 300.0);
		assert_eq!(state.cursor(), "grab");
	}
}

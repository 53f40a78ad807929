use leptos::prelude::*;

use super::force_graph::{ForceGraphCanvas, GraphData};
use crate::data::relation_captions;
use crate::state::AppState;

/// Graph canvas, its legend, and one caption per relation.
#[component]
pub fn ProjectGraph() -> impl IntoView {
	let state = expect_context::<AppState>();

	let graph_data = Memo::new(move |_| {
		let projects = state.projects.get();
		state
			.relations
			.with_value(|relations| GraphData::from_projects(&projects, relations))
	});
	let dark = Signal::derive(move || state.theme.get().is_dark());

	let captions = move || {
		let lang = state.lang.get();
		let projects = state.projects.get();
		state
			.relations
			.with_value(|relations| relation_captions(&projects, relations, lang))
			.into_iter()
			.map(|caption| {
				view! {
					<article class="relation-caption">
						<span class="relation-title">{caption.title}</span>
						{caption.reason}
					</article>
				}
			})
			.collect_view()
	};

	view! {
		<div class="graph-frame">
			<div class="graph-container">
				<ForceGraphCanvas data=graph_data dark=dark />
			</div>
			<div class="graph-legend">
				<span class="legend-github">{move || state.t().legend_github}</span>
				<span class="legend-product">{move || state.t().legend_product}</span>
				<span>{move || state.t().legend_click}</span>
			</div>
		</div>
		<div class="relation-captions">{captions}</div>
	}
}

use leptos::prelude::*;

use crate::state::AppState;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	let state = expect_context::<AppState>();

	view! {
		<main class="not-found">
			<h1>{move || state.t().not_found_title}</h1>
			<a href="/">{move || state.t().not_found_back}</a>
		</main>
	}
}

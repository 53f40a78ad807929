use leptos::prelude::*;

use crate::data::profile;
use crate::state::AppState;

/// Sticky top bar: section links, theme and language toggles.
#[component]
pub fn SiteHeader() -> impl IntoView {
	let state = expect_context::<AppState>();
	let github = profile().links.github;

	view! {
		<header class="site-header">
			<a href="#home" class="brand">
				<span class="brand-name">{profile().handle}</span>
			</a>

			<nav class="site-nav">
				<a href="#projects">{move || state.t().nav_projects}</a>
				<a href="#services">{move || state.t().nav_services}</a>
				<a href="#graph">{move || state.t().nav_graph}</a>
				<a href="#about">{move || state.t().nav_about}</a>
			</nav>

			<div class="header-actions">
				<button
					class="icon-button"
					aria-label="Toggle theme"
					on:click=move |_| state.toggle_theme()
				>
					{move || if state.theme.get().is_dark() { "☀" } else { "☾" }}
				</button>
				<button class="icon-button" on:click=move |_| state.toggle_lang()>
					{move || state.lang.get().code().to_uppercase()}
				</button>
				<a class="outline-link" href=github target="_blank" rel="noreferrer">
					"GitHub"
				</a>
			</div>
		</header>
	}
}

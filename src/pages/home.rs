use leptos::prelude::*;

use crate::components::header::SiteHeader;
use crate::components::project_card::ProjectCard;
use crate::components::project_graph::ProjectGraph;
use crate::data::{ProjectSource, profile};
use crate::state::AppState;

/// SVG path data for the service icons, in the order the services render.
const SERVICE_ICONS: [&str; 5] = [
	"M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
	"M13 10V3L4 14h7v7l9-11h-7z",
	"M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
	"M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z",
	"M5 12h14M5 12a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v4a2 2 0 01-2 2M5 12a2 2 0 00-2 2v4a2 2 0 002 2h14a2 2 0 002-2v-4a2 2 0 00-2-2m-2-4h.01M17 16h.01",
];

#[component]
fn Hero() -> impl IntoView {
	let state = expect_context::<AppState>();
	let profile = profile();
	let intro = profile.intro.clone();

	let count = move |source: Option<ProjectSource>| {
		state.projects.with(|projects| {
			projects
				.iter()
				.filter(|p| source.is_none_or(|s| p.source == s))
				.count()
		})
	};

	view! {
		<section class="hero">
			<div class="hero-main">
				<h1>{move || state.t().hero_title}</h1>
				<p class="hero-intro">{move || intro.get(state.lang.get()).to_string()}</p>
				<div class="hero-actions">
					<a class="button-primary" href=profile.links.github target="_blank" rel="noreferrer">
						{move || state.t().hero_explore}
					</a>
					<a class="button-outline" href="#projects">{move || state.t().nav_projects}</a>
				</div>
				<div class="hero-stats">
					<article>
						<strong>{move || count(None)}</strong>
						<span>{move || state.t().hero_selected}</span>
					</article>
					<article>
						<strong>{move || count(Some(ProjectSource::Github))}</strong>
						<span>{move || state.t().hero_repos}</span>
					</article>
					<article>
						<strong>{move || count(Some(ProjectSource::Product))}</strong>
						<span>{move || state.t().hero_fullstack}</span>
					</article>
				</div>
			</div>
			<aside class="hero-focus">
				<p class="kicker">{move || state.t().current_focus}</p>
				<ul>
					{move || {
						state.t().focus_items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()
					}}
				</ul>
				<div class="chips">
					<span>"Python"</span>
					<span>"React"</span>
					<span>"Firebase"</span>
					<span>"API Integration"</span>
				</div>
			</aside>
		</section>
	}
}

#[component]
fn Services() -> impl IntoView {
	let state = expect_context::<AppState>();

	let services = move || {
		let t = state.t();
		[
			(t.service_web_title, t.service_web_desc),
			(t.service_auto_title, t.service_auto_desc),
			(t.service_product_title, t.service_product_desc),
			(t.service_cyber_title, t.service_cyber_desc),
			(t.service_server_title, t.service_server_desc),
		]
		.into_iter()
		.zip(SERVICE_ICONS)
		.map(|((title, desc), icon)| {
			view! {
				<article class="service">
					<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
						<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=icon />
					</svg>
					<h3>{title}</h3>
					<p>{desc}</p>
				</article>
			}
		})
		.collect_view()
	};

	view! {
		<section id="services" class="panel">
			<p class="kicker">{move || state.t().services_kicker}</p>
			<h2>{move || state.t().services_title}</h2>
			<div class="service-grid">{services}</div>
		</section>
	}
}

#[component]
fn Projects() -> impl IntoView {
	let state = expect_context::<AppState>();

	let cards = move || {
		let lang = state.lang.get();
		state
			.projects
			.get()
			.into_iter()
			.map(|project| view! { <ProjectCard project=project lang=lang /> })
			.collect_view()
	};

	view! {
		<section id="projects" class="panel">
			<header class="panel-head">
				<div>
					<p class="kicker">{move || state.t().projects_kicker}</p>
					<h2>{move || state.t().projects_title}</h2>
				</div>
				<p class=move || state.sync_status.get().css_class()>
					{move || state.sync_status.get().message(state.t())}
				</p>
			</header>
			<div class="project-grid">{cards}</div>
		</section>
	}
}

#[component]
fn GraphSection() -> impl IntoView {
	let state = expect_context::<AppState>();

	view! {
		<section id="graph" class="panel">
			<header>
				<p class="kicker">{move || state.t().graph_kicker}</p>
				<h2>{move || state.t().graph_title}</h2>
				<p>{move || state.t().graph_copy}</p>
			</header>
			<ProjectGraph />
		</section>
	}
}

#[component]
fn About() -> impl IntoView {
	let state = expect_context::<AppState>();
	let profile = profile();
	let about = profile.about.clone();
	let links = profile.links.clone();

	view! {
		<section id="about" class="about">
			<div class="panel">
				<p class="kicker">{move || state.t().about_kicker}</p>
				<h2>{profile.name}</h2>
				<p>{move || about.get(state.lang.get()).to_string()}</p>
				<div class="about-actions">
					<a class="button-primary" href=links.email>{move || state.t().about_email}</a>
					<a class="button-outline" href=links.github target="_blank" rel="noreferrer">
						{move || state.t().about_follow}
					</a>
				</div>
			</div>
			<div class="cta">
				<h2>{move || state.t().cta_title}</h2>
				<p>{move || state.t().cta_copy}</p>
				<a class="button-primary" href=links.linkedin target="_blank" rel="noreferrer">
					{move || state.t().cta_btn}
				</a>
			</div>
		</section>
	}
}

#[component]
fn Footer() -> impl IntoView {
	let profile = profile();
	let links = profile.links;

	view! {
		<footer class="site-footer">
			<div class="footer-links">
				<a href=links.linkedin target="_blank" rel="noreferrer">"LinkedIn"</a>
				<a href=links.instagram target="_blank" rel="noreferrer">"Instagram"</a>
				<a href=links.github target="_blank" rel="noreferrer">"GitHub"</a>
			</div>
			<p>{format!("© 2026 {}.", profile.handle)}</p>
			<p>{profile.name}</p>
		</footer>
	}
}

/// Single-page portfolio.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="page" id="home">
			<SiteHeader />
			<main class="content">
				<Hero />
				<Services />
				<Projects />
				<GraphSection />
				<About />
				<Footer />
			</main>
		</div>
	}
}

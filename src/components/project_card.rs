use leptos::prelude::*;

use crate::data::{Lang, Project};
use crate::format::{format_updated, language_label};

#[component]
pub fn ProjectCard(project: Project, lang: Lang) -> impl IntoView {
	let t = lang.strings();
	let updated = format_updated(project.updated_at.as_deref())
		.unwrap_or_else(|| t.card_in_development.to_string());
	let language = language_label(&project.language, t.card_multi_stack).to_string();
	let description = project.description.get(lang).to_string();

	let stats = project.is_github().then(|| {
		view! {
			<div class="card-stats">
				<span>{format!("{} {}", t.card_stars, project.stars.unwrap_or(0))}</span>
				<span>{format!("{} {}", t.card_forks, project.forks.unwrap_or(0))}</span>
			</div>
		}
	});

	let repo_link = project.repo_url.clone().filter(|u| !u.is_empty()).map(|url| {
		view! { <a href=url target="_blank" rel="noreferrer">"GitHub"</a> }
	});
	let live_link = project.live_url.clone().filter(|u| !u.is_empty()).map(|url| {
		view! { <a class="primary" href=url target="_blank" rel="noreferrer">{t.card_visit}</a> }
	});

	let tags = project
		.tags
		.iter()
		.map(|tag| view! { <span class="tag">{tag.clone()}</span> })
		.collect_view();

	view! {
		<article class="project-card">
			<header class="card-head">
				<span class="card-source">{project.source.label()}</span>
				<span class="card-role">{project.role.clone()}</span>
			</header>

			<h3>{project.title.clone()}</h3>
			<p class="card-description">{description}</p>

			<div class="card-meta">
				<span>{language}</span>
				<span>{format!("{} {}", t.card_updated, updated)}</span>
			</div>

			<div class="card-tags">{tags}</div>

			{stats}

			<div class="card-links">{repo_link} {live_link}</div>
		</article>
	}
}

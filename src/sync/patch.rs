use std::collections::HashMap;

use crate::data::{Localized, Project};

use super::client::RepoDetails;

/// Live values merged over one project's fallback data.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectPatch {
	pub id: String,
	pub description: Localized,
	pub language: String,
	pub stars: Option<u64>,
	pub forks: Option<u64>,
	pub updated_at: Option<String>,
	pub repo_url: Option<String>,
	pub live_url: Option<String>,
}

fn present(value: &Option<String>) -> Option<&String> {
	value.as_ref().filter(|v| !v.is_empty())
}

/// Combines an API response with the project's fallback values.
///
/// Fields the API leaves out keep their fallback. The live URL keeps an
/// explicit fallback; only without one does a non-blank homepage apply.
pub fn build_patch(fallback: &Project, repo: &RepoDetails) -> ProjectPatch {
	let description = match present(&repo.description) {
		Some(text) => Localized::uniform(text.clone()),
		None => fallback.description.clone(),
	};

	let live_url = present(&fallback.live_url).cloned().or_else(|| {
		repo.homepage
			.as_ref()
			.filter(|home| !home.trim().is_empty())
			.cloned()
	});

	ProjectPatch {
		id: fallback.id.clone(),
		description,
		language: present(&repo.language)
			.cloned()
			.unwrap_or_else(|| fallback.language.clone()),
		stars: repo.stargazers_count.or(fallback.stars),
		forks: repo.forks_count.or(fallback.forks),
		updated_at: repo.updated_at.clone().or_else(|| fallback.updated_at.clone()),
		repo_url: present(&repo.html_url)
			.cloned()
			.or_else(|| fallback.repo_url.clone()),
		live_url,
	}
}

impl ProjectPatch {
	fn apply_to(&self, project: &mut Project) {
		project.description = self.description.clone();
		project.language = self.language.clone();
		project.stars = self.stars;
		project.forks = self.forks;
		project.updated_at = self.updated_at.clone();
		project.repo_url = self.repo_url.clone();
		project.live_url = self.live_url.clone();
	}
}

/// Merges patches into `projects` by id in a single pass. Returns how many
/// projects were touched.
pub fn apply_patches(projects: &mut [Project], patches: &[ProjectPatch]) -> usize {
	let by_id: HashMap<&str, &ProjectPatch> =
		patches.iter().map(|p| (p.id.as_str(), p)).collect();

	let mut applied = 0;
	for project in projects.iter_mut() {
		if let Some(patch) = by_id.get(project.id.as_str()) {
			patch.apply_to(project);
			applied += 1;
		}
	}
	applied
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::featured_projects;

	fn assistant() -> Project {
		featured_projects().remove(0)
	}

	#[test]
	fn api_description_replaces_both_languages() {
		let repo = RepoDetails {
			description: Some("Live description".into()),
			..Default::default()
		};
		let patch = build_patch(&assistant(), &repo);
		assert_eq!(patch.description, Localized::uniform("Live description"));
	}

	#[test]
	fn absent_or_empty_description_keeps_fallback() {
		let fallback = assistant();
		for description in [None, Some(String::new())] {
			let repo = RepoDetails {
				description,
				..Default::default()
			};
			let patch = build_patch(&fallback, &repo);
			assert_eq!(patch.description, fallback.description);
		}
	}

	#[test]
	fn absent_counts_and_urls_keep_fallback() {
		let fallback = assistant();
		let patch = build_patch(&fallback, &RepoDetails::default());

		assert_eq!(patch.language, "Python");
		assert_eq!(patch.stars, Some(0));
		assert_eq!(patch.forks, Some(0));
		assert_eq!(patch.repo_url, fallback.repo_url);
		assert_eq!(patch.updated_at, None);
	}

	#[test]
	fn api_values_overwrite_counts() {
		let repo = RepoDetails {
			language: Some("Rust".into()),
			stargazers_count: Some(42),
			forks_count: Some(7),
			updated_at: Some("2025-03-05T10:20:30Z".into()),
			html_url: Some("https://github.com/FaYeest/renamed".into()),
			..Default::default()
		};
		let patch = build_patch(&assistant(), &repo);

		assert_eq!(patch.language, "Rust");
		assert_eq!(patch.stars, Some(42));
		assert_eq!(patch.forks, Some(7));
		assert_eq!(patch.updated_at.as_deref(), Some("2025-03-05T10:20:30Z"));
		assert_eq!(
			patch.repo_url.as_deref(),
			Some("https://github.com/FaYeest/renamed")
		);
	}

	#[test]
	fn explicit_live_url_wins_over_homepage() {
		let mut fallback = assistant();
		fallback.live_url = Some("https://fallback.example".into());
		let repo = RepoDetails {
			homepage: Some("https://homepage.example".into()),
			..Default::default()
		};
		assert_eq!(
			build_patch(&fallback, &repo).live_url.as_deref(),
			Some("https://fallback.example")
		);
	}

	#[test]
	fn homepage_used_only_when_not_blank() {
		let fallback = assistant();

		let repo = RepoDetails {
			homepage: Some("https://ninym.example".into()),
			..Default::default()
		};
		assert_eq!(
			build_patch(&fallback, &repo).live_url.as_deref(),
			Some("https://ninym.example")
		);

		let repo = RepoDetails {
			homepage: Some("   ".into()),
			..Default::default()
		};
		assert_eq!(build_patch(&fallback, &repo).live_url, None);
	}

	#[test]
	fn patches_merge_by_id_and_leave_others_untouched() {
		let mut projects = featured_projects();
		let untouched = projects[1].clone();
		let patch = build_patch(
			&projects[0],
			&RepoDetails {
				stargazers_count: Some(9),
				..Default::default()
			},
		);

		assert_eq!(apply_patches(&mut projects, &[patch]), 1);
		assert_eq!(projects[0].stars, Some(9));
		assert_eq!(projects[0].title, "Ninym Assistant");
		assert_eq!(projects[0].tags.len(), 4);
		assert_eq!(projects[1], untouched);
	}
}

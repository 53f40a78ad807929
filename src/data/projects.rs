//! Featured projects and the relations between them.

use std::collections::{HashMap, HashSet};

use crate::error::DataError;

use super::i18n::Lang;

/// Text carried in both UI languages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Localized {
	pub id: String,
	pub en: String,
}

impl Localized {
	pub fn new(id: impl Into<String>, en: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			en: en.into(),
		}
	}

	/// Same text for both languages.
	pub fn uniform(text: impl Into<String>) -> Self {
		let text = text.into();
		Self {
			id: text.clone(),
			en: text,
		}
	}

	pub fn get(&self, lang: Lang) -> &str {
		match lang {
			Lang::Id => &self.id,
			Lang::En => &self.en,
		}
	}
}

/// Where a project's canonical metadata comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProjectSource {
	#[default]
	Github,
	Product,
}

impl ProjectSource {
	pub fn label(self) -> &'static str {
		match self {
			ProjectSource::Github => "GitHub",
			ProjectSource::Product => "Product",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
	pub id: String,
	pub title: String,
	pub source: ProjectSource,
	/// `owner/name` on GitHub.
	pub repo_path: Option<String>,
	pub repo_url: Option<String>,
	pub live_url: Option<String>,
	pub role: String,
	pub description: Localized,
	pub language: String,
	pub stars: Option<u64>,
	pub forks: Option<u64>,
	/// ISO-8601 timestamp of the last push, as reported by GitHub.
	pub updated_at: Option<String>,
	pub tags: Vec<String>,
}

impl Project {
	pub fn is_github(&self) -> bool {
		self.source == ProjectSource::Github
	}

	/// Click-through target: live site first, then the repository.
	pub fn primary_url(&self) -> Option<&str> {
		non_empty(self.live_url.as_deref()).or_else(|| non_empty(self.repo_url.as_deref()))
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}

/// Undirected link between two projects.
#[derive(Clone, Debug, PartialEq)]
pub struct Relation {
	pub source: String,
	pub target: String,
	pub strength: f64,
	pub reason: Localized,
}

/// Caption shown under the graph for one relation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationCaption {
	pub key: String,
	pub title: String,
	pub reason: String,
}

/// Checks that every relation endpoint names a known project.
pub fn check_relations(projects: &[Project], relations: &[Relation]) -> Result<(), DataError> {
	let ids: HashSet<&str> = projects.iter().map(|p| p.id.as_str()).collect();
	for relation in relations {
		for end in [&relation.source, &relation.target] {
			if !ids.contains(end.as_str()) {
				return Err(DataError::UnknownProject {
					from: relation.source.clone(),
					to: relation.target.clone(),
					missing: end.clone(),
				});
			}
		}
	}
	Ok(())
}

/// Builds "A to B" captions with the reason in the requested language.
pub fn relation_captions(
	projects: &[Project],
	relations: &[Relation],
	lang: Lang,
) -> Vec<RelationCaption> {
	let titles: HashMap<&str, &str> = projects
		.iter()
		.map(|p| (p.id.as_str(), p.title.as_str()))
		.collect();
	let title_of = |id: &str| titles.get(id).copied().unwrap_or(id).to_string();

	relations
		.iter()
		.map(|relation| RelationCaption {
			key: format!("{}-{}", relation.source, relation.target),
			title: format!(
				"{} to {}",
				title_of(&relation.source),
				title_of(&relation.target)
			),
			reason: relation.reason.get(lang).to_string(),
		})
		.collect()
}

fn tags(values: &[&str]) -> Vec<String> {
	values.iter().map(|t| t.to_string()).collect()
}

/// Static fallback data rendered before the GitHub sync completes.
pub fn featured_projects() -> Vec<Project> {
	vec![
		Project {
			id: "ninym-assistant".into(),
			title: "Ninym Assistant".into(),
			source: ProjectSource::Github,
			repo_path: Some("FaYeest/ninym-assistant".into()),
			repo_url: Some("https://github.com/FaYeest/ninym-assistant".into()),
			live_url: None,
			role: "AI / Python Engineer".into(),
			description: Localized::new(
				"Hybrid AI assistant dengan local/cloud model switching, RAG memory, dan persona engine untuk percakapan yang adaptif.",
				"Hybrid AI assistant with local/cloud model switching, RAG memory, and persona engine for adaptive conversations.",
			),
			language: "Python".into(),
			stars: Some(0),
			forks: Some(0),
			updated_at: None,
			tags: tags(&["Python", "Ollama", "Groq", "RAG"]),
		},
		Project {
			id: "ninym-discord-anime-bot".into(),
			title: "Ninym Discord Anime Bot".into(),
			source: ProjectSource::Github,
			repo_path: Some("FaYeest/ninym-discord-anime-bot".into()),
			repo_url: Some("https://github.com/FaYeest/ninym-discord-anime-bot".into()),
			live_url: None,
			role: "Automation Engineer".into(),
			description: Localized::new(
				"Discord bot untuk jadwal anime, auto-search torrent, dan streaming control berbasis qBittorrent serta Peerflix.",
				"Discord bot for anime schedules, auto-search torrents, and streaming control based on qBittorrent and Peerflix.",
			),
			language: "Python".into(),
			stars: Some(0),
			forks: Some(0),
			updated_at: None,
			tags: tags(&["Python", "Discord Bot", "Automation", "Streaming"]),
		},
		Project {
			id: "arphatra".into(),
			title: "Arphatra".into(),
			source: ProjectSource::Product,
			repo_path: None,
			repo_url: None,
			live_url: Some("https://arphatra.web.app/".into()),
			role: "Full-Stack Engineer".into(),
			description: Localized::new(
				"Built and maintained web product end-to-end, mulai dari frontend architecture, backend integration, sampai deployment flow.",
				"Built and maintained web product end-to-end, from frontend architecture and backend integration to deployment flow.",
			),
			language: "Full Stack".into(),
			stars: None,
			forks: None,
			updated_at: None,
			tags: tags(&["React", "Firebase", "Product Engineering"]),
		},
	]
}

pub fn project_relations() -> Vec<Relation> {
	vec![
		Relation {
			source: "ninym-assistant".into(),
			target: "ninym-discord-anime-bot".into(),
			strength: 3.0,
			reason: Localized::new(
				"Keduanya berbasis Python dan berada dalam satu ecosystem automation + AI tooling.",
				"Both are Python-based and reside within the same automation + AI tooling ecosystem.",
			),
		},
		Relation {
			source: "ninym-assistant".into(),
			target: "arphatra".into(),
			strength: 2.0,
			reason: Localized::new(
				"Relasi kuat di backend thinking, integrasi service, dan product mindset engineering.",
				"Strong relationship in backend thinking, service integration, and product mindset engineering.",
			),
		},
		Relation {
			source: "ninym-discord-anime-bot".into(),
			target: "arphatra".into(),
			strength: 2.0,
			reason: Localized::new(
				"Sama-sama menonjolkan flow automation, orchestration, dan delivery yang usable.",
				"Both highlight automation flows, orchestration, and usable delivery.",
			),
		},
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn seed_relations_reference_known_projects() {
		assert_eq!(check_relations(&featured_projects(), &project_relations()), Ok(()));
	}

	#[test]
	fn dangling_relation_is_reported() {
		let mut relations = project_relations();
		relations.push(Relation {
			source: "arphatra".into(),
			target: "ghost".into(),
			strength: 1.0,
			reason: Localized::uniform("?"),
		});

		let err = check_relations(&featured_projects(), &relations).unwrap_err();
		assert_eq!(
			err,
			DataError::UnknownProject {
				from: "arphatra".into(),
				to: "ghost".into(),
				missing: "ghost".into(),
			}
		);
	}

	#[test]
	fn caption_names_both_projects_in_chosen_language() {
		let captions = relation_captions(&featured_projects(), &project_relations(), Lang::En);
		let caption = captions
			.iter()
			.find(|c| c.key == "ninym-assistant-arphatra")
			.unwrap();

		assert_eq!(caption.title, "Ninym Assistant to Arphatra");
		assert_eq!(
			caption.reason,
			"Strong relationship in backend thinking, service integration, and product mindset engineering."
		);

		let captions = relation_captions(&featured_projects(), &project_relations(), Lang::Id);
		assert!(captions[1].reason.starts_with("Relasi kuat"));
	}

	#[test]
	fn caption_falls_back_to_raw_id() {
		let relations = vec![Relation {
			source: "arphatra".into(),
			target: "ghost".into(),
			strength: 1.0,
			reason: Localized::uniform("?"),
		}];
		let captions = relation_captions(&featured_projects(), &relations, Lang::Id);
		assert_eq!(captions[0].title, "Arphatra to ghost");
	}

	#[test]
	fn primary_url_prefers_live_site() {
		let projects = featured_projects();
		assert_eq!(projects[2].primary_url(), Some("https://arphatra.web.app/"));
		assert_eq!(
			projects[0].primary_url(),
			Some("https://github.com/FaYeest/ninym-assistant")
		);

		let mut bare = projects[2].clone();
		bare.live_url = Some(String::new());
		assert_eq!(bare.primary_url(), None);
	}
}

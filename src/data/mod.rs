//! Static seed content: profile, projects, relations and UI strings.

mod i18n;
mod profile;
mod projects;

pub use i18n::{Lang, Translations};
pub use profile::profile;
pub use projects::{
	Localized, Project, ProjectSource, Relation, check_relations,
	featured_projects, project_relations, relation_captions,
};

use std::collections::HashSet;

use log::warn;

use crate::data::{Project, ProjectSource, Relation};

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub title: String,
	pub role: String,
	pub source: ProjectSource,
	pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub strength: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// One node per project, one link per relation whose ends both exist.
	pub fn from_projects(projects: &[Project], relations: &[Relation]) -> Self {
		let nodes: Vec<GraphNode> = projects
			.iter()
			.map(|project| GraphNode {
				id: project.id.clone(),
				title: project.title.clone(),
				role: project.role.clone(),
				source: project.source,
				url: project.primary_url().map(str::to_owned),
			})
			.collect();

		let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
		let links = relations
			.iter()
			.filter(|relation| {
				let known =
					ids.contains(relation.source.as_str()) && ids.contains(relation.target.as_str());
				if !known {
					warn!(
						"Skipping relation {} -> {}: unknown project",
						relation.source, relation.target
					);
				}
				known
			})
			.map(|relation| GraphLink {
				source: relation.source.clone(),
				target: relation.target.clone(),
				strength: relation.strength,
			})
			.collect();

		GraphData { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{Localized, featured_projects, project_relations};

	#[test]
	fn builds_one_node_per_project_and_one_link_per_relation() {
		let data = GraphData::from_projects(&featured_projects(), &project_relations());
		assert_eq!(data.nodes.len(), 3);
		assert_eq!(data.links.len(), 3);

		let arphatra = data.nodes.iter().find(|n| n.id == "arphatra").unwrap();
		assert_eq!(arphatra.source, ProjectSource::Product);
		assert_eq!(arphatra.url.as_deref(), Some("https://arphatra.web.app/"));
	}

	#[test]
	fn dangling_relations_are_dropped() {
		let mut relations = project_relations();
		relations.push(Relation {
			source: "arphatra".into(),
			target: "ghost".into(),
			strength: 1.0,
			reason: Localized::uniform("?"),
		});
		let data = GraphData::from_projects(&featured_projects(), &relations);
		assert_eq!(data.links.len(), 3);
	}
}

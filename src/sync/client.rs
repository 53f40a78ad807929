use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::consts::{GITHUB_ACCEPT, GITHUB_API_BASE};
use crate::error::SyncError;

/// Subset of `GET /repos/{owner}/{repo}` the portfolio uses.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RepoDetails {
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub language: Option<String>,
	#[serde(default)]
	pub stargazers_count: Option<u64>,
	#[serde(default)]
	pub forks_count: Option<u64>,
	#[serde(default)]
	pub updated_at: Option<String>,
	#[serde(default)]
	pub html_url: Option<String>,
	#[serde(default)]
	pub homepage: Option<String>,
}

/// Anything that can look up repository metadata by `owner/name`.
#[allow(async_fn_in_trait)]
pub trait RepoSource {
	async fn fetch_repo(&self, repo_path: &str) -> Result<RepoDetails, SyncError>;
}

/// Unauthenticated client for the public GitHub REST API.
#[derive(Clone, Debug)]
pub struct GithubClient {
	http: reqwest::Client,
	api_base: String,
}

impl GithubClient {
	pub fn new() -> Self {
		Self::with_base(GITHUB_API_BASE)
	}

	pub fn with_base(api_base: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			api_base: api_base.into().trim_end_matches('/').to_string(),
		}
	}

	pub fn repo_url(&self, repo_path: &str) -> String {
		format!("{}/repos/{}", self.api_base, repo_path)
	}
}

impl Default for GithubClient {
	fn default() -> Self {
		Self::new()
	}
}

impl RepoSource for GithubClient {
	async fn fetch_repo(&self, repo_path: &str) -> Result<RepoDetails, SyncError> {
		let response = self
			.http
			.get(self.repo_url(repo_path))
			.header(ACCEPT, GITHUB_ACCEPT)
			.send()
			.await?;

		let status = response.status();
		if !status.is_success() {
			return Err(SyncError::Status {
				status: status.as_u16(),
			});
		}

		Ok(response.json::<RepoDetails>().await?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repo_url_joins_base_and_path() {
		let client = GithubClient::with_base("https://example.test/");
		assert_eq!(
			client.repo_url("FaYeest/ninym-assistant"),
			"https://example.test/repos/FaYeest/ninym-assistant"
		);
		assert_eq!(
			GithubClient::new().repo_url("a/b"),
			"https://api.github.com/repos/a/b"
		);
	}

	#[test]
	fn parses_api_payload_and_ignores_extra_fields() {
		let body = r#"{
			"id": 1,
			"full_name": "FaYeest/ninym-assistant",
			"description": "Hybrid AI assistant",
			"language": "Python",
			"stargazers_count": 12,
			"forks_count": 3,
			"updated_at": "2025-03-05T10:20:30Z",
			"html_url": "https://github.com/FaYeest/ninym-assistant",
			"homepage": null
		}"#;

		let repo: RepoDetails = serde_json::from_str(body).unwrap();
		assert_eq!(repo.description.as_deref(), Some("Hybrid AI assistant"));
		assert_eq!(repo.stargazers_count, Some(12));
		assert_eq!(repo.forks_count, Some(3));
		assert_eq!(repo.homepage, None);
	}

	#[test]
	fn missing_fields_default_to_none() {
		let repo: RepoDetails = serde_json::from_str("{}").unwrap();
		assert_eq!(repo, RepoDetails::default());
	}
}

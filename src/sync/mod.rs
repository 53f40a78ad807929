//! Live GitHub metadata for the featured projects.
//!
//! Every GitHub-sourced project gets one request. Requests run concurrently
//! and all of them settle before the outcome is classified; a failed request
//! never cancels the others. Each result stays paired with the id of the
//! project it was issued for.

mod client;
mod guard;
mod patch;
mod status;

use futures::future::join_all;
use log::{debug, warn};

use crate::data::Project;
use crate::error::SyncError;

pub use client::{GithubClient, RepoSource};
pub use guard::CommitGuard;
pub use patch::{ProjectPatch, apply_patches, build_patch};
pub use status::SyncStatus;

/// Outcome of one settled batch of fetches.
#[derive(Debug)]
pub struct SyncReport {
	pub patches: Vec<ProjectPatch>,
	pub failures: Vec<(String, SyncError)>,
	pub attempted: usize,
}

impl SyncReport {
	pub fn succeeded(&self) -> usize {
		self.patches.len()
	}

	pub fn status(&self) -> SyncStatus {
		SyncStatus::from_counts(self.succeeded(), self.attempted)
	}
}

/// A page load syncs once: only from `Idle`, and only when some project
/// is GitHub-sourced.
pub fn should_start(status: SyncStatus, projects: &[Project]) -> bool {
	status == SyncStatus::Idle && projects.iter().any(Project::is_github)
}

/// Applies a settled report unless `guard` was cancelled first. Returns the
/// status to show, or `None` when the results were dropped.
pub fn commit(
	report: &SyncReport,
	guard: &CommitGuard,
	projects: &mut [Project],
) -> Option<SyncStatus> {
	if !guard.is_live() {
		debug!("Discarding sync results after teardown");
		return None;
	}
	let applied = apply_patches(projects, &report.patches);
	debug!("Applied {} of {} patches", applied, report.patches.len());
	Some(report.status())
}

async fn fetch_one<S: RepoSource>(
	source: &S,
	project: &Project,
) -> (String, Result<ProjectPatch, SyncError>) {
	let result = match project.repo_path.as_deref() {
		Some(path) => source
			.fetch_repo(path)
			.await
			.map(|repo| build_patch(project, &repo)),
		None => Err(SyncError::MissingRepoPath {
			id: project.id.clone(),
		}),
	};
	(project.id.clone(), result)
}

/// Fetches metadata for every GitHub-sourced project.
///
/// Returns `None` without issuing any request when no project is
/// GitHub-sourced.
pub async fn sync_projects<S: RepoSource>(source: &S, projects: &[Project]) -> Option<SyncReport> {
	let github: Vec<&Project> = projects.iter().filter(|p| p.is_github()).collect();
	if github.is_empty() {
		return None;
	}

	debug!("Syncing {} GitHub projects", github.len());
	let settled = join_all(github.iter().map(|project| fetch_one(source, project))).await;

	let mut report = SyncReport {
		patches: Vec::new(),
		failures: Vec::new(),
		attempted: github.len(),
	};
	for (id, result) in settled {
		match result {
			Ok(patch) => report.patches.push(patch),
			Err(err) => {
				warn!("Sync failed for {}: {}", id, err);
				report.failures.push((id, err));
			}
		}
	}

	debug!(
		"Sync settled: {}/{} succeeded",
		report.succeeded(),
		report.attempted
	);
	Some(report)
}

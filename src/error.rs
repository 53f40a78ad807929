//! Error types shared across the app.

use thiserror::Error;

/// Failure of a single repository metadata fetch.
#[derive(Debug, Error)]
pub enum SyncError {
	/// Network failure or an undecodable body.
	#[error("transport error: {0}")]
	Transport(#[from] reqwest::Error),

	/// The API answered with a non-2xx status.
	#[error("GitHub API error: {status}")]
	Status { status: u16 },

	/// A GitHub-sourced project without a repository path.
	#[error("project {id} has no repository path")]
	MissingRepoPath { id: String },
}

/// Failure while reading or writing the persisted preference.
#[derive(Debug, Error)]
pub enum StorageError {
	#[error("local storage is unavailable")]
	Unavailable,

	#[error("storage rejected the operation: {0}")]
	Rejected(String),
}

/// Inconsistency in the static seed data.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
	#[error("relation {from} -> {to} references unknown project {missing}")]
	UnknownProject {
		from: String,
		to: String,
		missing: String,
	},
}

//! Application state shared through Leptos context.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, error, info};

use crate::data::{Lang, Project, Relation, check_relations, featured_projects, project_relations};
use crate::sync::{CommitGuard, GithubClient, SyncStatus, commit, should_start, sync_projects};
use crate::theme::{self, BrowserStorage, Theme};

#[derive(Clone, Copy)]
pub struct AppState {
	pub lang: RwSignal<Lang>,
	pub theme: RwSignal<Theme>,
	pub projects: RwSignal<Vec<Project>>,
	pub relations: StoredValue<Vec<Relation>>,
	pub sync_status: RwSignal<SyncStatus>,
}

impl AppState {
	/// Seeds projects from static data and reads the theme from storage,
	/// falling back to the OS preference.
	pub fn init() -> Self {
		let projects = featured_projects();
		let relations = project_relations();
		if let Err(err) = check_relations(&projects, &relations) {
			error!("Invalid seed data: {}", err);
		}

		let theme = theme::initial_theme(&BrowserStorage, theme::os_prefers_dark());
		debug!("Initial theme: {}", theme.as_str());

		Self {
			lang: RwSignal::new(Lang::default()),
			theme: RwSignal::new(theme),
			projects: RwSignal::new(projects),
			relations: StoredValue::new(relations),
			sync_status: RwSignal::new(SyncStatus::Idle),
		}
	}

	pub fn toggle_lang(&self) {
		self.lang.update(|lang| *lang = lang.toggled());
	}

	pub fn toggle_theme(&self) {
		self.theme.update(|theme| *theme = theme.toggled());
	}

	pub fn t(&self) -> &'static crate::data::Translations {
		self.lang.get().strings()
	}

	/// Persists and applies the theme whenever it changes, starting with the
	/// initial value.
	pub fn install_theme_effect(&self) {
		let theme = self.theme;
		Effect::new(move |_| {
			let current = theme.get();
			theme::apply_to_document(current);
			theme::persist(&BrowserStorage, current);
		});
	}

	fn advance_sync(&self, next: SyncStatus) {
		let current = self.sync_status.get_untracked();
		if current.can_advance_to(next) {
			self.sync_status.set(next);
		} else {
			debug!("Ignoring sync transition {:?} -> {:?}", current, next);
		}
	}

	/// Fetches live metadata once per page load. Results arriving after the
	/// owner is cleaned up are dropped.
	pub fn start_sync(&self) {
		let seed = self.projects.get_untracked();
		if !should_start(self.sync_status.get_untracked(), &seed) {
			return;
		}

		let guard = CommitGuard::new();
		on_cleanup({
			let guard = guard.clone();
			move || guard.cancel()
		});

		self.advance_sync(SyncStatus::Loading);
		let state = *self;
		spawn_local(async move {
			let client = GithubClient::new();
			let Some(report) = sync_projects(&client, &seed).await else {
				return;
			};

			let mut status = None;
			state.projects.maybe_update(|projects| {
				status = commit(&report, &guard, projects);
				status.is_some()
			});
			let Some(status) = status else {
				return;
			};
			info!(
				"GitHub sync finished: {:?} ({}/{})",
				status,
				report.succeeded(),
				report.attempted
			);
			state.advance_sync(status);
		});
	}
}

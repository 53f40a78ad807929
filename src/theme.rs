//! Light/dark theme: initial choice, persistence, and the document marker.

use log::warn;

use crate::consts::{DARK_CLASS, DARK_SCHEME_QUERY, THEME_STORAGE_KEY};
use crate::error::StorageError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	pub fn is_dark(self) -> bool {
		self == Theme::Dark
	}

	pub fn toggled(self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}
}

/// Key/value persistence for the theme preference.
pub trait PreferenceStore {
	fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
	fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
	fn storage() -> Result<web_sys::Storage, StorageError> {
		web_sys::window()
			.ok_or(StorageError::Unavailable)?
			.local_storage()
			.map_err(|e| StorageError::Rejected(format!("{e:?}")))?
			.ok_or(StorageError::Unavailable)
	}
}

impl PreferenceStore for BrowserStorage {
	fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
		Self::storage()?
			.get_item(key)
			.map_err(|e| StorageError::Rejected(format!("{e:?}")))
	}

	fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
		Self::storage()?
			.set_item(key, value)
			.map_err(|e| StorageError::Rejected(format!("{e:?}")))
	}
}

/// Stored `"dark"` wins, any other stored value means light, and with
/// nothing stored the OS preference decides.
pub fn initial_theme(store: &impl PreferenceStore, prefers_dark: bool) -> Theme {
	match store.load(THEME_STORAGE_KEY) {
		Ok(Some(value)) if value == "dark" => Theme::Dark,
		Ok(Some(_)) => Theme::Light,
		Ok(None) => from_os(prefers_dark),
		Err(err) => {
			warn!("Could not read theme preference: {}", err);
			from_os(prefers_dark)
		}
	}
}

fn from_os(prefers_dark: bool) -> Theme {
	if prefers_dark { Theme::Dark } else { Theme::Light }
}

pub fn persist(store: &impl PreferenceStore, theme: Theme) {
	if let Err(err) = store.save(THEME_STORAGE_KEY, theme.as_str()) {
		warn!("Could not persist theme preference: {}", err);
	}
}

/// Whether the OS asks for a dark color scheme.
pub fn os_prefers_dark() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
		.is_some_and(|query| query.matches())
}

/// Toggles the `dark` class on `<html>`, which the stylesheet keys off.
pub fn apply_to_document(theme: Theme) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
		warn!("Could not apply theme class: {:?}", e);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;

	#[derive(Debug, Default)]
	struct MemoryStore {
		entries: RefCell<Vec<(String, String)>>,
	}

	impl PreferenceStore for MemoryStore {
		fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
			Ok(self
				.entries
				.borrow()
				.iter()
				.find(|(k, _)| k == key)
				.map(|(_, v)| v.clone()))
		}

		fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
			let mut entries = self.entries.borrow_mut();
			match entries.iter_mut().find(|(k, _)| k == key) {
				Some(entry) => entry.1 = value.to_string(),
				None => entries.push((key.to_string(), value.to_string())),
			}
			Ok(())
		}
	}

	#[test]
	fn defaults_to_os_preference_when_nothing_stored() {
		let store = MemoryStore::default();
		assert_eq!(initial_theme(&store, true), Theme::Dark);
		assert_eq!(initial_theme(&store, false), Theme::Light);
	}

	#[test]
	fn stored_choice_survives_reload() {
		let store = MemoryStore::default();
		persist(&store, Theme::Dark);
		assert_eq!(initial_theme(&store, false), Theme::Dark);

		persist(&store, Theme::Light);
		assert_eq!(initial_theme(&store, true), Theme::Light);
		assert_eq!(
			store.load(THEME_STORAGE_KEY).unwrap().as_deref(),
			Some("light")
		);
	}

	#[test]
	fn unknown_stored_value_means_light() {
		let store = MemoryStore::default();
		store.save(THEME_STORAGE_KEY, "sepia").unwrap();
		assert_eq!(initial_theme(&store, true), Theme::Light);
	}

	#[test]
	fn toggle_round_trips() {
		assert_eq!(Theme::Light.toggled(), Theme::Dark);
		assert_eq!(Theme::Dark.toggled().as_str(), "light");
	}
}

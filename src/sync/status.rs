use crate::data::Translations;

/// Aggregate outcome of the metadata fetches for one page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
	#[default]
	Idle,
	Loading,
	Ready,
	Partial,
	Error,
}

impl SyncStatus {
	/// Classifies `succeeded` out of `attempted` fetches. `attempted` must be non-zero.
	pub fn from_counts(succeeded: usize, attempted: usize) -> Self {
		if succeeded == attempted {
			SyncStatus::Ready
		} else if succeeded > 0 {
			SyncStatus::Partial
		} else {
			SyncStatus::Error
		}
	}

	pub fn is_terminal(self) -> bool {
		matches!(
			self,
			SyncStatus::Ready | SyncStatus::Partial | SyncStatus::Error
		)
	}

	/// Only idle -> loading -> terminal is allowed.
	pub fn can_advance_to(self, next: SyncStatus) -> bool {
		match self {
			SyncStatus::Idle => next == SyncStatus::Loading,
			SyncStatus::Loading => next.is_terminal(),
			_ => false,
		}
	}

	pub fn message(self, t: &Translations) -> &'static str {
		match self {
			SyncStatus::Idle => t.sync_idle,
			SyncStatus::Loading => t.sync_loading,
			SyncStatus::Ready => t.sync_ready,
			SyncStatus::Partial => t.sync_partial,
			SyncStatus::Error => t.sync_error,
		}
	}

	/// Class used by the status badge.
	pub fn css_class(self) -> &'static str {
		match self {
			SyncStatus::Loading => "sync-badge sync-badge--loading",
			SyncStatus::Error => "sync-badge sync-badge--error",
			_ => "sync-badge",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::Lang;

	#[test]
	fn counts_classify_outcome() {
		assert_eq!(SyncStatus::from_counts(2, 2), SyncStatus::Ready);
		assert_eq!(SyncStatus::from_counts(1, 2), SyncStatus::Partial);
		assert_eq!(SyncStatus::from_counts(0, 2), SyncStatus::Error);
		assert_eq!(SyncStatus::from_counts(1, 1), SyncStatus::Ready);
	}

	#[test]
	fn transitions_never_reverse() {
		assert!(SyncStatus::Idle.can_advance_to(SyncStatus::Loading));
		assert!(!SyncStatus::Idle.can_advance_to(SyncStatus::Ready));
		assert!(SyncStatus::Loading.can_advance_to(SyncStatus::Partial));
		assert!(!SyncStatus::Loading.can_advance_to(SyncStatus::Idle));
		assert!(!SyncStatus::Ready.can_advance_to(SyncStatus::Loading));
		assert!(!SyncStatus::Error.can_advance_to(SyncStatus::Ready));
	}

	#[test]
	fn message_is_localized() {
		assert_eq!(
			SyncStatus::Partial.message(Lang::En.strings()),
			"Partial data synchronized."
		);
		assert_eq!(
			SyncStatus::Loading.message(Lang::Id.strings()),
			"Syncing data dari GitHub..."
		);
	}
}

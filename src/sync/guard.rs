use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token checked before sync results are committed.
///
/// Clones share the flag. The owning component cancels it on cleanup so a
/// fetch that finishes after teardown is dropped instead of applied.
#[derive(Clone, Debug)]
pub struct CommitGuard {
	live: Arc<AtomicBool>,
}

impl CommitGuard {
	pub fn new() -> Self {
		Self {
			live: Arc::new(AtomicBool::new(true)),
		}
	}

	pub fn cancel(&self) {
		self.live.store(false, Ordering::Release);
	}

	pub fn is_live(&self) -> bool {
		self.live.load(Ordering::Acquire)
	}
}

impl Default for CommitGuard {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn cancel_is_seen_by_clones() {
		let guard = CommitGuard::new();
		let task_side = guard.clone();
		assert!(task_side.is_live());

		guard.cancel();
		assert!(!task_side.is_live());
	}
}

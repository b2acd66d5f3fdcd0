use serde::Deserialize;

/// Tag attached to every catalog request so responses can be matched to the
/// request that produced them.
pub type RequestId = u64;

/// What to do with a response that belongs to a superseded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
	/// Only the response to the latest issued request is applied.
	#[default]
	Discard,
	/// Every response is applied in arrival order; the last one to land wins.
	LastArrivalWins,
}

/// Issues request ids for one kind of query and tracks which one is current.
#[derive(Debug, Default)]
pub(crate) struct RequestTracker {
	next_id: RequestId,
	current: Option<RequestId>,
	pending: Option<RequestId>,
	/// Ids at or below this were invalidated and are never applied.
	floor: RequestId,
}

impl RequestTracker {
	pub(crate) fn issue(&mut self) -> RequestId {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		self.current = Some(id);
		self.pending = Some(id);
		id
	}

	/// Forget the current request; whatever it returns is stale from now on.
	pub(crate) fn invalidate(&mut self) {
		self.current = None;
		self.pending = None;
		self.floor = self.next_id;
	}

	pub(crate) fn matches_latest(&self, id: RequestId) -> bool {
		Some(id) == self.current
	}

	/// Record that `id` has answered, returning whether it was the latest request.
	pub(crate) fn complete(&mut self, id: RequestId) -> bool {
		if self.pending == Some(id) {
			self.pending = None;
		}
		self.matches_latest(id)
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.pending.is_some()
	}

	/// Invalidated requests are rejected under every policy; the policy only
	/// decides between requests that are still live.
	pub(crate) fn accepts(&self, id: RequestId, policy: StalePolicy) -> bool {
		if id <= self.floor {
			return false;
		}
		match policy {
			StalePolicy::Discard => self.matches_latest(id),
			StalePolicy::LastArrivalWins => true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_increase_monotonically() {
		let mut tracker = RequestTracker::default();
		let first = tracker.issue();
		let second = tracker.issue();
		assert!(second > first);
		assert!(tracker.matches_latest(second));
		assert!(!tracker.matches_latest(first));
	}

	#[test]
	fn only_the_latest_completion_clears_in_flight() {
		let mut tracker = RequestTracker::default();
		let first = tracker.issue();
		let second = tracker.issue();

		assert!(!tracker.complete(first));
		assert!(tracker.is_in_flight());
		assert!(tracker.complete(second));
		assert!(!tracker.is_in_flight());
	}

	#[test]
	fn invalidate_makes_everything_stale() {
		let mut tracker = RequestTracker::default();
		let id = tracker.issue();
		tracker.invalidate();

		assert!(!tracker.is_in_flight());
		assert!(!tracker.accepts(id, StalePolicy::Discard));
		assert!(!tracker.accepts(id, StalePolicy::LastArrivalWins));
	}

	#[test]
	fn requests_after_an_invalidation_are_live_again() {
		let mut tracker = RequestTracker::default();
		let old = tracker.issue();
		tracker.invalidate();
		let first = tracker.issue();
		let second = tracker.issue();

		assert!(!tracker.accepts(old, StalePolicy::LastArrivalWins));
		assert!(tracker.accepts(first, StalePolicy::LastArrivalWins));
		assert!(tracker.accepts(second, StalePolicy::LastArrivalWins));
		assert!(!tracker.accepts(first, StalePolicy::Discard));
	}
}

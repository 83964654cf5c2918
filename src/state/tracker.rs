/// Sequence bookkeeping for one endpoint.
///
/// Requests receive increasing ids. A response is applied only when its id is
/// newer than every response already settled, so a slow response can never
/// overwrite the result of a request issued after it.
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
	next_id: u64,
	latest_settled: Option<u64>,
}

impl RequestTracker {
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocate the id for a new request.
	pub fn issue(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		self.next_id
	}

	/// Id of the most recently issued request, if any.
	pub fn latest_issued(&self) -> Option<u64> {
		(self.next_id > 0).then_some(self.next_id)
	}

	/// Whether `id` belongs to the most recently issued request.
	pub fn is_latest(&self, id: u64) -> bool {
		self.latest_issued() == Some(id)
	}

	/// Record a completed response and report whether it is current.
	///
	/// Returns `false` for responses older than one already settled.
	pub fn settle(&mut self, id: u64) -> bool {
		if self.latest_settled.is_some_and(|settled| id <= settled) {
			return false;
		}
		self.latest_settled = Some(id);
		true
	}

	/// Whether the latest issued request is still waiting for a response.
	pub fn has_pending(&self) -> bool {
		match (self.latest_issued(), self.latest_settled) {
			(None, _) => false,
			(Some(issued), Some(settled)) => settled < issued,
			(Some(_), None) => true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_increase_monotonically() {
		let mut tracker = RequestTracker::new();
		assert_eq!(tracker.latest_issued(), None);
		assert_eq!(tracker.issue(), 1);
		assert_eq!(tracker.issue(), 2);
		assert!(tracker.is_latest(2));
		assert!(!tracker.is_latest(1));
	}

	#[test]
	fn older_responses_are_rejected_after_newer_settle() {
		let mut tracker = RequestTracker::new();
		let first = tracker.issue();
		let second = tracker.issue();

		assert!(tracker.settle(second));
		assert!(!tracker.settle(first));
		assert!(!tracker.has_pending());
	}

	#[test]
	fn older_response_arriving_first_is_still_applied() {
		let mut tracker = RequestTracker::new();
		let first = tracker.issue();
		let second = tracker.issue();

		assert!(tracker.settle(first));
		assert!(tracker.has_pending());
		assert!(tracker.settle(second));
		assert!(!tracker.has_pending());
	}
}

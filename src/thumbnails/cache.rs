use std::collections::HashMap;

/// Maximum number of thumbnails kept in memory.
pub(crate) const CACHE_CAPACITY: usize = 32;

/// Least-recently-used cache of decoded thumbnails keyed by image URL.
///
/// Only successful decodes are kept; a failed download is retried the next
/// time its URL is requested.
pub(crate) struct ThumbnailCache<V> {
	/// Map from URL to (order, value).
	entries: HashMap<String, (u64, V)>,
	/// Higher is more recent.
	order: u64,
	capacity: usize,
}

impl<V: Clone> ThumbnailCache<V> {
	pub(crate) fn new(capacity: usize) -> Self {
		Self {
			entries: HashMap::with_capacity(capacity),
			order: 0,
			capacity,
		}
	}

	pub(crate) fn get(&mut self, url: &str) -> Option<V> {
		let (order, value) = self.entries.get_mut(url)?;
		self.order += 1;
		*order = self.order;
		Some(value.clone())
	}

	pub(crate) fn insert(&mut self, url: String, value: V) {
		if self.entries.len() >= self.capacity
			&& !self.entries.contains_key(&url)
			&& let Some(oldest) = self
				.entries
				.iter()
				.min_by_key(|(_, (order, _))| *order)
				.map(|(key, _)| key.clone())
		{
			self.entries.remove(&oldest);
		}

		self.order += 1;
		self.entries.insert(url, (self.order, value));
	}

	/// Keep `result` if it succeeded. Failures are never cached.
	pub(crate) fn remember(&mut self, url: &str, result: &Result<V, String>) {
		if let Ok(value) = result {
			self.insert(url.to_string(), value.clone());
		}
	}

	#[cfg(test)]
	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}
}

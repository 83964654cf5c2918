use std::collections::HashSet;

use crate::api::Collection;

/// Reduce a collection search response to the suggestions shown to the user.
///
/// Titles are compared in lowercase: the first occurrence of each title is
/// kept (with its original casing) and later duplicates are dropped. Only
/// titles containing `query` case-insensitively survive. Input order is
/// preserved.
#[must_use]
pub fn filter_suggestions(query: &str, collections: Vec<Collection>) -> Vec<Collection> {
	let needle = query.to_lowercase();
	let mut seen = HashSet::new();

	collections
		.into_iter()
		.filter(|collection| {
			let title = collection.title.to_lowercase();
			let matches = title.contains(&needle);
			seen.insert(title) && matches
		})
		.collect()
}

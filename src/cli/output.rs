use anyhow::Result;
use picfind::SearchOutcome;
use serde_json::json;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	println!("{}", format_plain(outcome));
}

fn format_plain(outcome: &SearchOutcome) -> String {
	if !outcome.accepted {
		return format!("Search cancelled (query: '{}')", outcome.query);
	}

	match outcome.selected_photo() {
		Some(photo) => photo.share_url().to_string(),
		None => "No selection".to_string(),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = match outcome.selected_photo() {
		Some(photo) => json!({
			"id": photo.id,
			"url": photo.share_url(),
			"thumbnail": photo.thumbnail_url(),
			"owner": photo.owner_name(),
			"description": photo.caption(),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

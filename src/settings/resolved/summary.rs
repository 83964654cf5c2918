use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  Access key: {}", mask_key(&config.access_key));
	println!("  Base URL: {}", config.base_url);
	match config.timeout_secs {
		Some(secs) => println!("  Request timeout: {secs}s"),
		None => println!("  Request timeout: none"),
	}
	println!("  UI theme: {}", config.theme);
	if let Some(title) = &config.input_title {
		println!("  Prompt title: {title}");
	}
	if !config.initial_query.is_empty() {
		println!("  Initial query: {}", config.initial_query);
	}
	println!("  Show logs: {}", bool_to_word(config.show_logs));
	println!("  Log level: {}", config.log_level);
	match config.startup_loading_timeout() {
		Some(timeout) => println!("  Startup loading timeout: {}ms", timeout.as_millis()),
		None => println!("  Startup loading timeout: disabled"),
	}
}

/// Keep the last four characters of the key visible.
fn mask_key(key: &str) -> String {
	let count = key.chars().count();
	if count <= 4 {
		return "*".repeat(count);
	}
	let tail: String = key.chars().skip(count - 4).collect();
	format!("{}{tail}", "*".repeat(count - 4))
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::super::sample;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn key_is_masked_except_tail() {
		assert_eq!(mask_key("abcdef123456"), "********3456");
		assert_eq!(mask_key("abc"), "***");
		assert_eq!(mask_key(""), "");
	}

	#[test]
	fn summary_prints_without_panic() {
		let mut config = sample();
		config.input_title = Some("Title".into());
		config.initial_query = "foo".into();
		config.timeout_secs = Some(5);
		print_summary(&config);
	}
}

//! Diagnostic channel.
//!
//! Records go through the `log` facade into `tui-logger`. Its own
//! `tui-logger::move_events` thread moves them into the widget history, so the
//! frame loop has nothing to drain. Nothing is written to the terminal
//! directly, so logging never tears the UI.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install `tui-logger` as the global logger. Later calls are no-ops.
pub fn initialize(level: LevelFilter) {
	INIT.call_once(|| {
		if tui_logger::init_logger(level).is_ok() {
			tui_logger::set_default_level(level);
		}
	});
}

/// Parse a level name such as `info` or `debug`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
	value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn repeated_initialization_keeps_logging_usable() {
		initialize(LevelFilter::Debug);
		initialize(LevelFilter::Trace);
		log::info!(target: "picfind::logging", "logger installed");
		assert!(log::max_level() >= LevelFilter::Debug);
	}

	#[test]
	fn level_names_parse_case_insensitively() {
		assert_eq!(parse_level("DEBUG"), Some(LevelFilter::Debug));
		assert_eq!(parse_level(" warn "), Some(LevelFilter::Warn));
		assert_eq!(parse_level("off"), Some(LevelFilter::Off));
		assert_eq!(parse_level("loud"), None);
	}
}

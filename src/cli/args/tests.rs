use clap::{CommandFactory, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn defaults_without_arguments() {
	let parsed = CliArgs::try_parse_from(["picfind"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.config.is_empty());
	assert!(!parsed.show_logs);
	assert_eq!(parsed.timeout_secs, None);
}

#[test]
fn search_and_api_flags_parse() {
	let parsed = CliArgs::try_parse_from([
		"picfind",
		"-k",
		"secret",
		"--base-url",
		"http://localhost:8080",
		"--timeout",
		"5",
		"-q",
		"mountains",
		"--theme",
		"slate",
		"--show-logs",
		"-o",
		"json",
		"-c",
		"a.toml",
		"-c",
		"b.toml",
	])
	.expect("parses");

	assert_eq!(parsed.access_key.as_deref(), Some("secret"));
	assert_eq!(parsed.base_url.as_deref(), Some("http://localhost:8080"));
	assert_eq!(parsed.timeout_secs, Some(5));
	assert_eq!(parsed.initial_query.as_deref(), Some("mountains"));
	assert_eq!(parsed.theme.as_deref(), Some("slate"));
	assert!(parsed.show_logs);
	assert_eq!(parsed.output, OutputFormat::Json);
	assert_eq!(parsed.config.len(), 2);
}

#[test]
fn non_numeric_timeout_is_rejected() {
	assert!(CliArgs::try_parse_from(["picfind", "--timeout", "soon"]).is_err());
}

#[test]
fn access_key_flag_does_not_read_the_environment() {
	let command = CliArgs::command();
	let access_key = command
		.get_arguments()
		.find(|arg| arg.get_id() == "access_key")
		.expect("access_key argument");
	assert!(access_key.get_env().is_none());
}

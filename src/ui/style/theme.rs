use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub banner: Style,
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub loading: Style,
	pub suggestion: Style,
	pub suggestion_selected: Style,
	pub error: Style,
	pub footer: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

/// Built-in theme and the names it answers to.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub theme: Theme,
	pub aliases: &'static [&'static str],
}

const GREEN: Color = Color::Rgb(76, 175, 80);
const LIGHT_BLUE: Color = Color::Rgb(173, 216, 230);

pub const MEADOW: Theme = Theme {
	banner: Style::new()
		.fg(Color::White)
		.bg(GREEN)
		.add_modifier(Modifier::BOLD),
	header: Style::new().fg(Color::White).bg(GREEN),
	row_highlight: Style::new()
		.fg(Color::Black)
		.bg(LIGHT_BLUE)
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(GREEN).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
	loading: Style::new()
		.fg(Color::White)
		.bg(GREEN)
		.add_modifier(Modifier::BOLD),
	suggestion: Style::new().fg(Color::Black).bg(LIGHT_BLUE),
	suggestion_selected: Style::new()
		.fg(Color::White)
		.bg(Color::Rgb(30, 110, 160))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::LightRed),
	footer: Style::new().fg(Color::White).bg(GREEN),
};

pub const SLATE: Theme = Theme {
	banner: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	loading: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	suggestion: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(51, 65, 85)),
	suggestion_selected: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(250, 204, 21)),
	error: Style::new().fg(Color::Red),
	footer: Style::new()
		.fg(Color::Rgb(148, 163, 184))
		.bg(Color::Rgb(15, 23, 42)),
};

const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: "meadow",
		theme: MEADOW,
		aliases: &["default", "green"],
	},
	ThemeDefinition {
		name: "slate",
		theme: SLATE,
		aliases: &["dark"],
	},
];

#[must_use]
pub fn default_theme() -> Theme {
	MEADOW
}

/// Look up a built-in theme by name or alias, ignoring case and separators.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| {
			normalize_name(definition.name) == wanted
				|| definition
					.aliases
					.iter()
					.any(|alias| normalize_name(alias) == wanted)
		})
		.map(|definition| definition.theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect()
}

fn normalize_name(name: &str) -> String {
	name.trim()
		.chars()
		.filter(|ch| !matches!(ch, '-' | '_' | ' '))
		.flat_map(char::to_lowercase)
		.collect()
}

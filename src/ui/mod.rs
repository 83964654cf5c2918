//! Interactive terminal UI for `picfind`.
//!
//! [`SearchUi`] is the public entry point. The remaining submodules hold the
//! event loop, key handling, rendering and the widgets and styles they use.

mod actions;
mod app;
mod builder;
pub mod components;
mod input;
mod outcome;
mod render;
mod runtime;
pub mod style;

pub use app::App;
pub use builder::SearchUi;
pub use outcome::SearchOutcome;

//! Core crate exports for `picfind`, a terminal image search client for
//! Unsplash.
//!
//! The root module re-exports the types an embedder needs to configure a
//! backend and run the interactive search without digging through the module
//! hierarchy.

pub mod api;
pub mod app_dirs;
pub mod controller;
pub mod logging;
pub mod search;
pub mod state;
#[cfg(feature = "thumbnails")]
pub mod thumbnails;
pub mod ui;

pub use api::{ApiConfig, ApiError, Collection, Photo, SearchBackend, UnsplashClient};
pub use controller::SearchController;
pub use state::SearchState;
pub use ui::style::{Theme, default_theme};
pub use ui::{SearchOutcome, SearchUi};

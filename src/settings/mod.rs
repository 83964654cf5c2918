//! Configuration loading and resolution utilities.
//!
//! The pipeline is split into small submodules: `sources` layers files and
//! environment variables, `raw` mirrors the file layout and applies CLI
//! overrides, and `resolved` validates the result. `load` is the entry point
//! and returns the [`ResolvedConfig`] used by the application.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;

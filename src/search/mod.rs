//! Background search requests and suggestion filtering.

mod commands;
mod suggestions;
mod worker;

pub use commands::{RequestKind, SearchCommand, SearchEvent, SearchPayload, SearchRequest};
pub use suggestions::filter_suggestions;
pub use worker::spawn;

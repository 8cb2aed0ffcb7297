//! Search dispatch module
//!
//! Resolves a collection name to its catalog backend and forwards the
//! spatiotemporal query to it.

mod executor;
mod models;

pub use executor::{Search, SearchError, DEFAULT_SEARCH_LIMIT};
pub use models::*;

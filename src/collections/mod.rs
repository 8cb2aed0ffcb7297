//! Collection registry
//!
//! The fixed, ordered list of collections this service can search, each
//! tagged with the catalog backend that serves it.

mod registry;

pub use registry::*;

//! stac-proxy: an HTTP API over satellite imagery catalogs
//!
//! Dispatches spatiotemporal searches for a fixed set of collections to the
//! STAC catalog that serves each one (Microsoft Planetary Computer or the
//! Roscosmos open-data catalog), and lists signed download links for a
//! single demonstration Landsat scene.

pub mod catalogs;
pub mod collections;
pub mod config;
pub mod network;
pub mod search;
pub mod stac;
pub mod web;

pub use collections::{BackendKind, CollectionDescriptor, CollectionRegistry};
pub use config::Settings;
pub use search::{Search, SearchParams};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

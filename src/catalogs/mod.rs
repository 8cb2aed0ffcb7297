//! Catalog backend module
//!
//! Defines the Catalog trait and the backends searches are dispatched to.

mod error;
mod loader;
mod registry;
mod traits;

pub mod planetary;
pub mod roscosmos;

pub use error::{CatalogError, CatalogResult};
pub use loader::CatalogLoader;
pub use registry::CatalogRegistry;
pub use traits::*;

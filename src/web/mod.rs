//! Web server module
//!
//! Provides the HTTP API of stac-proxy.

mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;

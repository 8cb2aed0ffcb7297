//! Errors raised while talking to upstream catalog services

use thiserror::Error;

/// Failure of an upstream catalog, item or signing call
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{backend} catalog endpoint is not configured")]
    NotConfigured { backend: &'static str },

    #[error("bounding box value {value:?} is not a number")]
    InvalidBbox { value: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("item has no {0:?} asset")]
    MissingAsset(String),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

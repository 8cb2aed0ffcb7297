//! Catalog traits and types

use super::error::{CatalogError, CatalogResult};
use crate::collections::BackendKind;
use crate::search::BoundingBox;
use serde::{Deserialize, Serialize};

/// Raw search result, forwarded to the caller unmodified
pub type SearchResult = serde_json::Value;

/// Parameters handed to a catalog for one search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Collection id as registered
    pub collection: String,
    /// West, south, east, north, verbatim from the request
    pub bbox: BoundingBox,
    /// `{start}/{end}`
    pub time_range: String,
    /// Maximum number of items requested
    pub limit: u32,
}

/// HTTP request to be made against a catalog
#[derive(Debug, Clone)]
pub struct CatalogRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Query parameters, in order
    pub params: Vec<(String, String)>,
    /// JSON body
    pub body: Option<serde_json::Value>,
}

impl CatalogRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            headers: Vec::new(),
            params: Vec::new(),
            body: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add JSON body
    pub fn json(mut self, data: serde_json::Value) -> Self {
        self.body = Some(data);
        self
    }

    /// Value of the first query parameter named `key`
    pub fn param_value(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// HTTP response from a catalog request
#[derive(Debug)]
pub struct CatalogResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl CatalogResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> CatalogResult<T> {
        serde_json::from_str(&self.text).map_err(|source| CatalogError::Decode {
            url: self.url.clone(),
            source,
        })
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into an error
    pub fn error_for_status(self) -> CatalogResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(CatalogError::Status {
                url: self.url,
                status: self.status,
            })
        }
    }
}

/// A STAC search backend
pub trait Catalog: Send + Sync {
    /// Catalog name used in logs
    fn name(&self) -> &str;

    /// Backend this catalog serves
    fn kind(&self) -> BackendKind;

    /// Whether the catalog has an endpoint to search
    fn is_configured(&self) -> bool {
        true
    }

    /// Build the HTTP request for a search
    fn request(&self, query: &CatalogQuery) -> CatalogResult<CatalogRequest>;

    /// Parse the HTTP response; the body is passed through as-is
    fn response(&self, response: CatalogResponse) -> CatalogResult<SearchResult> {
        response.error_for_status()?.json()
    }
}

//! Mapping of failures to HTTP responses

use crate::catalogs::CatalogError;
use crate::search::SearchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Error returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("unknown collection {0:?}")]
    CollectionNotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Search(SearchError::UnknownCollection(_))
            | ApiError::CollectionNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Search(SearchError::BackendUnavailable(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Search(SearchError::Catalog { .. }) | ApiError::Catalog(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Search(SearchError::UnknownCollection(name))
            | ApiError::CollectionNotFound(name) => {
                json!({ "error": self.to_string(), "collection": name })
            }
            _ => json!({ "error": self.to_string() }),
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        (status, Json(body)).into_response()
    }
}

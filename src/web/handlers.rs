//! HTTP request handlers

use super::error::ApiError;
use super::state::AppState;
use crate::catalogs::SearchResult;
use crate::collections::CollectionDescriptor;
use crate::search::SearchParams;
use crate::stac::AssetPreview;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

/// Public view of a registered collection
#[derive(Debug, Serialize)]
pub struct CollectionResponse {
    pub name: String,
    pub description: String,
    pub source: String,
    pub provider: String,
    /// False when the backing catalog has no endpoint configured
    pub searchable: bool,
}

impl CollectionResponse {
    fn new(collection: &CollectionDescriptor, searchable: bool) -> Self {
        Self {
            name: collection.name.clone(),
            description: collection.description.clone(),
            source: collection.source.clone(),
            provider: collection.provider.clone(),
            searchable,
        }
    }
}

/// Signed assets of the fixed demonstration item
pub async fn stac_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssetPreview>>, ApiError> {
    let previews = state.previewer.fetch().await?;
    Ok(Json(previews))
}

/// Search a collection; the catalog's answer is returned untouched
pub async fn search(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(params): Json<SearchParams>,
) -> Result<Json<SearchResult>, ApiError> {
    let result = state.search.execute(&name, &params).await?;
    Ok(Json(result))
}

/// All registered collections, in registry order
pub async fn list_collections(State(state): State<AppState>) -> Json<Vec<CollectionResponse>> {
    Json(
        state
            .collections
            .iter()
            .map(|c| CollectionResponse::new(c, state.search.is_searchable(c)))
            .collect(),
    )
}

/// A single registered collection
pub async fn get_collection(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CollectionResponse>, ApiError> {
    state
        .collections
        .get(&name)
        .map(|c| Json(CollectionResponse::new(c, state.search.is_searchable(c))))
        .ok_or(ApiError::CollectionNotFound(name))
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "instance": state.instance_name(),
        "version": crate::VERSION
    }))
}

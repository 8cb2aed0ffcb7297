//! Search dispatch to the catalog backing a collection

use super::models::SearchParams;
use crate::catalogs::{
    Catalog, CatalogError, CatalogQuery, CatalogRegistry, CatalogResult, SearchResult,
};
use crate::collections::{BackendKind, CollectionDescriptor, CollectionRegistry};
use crate::network::HttpClient;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default number of items requested per search
pub const DEFAULT_SEARCH_LIMIT: u32 = 100;

/// Why a dispatched search failed
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown collection {0:?}")]
    UnknownCollection(String),

    #[error("no catalog loaded for backend {0}")]
    BackendUnavailable(BackendKind),

    #[error("search of {collection} failed: {source}")]
    Catalog {
        collection: String,
        #[source]
        source: CatalogError,
    },
}

/// Dispatches collection searches to their catalog backends
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Registered collections
    collections: Arc<CollectionRegistry>,
    /// Catalog backends
    catalogs: Arc<CatalogRegistry>,
    /// Items requested per search
    limit: u32,
}

impl Search {
    /// Create a new search dispatcher
    pub fn new(
        client: HttpClient,
        collections: Arc<CollectionRegistry>,
        catalogs: Arc<CatalogRegistry>,
    ) -> Self {
        Self {
            client,
            collections,
            catalogs,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Set the item limit sent with each search
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Whether searches of `collection` can reach a configured catalog
    pub fn is_searchable(&self, collection: &CollectionDescriptor) -> bool {
        self.catalogs
            .get(collection.backend)
            .map(|catalog| catalog.is_configured())
            .unwrap_or(false)
    }

    /// Search the named collection and return the catalog's answer as-is
    pub async fn execute(
        &self,
        name: &str,
        params: &SearchParams,
    ) -> Result<SearchResult, SearchError> {
        let collection = self
            .collections
            .get(name)
            .ok_or_else(|| SearchError::UnknownCollection(name.to_string()))?;

        let catalog = self
            .catalogs
            .get(collection.backend)
            .ok_or(SearchError::BackendUnavailable(collection.backend))?;

        let query = CatalogQuery {
            collection: collection.name.clone(),
            bbox: params.bbox(),
            time_range: params.time_range(),
            limit: self.limit,
        };

        debug!(
            "Dispatching {} to {} with bbox {:?} and time range {}",
            query.collection,
            catalog.name(),
            query.bbox.as_array(),
            query.time_range
        );

        let start = Instant::now();
        let outcome = self.run(catalog.as_ref(), &query).await;
        match outcome {
            Ok(result) => {
                info!(
                    "Search of {} on {} completed in {:?}",
                    query.collection,
                    catalog.name(),
                    start.elapsed()
                );
                Ok(result)
            }
            Err(e) => {
                warn!("Search of {} on {} failed: {}", query.collection, catalog.name(), e);
                Err(SearchError::Catalog {
                    collection: query.collection,
                    source: e,
                })
            }
        }
    }

    async fn run(
        &self,
        catalog: &dyn Catalog,
        query: &CatalogQuery,
    ) -> CatalogResult<SearchResult> {
        let request = catalog.request(query)?;
        let response = self.client.execute(request).await?;
        catalog.response(response)
    }
}

//! Application state shared across handlers

use crate::catalogs::CatalogRegistry;
use crate::collections::CollectionRegistry;
use crate::config::Settings;
use crate::network::HttpClient;
use crate::search::Search;
use crate::stac::{Previewer, Signer};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Collection registry
    pub collections: Arc<CollectionRegistry>,
    /// Search dispatcher
    pub search: Arc<Search>,
    /// Fixed-item asset listing
    pub previewer: Arc<Previewer>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        settings: Settings,
        collections: CollectionRegistry,
        catalogs: CatalogRegistry,
        client: HttpClient,
    ) -> Self {
        let collections = Arc::new(collections);
        let search = Search::new(client.clone(), collections.clone(), Arc::new(catalogs))
            .with_limit(settings.catalogs.search_limit);
        let signer = Signer::new(
            client.clone(),
            settings.catalogs.planetary_computer.sas_url.clone(),
        );
        let previewer = Previewer::new(client, signer, settings.preview.clone());

        Self {
            settings: Arc::new(settings),
            collections,
            search: Arc::new(search),
            previewer: Arc::new(previewer),
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}

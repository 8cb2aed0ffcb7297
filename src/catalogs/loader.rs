//! Catalog loader for initializing backends from configuration

use super::registry::CatalogRegistry;
use super::traits::Catalog;
use super::{planetary, roscosmos};
use crate::collections::BackendKind;
use crate::config::Settings;
use std::sync::Arc;
use tracing::{error, info};

/// Loader for initializing catalogs from configuration
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load one catalog per backend referenced by the configured collections
    pub fn load(settings: &Settings) -> CatalogRegistry {
        let mut registry = CatalogRegistry::new();

        for kind in settings.backends_in_use() {
            let catalog = Self::create_catalog(kind, settings);
            info!("Loaded catalog: {} ({})", catalog.name(), kind);
            registry.register(catalog);
        }

        registry
    }

    /// Create a catalog instance for a backend kind
    pub fn create_catalog(kind: BackendKind, settings: &Settings) -> Arc<dyn Catalog> {
        let catalogs = &settings.catalogs;
        match kind {
            BackendKind::PlanetaryComputer => Arc::new(planetary::PlanetaryComputer::new(
                catalogs.planetary_computer.stac_url.clone(),
            )),
            BackendKind::Roscosmos => {
                Arc::new(roscosmos::Roscosmos::new(catalogs.roscosmos.stac_url.clone()))
            }
        }
    }

    /// Load catalogs and report every collection that cannot be searched
    pub fn load_and_check(settings: &Settings) -> CatalogRegistry {
        let registry = Self::load(settings);
        for collection in &settings.collections {
            let usable = registry
                .get(collection.backend)
                .map(|c| c.is_configured())
                .unwrap_or(false);
            if !usable {
                error!(
                    "Collection {} is listed but {} has no endpoint configured; searches will fail",
                    collection.name, collection.backend
                );
            }
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let registry = CatalogLoader::load(&Settings::default());
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(BackendKind::PlanetaryComputer));
        assert!(registry.contains(BackendKind::Roscosmos));
    }

    #[test]
    fn test_roscosmos_unconfigured_by_default() {
        let registry = CatalogLoader::load_and_check(&Settings::default());
        assert!(registry.get(BackendKind::PlanetaryComputer).unwrap().is_configured());
        assert!(!registry.get(BackendKind::Roscosmos).unwrap().is_configured());

        let mut settings = Settings::default();
        settings.catalogs.roscosmos.stac_url = Some("http://opendata.example/stac".to_string());
        let registry = CatalogLoader::load(&settings);
        assert!(registry.get(BackendKind::Roscosmos).unwrap().is_configured());
    }

    #[test]
    fn test_load_only_referenced_backends() {
        let mut settings = Settings::default();
        settings
            .collections
            .retain(|c| c.backend == BackendKind::PlanetaryComputer);

        let registry = CatalogLoader::load(&settings);
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(BackendKind::Roscosmos));
    }
}

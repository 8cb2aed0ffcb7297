//! Catalog registry keyed by backend kind

use super::traits::Catalog;
use crate::collections::BackendKind;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of the catalog backends searches can be dispatched to
#[derive(Default)]
pub struct CatalogRegistry {
    catalogs: HashMap<BackendKind, Arc<dyn Catalog>>,
}

impl CatalogRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            catalogs: HashMap::new(),
        }
    }

    /// Register a catalog under the backend kind it reports
    pub fn register(&mut self, catalog: Arc<dyn Catalog>) {
        self.catalogs.insert(catalog.kind(), catalog);
    }

    /// Get the catalog serving a backend kind
    pub fn get(&self, kind: BackendKind) -> Option<&Arc<dyn Catalog>> {
        self.catalogs.get(&kind)
    }

    pub fn contains(&self, kind: BackendKind) -> bool {
        self.catalogs.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::{planetary::PlanetaryComputer, roscosmos::Roscosmos};

    #[test]
    fn test_registry() {
        let mut registry = CatalogRegistry::new();
        registry.register(Arc::new(PlanetaryComputer::new("http://pc")));

        assert!(registry.contains(BackendKind::PlanetaryComputer));
        assert!(registry.get(BackendKind::Roscosmos).is_none());

        registry.register(Arc::new(Roscosmos::new(None)));
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get(BackendKind::Roscosmos).map(|c| c.kind()),
            Some(BackendKind::Roscosmos)
        );
    }
}

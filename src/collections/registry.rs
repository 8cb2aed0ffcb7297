//! Collection descriptors and the read-only registry holding them

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Catalog backend serving a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Microsoft Planetary Computer STAC API
    PlanetaryComputer,
    /// Roscosmos open-data STAC API
    Roscosmos,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::PlanetaryComputer => "planetary_computer",
            BackendKind::Roscosmos => "roscosmos",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A searchable collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDescriptor {
    /// Collection id, unique within the registry
    pub name: String,
    /// Human readable description
    pub description: String,
    /// Data source shown to users
    pub source: String,
    /// Data provider
    pub provider: String,
    /// Backend the search is dispatched to
    pub backend: BackendKind,
}

/// Read-only, ordered registry of collections
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    collections: Vec<CollectionDescriptor>,
}

impl CollectionRegistry {
    /// Build a registry from descriptors, keeping their order
    pub fn new(collections: Vec<CollectionDescriptor>) -> Self {
        for (idx, collection) in collections.iter().enumerate() {
            if collections[..idx].iter().any(|c| c.name == collection.name) {
                warn!(
                    "Duplicate collection name {}; lookups resolve to the first entry",
                    collection.name
                );
            }
        }
        Self { collections }
    }

    /// First collection whose name matches exactly (case-sensitive)
    pub fn get(&self, name: &str) -> Option<&CollectionDescriptor> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollectionDescriptor> {
        self.collections.iter()
    }

    /// Collection names in registry order
    pub fn names(&self) -> Vec<&str> {
        self.collections.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn descriptor(name: &str, backend: BackendKind) -> CollectionDescriptor {
        CollectionDescriptor {
            name: name.to_string(),
            description: format!("{} description", name),
            source: "test".to_string(),
            provider: "test".to_string(),
            backend,
        }
    }

    #[test]
    fn test_default_registry_order() {
        let registry = CollectionRegistry::new(Settings::default().collections);
        assert_eq!(
            registry.names(),
            vec!["landsat-c2-l2", "modis-09A1-061", "roscosmos-opendata.MM"]
        );
        assert_eq!(
            registry.get("roscosmos-opendata.MM").map(|c| c.backend),
            Some(BackendKind::Roscosmos)
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = CollectionRegistry::new(Settings::default().collections);
        assert!(registry.get("landsat-c2-l2").is_some());
        assert!(registry.get("Landsat-C2-L2").is_none());
        assert!(registry.get("landsat").is_none());
        assert!(registry.get("").is_none());
    }

    #[test]
    fn test_duplicate_names_resolve_to_first() {
        let registry = CollectionRegistry::new(vec![
            descriptor("dup", BackendKind::Roscosmos),
            descriptor("dup", BackendKind::PlanetaryComputer),
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("dup").map(|c| c.backend),
            Some(BackendKind::Roscosmos)
        );
    }

    #[test]
    fn test_backend_kind_serde() {
        let kind: BackendKind = serde_json::from_str("\"planetary_computer\"").unwrap();
        assert_eq!(kind, BackendKind::PlanetaryComputer);
        assert_eq!(serde_json::to_string(&BackendKind::Roscosmos).unwrap(), "\"roscosmos\"");
        assert_eq!(BackendKind::Roscosmos.to_string(), "roscosmos");
    }
}

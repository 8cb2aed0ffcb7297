//! Roscosmos open-data catalog
//!
//! Uses the GET form of STAC item search; the bounding box is sent as the
//! comma-joined strings it arrived as.

use super::error::{CatalogError, CatalogResult};
use super::traits::*;
use crate::collections::BackendKind;

/// Roscosmos open-data STAC API
pub struct Roscosmos {
    stac_url: Option<String>,
}

impl Roscosmos {
    pub fn new(stac_url: Option<String>) -> Self {
        Self { stac_url }
    }
}

impl Catalog for Roscosmos {
    fn name(&self) -> &str {
        "Роскосмос"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Roscosmos
    }

    fn is_configured(&self) -> bool {
        self.stac_url.is_some()
    }

    fn request(&self, query: &CatalogQuery) -> CatalogResult<CatalogRequest> {
        let stac_url = self
            .stac_url
            .as_deref()
            .ok_or(CatalogError::NotConfigured {
                backend: BackendKind::Roscosmos.as_str(),
            })?;

        Ok(
            CatalogRequest::get(format!("{}/search", stac_url.trim_end_matches('/')))
                .header("Accept", "application/geo+json")
                .param("collections", query.collection.as_str())
                .param("bbox", query.bbox.join(","))
                .param("datetime", query.time_range.as_str())
                .param("limit", query.limit.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::BoundingBox;

    fn query() -> CatalogQuery {
        CatalogQuery {
            collection: "roscosmos-opendata.MM".to_string(),
            bbox: BoundingBox::new("30", "10", "40", "20"),
            time_range: "2025-01-01/2025-02-01".to_string(),
            limit: 50,
        }
    }

    #[test]
    fn test_roscosmos_request() {
        let catalog = Roscosmos::new(Some("http://opendata.example/stac".to_string()));
        assert!(catalog.is_configured());
        let request = catalog.request(&query()).unwrap();

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://opendata.example/stac/search");
        assert_eq!(request.param_value("collections"), Some("roscosmos-opendata.MM"));
        assert_eq!(request.param_value("bbox"), Some("30,10,40,20"));
        assert_eq!(request.param_value("datetime"), Some("2025-01-01/2025-02-01"));
        assert_eq!(request.param_value("limit"), Some("50"));
        assert!(request.body.is_none());
    }

    #[test]
    fn test_roscosmos_unconfigured() {
        let catalog = Roscosmos::new(None);
        assert!(!catalog.is_configured());
        let err = catalog.request(&query()).unwrap_err();
        assert!(matches!(err, CatalogError::NotConfigured { backend: "roscosmos" }));
    }
}

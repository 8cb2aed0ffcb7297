//! Microsoft Planetary Computer catalog
//!
//! Searches go to the STAC API `/search` endpoint as a POST with a JSON
//! body. The bounding box strings are only turned into numbers here, so a
//! malformed coordinate surfaces as a backend failure.

use super::error::CatalogResult;
use super::traits::*;
use crate::collections::BackendKind;
use serde_json::json;

/// Planetary Computer STAC API
pub struct PlanetaryComputer {
    stac_url: String,
}

impl PlanetaryComputer {
    pub fn new(stac_url: impl Into<String>) -> Self {
        Self {
            stac_url: stac_url.into(),
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.stac_url.trim_end_matches('/'))
    }
}

impl Catalog for PlanetaryComputer {
    fn name(&self) -> &str {
        "Microsoft Planetary Computer"
    }

    fn kind(&self) -> BackendKind {
        BackendKind::PlanetaryComputer
    }

    fn request(&self, query: &CatalogQuery) -> CatalogResult<CatalogRequest> {
        let bbox = query.bbox.to_numbers()?;

        Ok(CatalogRequest::post(self.search_url())
            .header("Accept", "application/geo+json")
            .json(json!({
                "collections": [query.collection],
                "bbox": bbox,
                "datetime": query.time_range,
                "limit": query.limit,
            })))
    }
}

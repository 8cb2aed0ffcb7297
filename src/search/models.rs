//! Search request models

use crate::catalogs::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/collections/{name}/results`
///
/// All fields are kept as the caller sent them; nothing is validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    pub start: String,
    pub end: String,
    pub lat1: String,
    pub lat2: String,
    pub lon1: String,
    pub lon2: String,
}

impl SearchParams {
    /// `[lon1, lat1, lon2, lat2]`
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(&self.lon1, &self.lat1, &self.lon2, &self.lat2)
    }

    /// `{start}/{end}`
    pub fn time_range(&self) -> String {
        format!("{}/{}", self.start, self.end)
    }
}

/// West, south, east, north, as unparsed strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox([String; 4]);

impl BoundingBox {
    pub fn new(
        west: impl Into<String>,
        south: impl Into<String>,
        east: impl Into<String>,
        north: impl Into<String>,
    ) -> Self {
        Self([west.into(), south.into(), east.into(), north.into()])
    }

    pub fn as_array(&self) -> &[String; 4] {
        &self.0
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }

    /// Parse every edge as a number
    pub fn to_numbers(&self) -> CatalogResult<[f64; 4]> {
        let mut out = [0.0; 4];
        for (slot, value) in out.iter_mut().zip(self.0.iter()) {
            *slot = value
                .trim()
                .parse()
                .map_err(|_| CatalogError::InvalidBbox {
                    value: value.clone(),
                })?;
        }
        Ok(out)
    }
}

//! STAC item model and loader

use crate::catalogs::CatalogResult;
use crate::network::HttpClient;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A STAC item; only `assets` is interpreted, everything else is kept opaque.
/// Assets keep the order of the source document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    #[serde(default)]
    pub assets: IndexMap<String, Asset>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A downloadable asset of an item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub href: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Asset {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            extra: serde_json::Map::new(),
        }
    }
}

impl Item {
    /// Fetch and decode an item from its URL
    pub async fn load(client: &HttpClient, url: &str) -> CatalogResult<Self> {
        let response = client.get(url).await?.error_for_status()?;
        let item: Item = response.json()?;
        debug!("Loaded item {} with {} assets", item.id, item.assets.len());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogs::CatalogError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_item_keeps_unknown_fields() {
        let doc = json!({
            "type": "Feature",
            "stac_version": "1.0.0",
            "id": "LC09",
            "properties": {"datetime": "2025-06-23T01:52:01Z"},
            "assets": {
                "red": {"href": "https://a/B4.TIF", "type": "image/tiff", "roles": ["data"]}
            }
        });
        let item: Item = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(item.id, "LC09");
        assert_eq!(item.assets["red"].href, "https://a/B4.TIF");
        assert_eq!(item.assets["red"].extra["type"], "image/tiff");
        assert_eq!(serde_json::to_value(&item).unwrap(), doc);
    }

    #[test]
    fn test_assets_keep_document_order() {
        let item: Item = serde_json::from_str(
            r#"{"id":"LC09","assets":{"red":{"href":"https://a/B4.TIF"},"blue":{"href":"https://a/B2.TIF"},"ang":{"href":"https://a/ANG.txt"}}}"#,
        )
        .unwrap();
        let keys: Vec<&str> = item.assets.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["red", "blue", "ang"]);
    }

    #[tokio::test]
    async fn test_load_item() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/items/LC09"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "LC09",
                "assets": {"blue": {"href": "https://a/B2.TIF"}}
            })))
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let item = Item::load(&client, &format!("{}/items/LC09", server.uri()))
            .await
            .unwrap();
        assert_eq!(item.assets.len(), 1);

        let err = Item::load(&client, &format!("{}/items/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Status { status: 404, .. }));
    }
}

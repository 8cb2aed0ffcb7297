//! Signed asset listing for the fixed demonstration item

use super::item::Item;
use super::signing::Signer;
use crate::catalogs::{CatalogError, CatalogResult};
use crate::config::PreviewSettings;
use crate::network::HttpClient;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One entry of the `GET /api/stac/` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPreview {
    /// Asset key
    pub name: String,
    /// Rendered preview of the whole item
    pub preview: String,
    /// Signed asset URL
    pub href: String,
}

/// List the assets whose href contains `marker`, each paired with the
/// href of the `preview_asset` asset
pub fn asset_previews(
    item: &Item,
    marker: &str,
    preview_asset: &str,
) -> CatalogResult<Vec<AssetPreview>> {
    let preview = item
        .assets
        .get(preview_asset)
        .map(|asset| asset.href.clone())
        .ok_or_else(|| CatalogError::MissingAsset(preview_asset.to_string()))?;

    Ok(item
        .assets
        .iter()
        .filter(|(_, asset)| asset.href.contains(marker))
        .map(|(name, asset)| AssetPreview {
            name: name.clone(),
            preview: preview.clone(),
            href: asset.href.clone(),
        })
        .collect())
}

/// Loads, signs and lists the configured item
pub struct Previewer {
    client: HttpClient,
    signer: Signer,
    settings: PreviewSettings,
}

impl Previewer {
    pub fn new(client: HttpClient, signer: Signer, settings: PreviewSettings) -> Self {
        Self {
            client,
            signer,
            settings,
        }
    }

    pub async fn fetch(&self) -> CatalogResult<Vec<AssetPreview>> {
        let item = Item::load(&self.client, &self.settings.item_url).await?;
        let item = self.signer.sign(item).await?;
        let previews = asset_previews(
            &item,
            &self.settings.asset_marker,
            &self.settings.preview_asset,
        )?;
        info!("Listed {} signed assets of item {}", previews.len(), item.id);
        Ok(previews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stac::item::Asset;

    fn item(assets: &[(&str, &str)]) -> Item {
        Item {
            id: "LC09".to_string(),
            assets: assets
                .iter()
                .map(|(k, href)| (k.to_string(), Asset::new(*href)))
                .collect(),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_only_tif_assets_listed() {
        let item = item(&[
            ("red", "https://blob/B4.TIF?sig=a"),
            ("thumbnail", "https://blob/thumb_small.jpeg?sig=a"),
            ("mtl.xml", "https://blob/MTL.xml?sig=a"),
            ("rendered_preview", "https://pc/preview.png"),
        ]);

        let previews = asset_previews(&item, ".TIF", "rendered_preview").unwrap();
        assert_eq!(
            previews,
            vec![AssetPreview {
                name: "red".to_string(),
                preview: "https://pc/preview.png".to_string(),
                href: "https://blob/B4.TIF?sig=a".to_string(),
            }]
        );
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        let item = item(&[
            ("lower", "https://blob/b4.tif"),
            ("rendered_preview", "https://pc/preview.png"),
        ]);
        assert!(asset_previews(&item, ".TIF", "rendered_preview")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_every_entry_shares_the_preview() {
        let item = item(&[
            ("blue", "https://blob/B2.TIF"),
            ("green", "https://blob/B3.TIF"),
            ("rendered_preview", "https://pc/preview.png"),
        ]);
        let previews = asset_previews(&item, ".TIF", "rendered_preview").unwrap();
        assert_eq!(previews.len(), 2);
        assert!(previews.iter().all(|p| p.preview == "https://pc/preview.png"));
    }

    #[test]
    fn test_listing_follows_item_asset_order() {
        let item = item(&[
            ("red", "https://blob/B4.TIF"),
            ("blue", "https://blob/B2.TIF"),
            ("rendered_preview", "https://pc/preview.png"),
            ("coastal", "https://blob/B1.TIF"),
        ]);
        let names: Vec<String> = asset_previews(&item, ".TIF", "rendered_preview")
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["red", "blue", "coastal"]);
    }

    #[test]
    fn test_missing_preview_asset() {
        let item = item(&[("red", "https://blob/B4.TIF")]);
        let err = asset_previews(&item, ".TIF", "rendered_preview").unwrap_err();
        assert!(matches!(err, CatalogError::MissingAsset(ref name) if name == "rendered_preview"));
    }
}

//! Planetary Computer asset signing
//!
//! Assets stored in Azure Blob Storage need a short-lived SAS token
//! appended to their URL before they can be downloaded. Tokens are issued
//! per storage account and container by the Planetary Computer token
//! service.

use super::item::Item;
use crate::catalogs::CatalogResult;
use crate::network::HttpClient;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

const BLOB_HOST_SUFFIX: &str = ".blob.core.windows.net";

/// Storage account and container an asset lives in
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlobLocation {
    pub account: String,
    pub container: String,
}

impl BlobLocation {
    /// Locate an href in Azure Blob Storage; `None` for any other host
    pub fn parse(href: &str) -> Option<Self> {
        let url = Url::parse(href).ok()?;
        let host = url.host_str()?;
        let account = host.strip_suffix(BLOB_HOST_SUFFIX)?;
        let container = url.path_segments()?.next().filter(|s| !s.is_empty())?;

        Some(Self {
            account: account.to_string(),
            container: container.to_string(),
        })
    }
}

/// SAS token as returned by the token service
#[derive(Debug, Clone, Deserialize)]
pub struct SasToken {
    pub token: String,
    #[serde(rename = "msft:expiry")]
    pub expiry: DateTime<Utc>,
}

impl SasToken {
    /// Append the token to an href's query string
    pub fn apply(&self, href: &str) -> String {
        if href.contains('?') {
            format!("{}&{}", href, self.token)
        } else {
            format!("{}?{}", href, self.token)
        }
    }
}

/// Signs item assets with SAS tokens
#[derive(Clone)]
pub struct Signer {
    client: HttpClient,
    sas_url: String,
}

impl Signer {
    pub fn new(client: HttpClient, sas_url: impl Into<String>) -> Self {
        Self {
            client,
            sas_url: sas_url.into(),
        }
    }

    /// Return the item with every blob-storage asset href signed
    pub async fn sign(&self, mut item: Item) -> CatalogResult<Item> {
        let mut locations: Vec<BlobLocation> = Vec::new();
        for asset in item.assets.values() {
            if let Some(location) = location_to_sign(&asset.href) {
                if !locations.contains(&location) {
                    locations.push(location);
                }
            }
        }

        let tokens = try_join_all(locations.iter().map(|l| self.token(l))).await?;
        let tokens: HashMap<BlobLocation, SasToken> = locations.into_iter().zip(tokens).collect();

        for asset in item.assets.values_mut() {
            if let Some(token) = location_to_sign(&asset.href).and_then(|l| tokens.get(&l)) {
                asset.href = token.apply(&asset.href);
            }
        }

        Ok(item)
    }

    /// Fetch a token for one storage container
    pub async fn token(&self, location: &BlobLocation) -> CatalogResult<SasToken> {
        let url = format!(
            "{}/token/{}/{}",
            self.sas_url.trim_end_matches('/'),
            urlencoding::encode(&location.account),
            urlencoding::encode(&location.container)
        );
        let token: SasToken = self.client.get(&url).await?.error_for_status()?.json()?;
        debug!(
            "Issued SAS token for {}/{} expiring {}",
            location.account, location.container, token.expiry
        );
        Ok(token)
    }
}

/// Blob location of an href that still needs a signature
fn location_to_sign(href: &str) -> Option<BlobLocation> {
    if is_signed(href) {
        return None;
    }
    BlobLocation::parse(href)
}

fn is_signed(href: &str) -> bool {
    Url::parse(href)
        .map(|url| url.query_pairs().any(|(k, _)| k == "sig"))
        .unwrap_or(false)
}

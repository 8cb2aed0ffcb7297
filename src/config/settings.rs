//! Settings structures for stac-proxy configuration

use crate::collections::{BackendKind, CollectionDescriptor};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub catalogs: CatalogSettings,
    pub preview: PreviewSettings,
    pub collections: Vec<CollectionDescriptor>,
    /// File the settings were read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            outgoing: OutgoingSettings::default(),
            catalogs: CatalogSettings::default(),
            preview: PreviewSettings::default(),
            collections: default_collections(),
            source: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the HTTP client cannot be built from
    pub fn validate(&self) -> Result<()> {
        let timeout = self.outgoing.request_timeout;
        if !timeout.is_finite() || timeout <= 0.0 {
            bail!("outgoing.request_timeout must be a positive number of seconds, got {timeout}");
        }
        Ok(())
    }

    /// Merge with environment variables (STAC_PROXY_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("STAC_PROXY_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("STAC_PROXY_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("STAC_PROXY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("STAC_PROXY_PLANETARY_COMPUTER_URL") {
            self.catalogs.planetary_computer.stac_url = val;
        }
        if let Ok(val) = std::env::var("STAC_PROXY_ROSCOSMOS_URL") {
            self.catalogs.roscosmos.stac_url = Some(val);
        }
    }

    /// Backend kinds referenced by at least one configured collection
    pub fn backends_in_use(&self) -> Vec<BackendKind> {
        let mut kinds: Vec<BackendKind> = Vec::new();
        for collection in &self.collections {
            if !kinds.contains(&collection.backend) {
                kinds.push(collection.backend);
            }
        }
        kinds
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name reported in logs
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "stac-proxy".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8000,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Idle connections kept per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Appended to the default user agent
    pub useragent_suffix: Option<String>,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 30.0,
            pool_maxsize: 20,
            verify_ssl: true,
            useragent_suffix: None,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Upstream catalog endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub planetary_computer: PlanetaryComputerSettings,
    pub roscosmos: RoscosmosSettings,
    /// `limit` sent with every item search
    pub search_limit: u32,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            planetary_computer: PlanetaryComputerSettings::default(),
            roscosmos: RoscosmosSettings::default(),
            search_limit: 100,
        }
    }
}

/// Microsoft Planetary Computer endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetaryComputerSettings {
    /// STAC API root
    pub stac_url: String,
    /// SAS token service root
    pub sas_url: String,
}

impl Default for PlanetaryComputerSettings {
    fn default() -> Self {
        Self {
            stac_url: "https://planetarycomputer.microsoft.com/api/stac/v1".to_string(),
            sas_url: "https://planetarycomputer.microsoft.com/api/sas/v1".to_string(),
        }
    }
}

/// Roscosmos open-data catalog endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoscosmosSettings {
    /// STAC API root; searches fail until this is set
    pub stac_url: Option<String>,
}

/// The fixed item served by `GET /api/stac/`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Item URL
    pub item_url: String,
    /// Substring an asset href must contain to be listed
    pub asset_marker: String,
    /// Asset whose href is reported as `preview`
    pub preview_asset: String,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            item_url: "https://planetarycomputer.microsoft.com/api/stac/v1/collections/landsat-c2-l2/items/LC09_L2SP_114030_20250623_02_T1".to_string(),
            asset_marker: ".TIF".to_string(),
            preview_asset: "rendered_preview".to_string(),
        }
    }
}

/// Default collection list
fn default_collections() -> Vec<CollectionDescriptor> {
    vec![
        CollectionDescriptor {
            name: "landsat-c2-l2".to_string(),
            description: "Landsat Collection 2 Level-2 Science Products, consisting of atmospherically corrected surface reflectance and surface temperature image data. Collection 2 Level-2 Science Products are available from August 22, 1982 to present. This dataset represents the global archive of Level-2 data from Landsat Collection 2 acquired by the Thematic Mapper onboard Landsat 4 and 5, the Enhanced Thematic Mapper onboard Landsat 7, and the Operatational Land Imager and Thermal Infrared Sensor onboard Landsat 8 and 9. Images are stored in cloud-optimized GeoTIFF format.".to_string(),
            source: "Microsoft Planetary Computer".to_string(),
            provider: "NASA, USGS".to_string(),
            backend: BackendKind::PlanetaryComputer,
        },
        CollectionDescriptor {
            name: "modis-09A1-061".to_string(),
            description: "The Moderate Resolution Imaging Spectroradiometer (MODIS) 09A1 Version 6.1 product provides an estimate of the surface spectral reflectance of MODIS Bands 1 through 7 corrected for atmospheric conditions such as gasses, aerosols, and Rayleigh scattering. Along with the seven 500 meter (m) reflectance bands are two quality layers and four observation bands. For each pixel, a value is selected from all the acquisitions within the 8-day composite period. The criteria for the pixel choice include cloud and solar zenith. When several acquisitions meet the criteria the pixel with the minimum channel 3 (blue) value is used.".to_string(),
            source: "Microsoft Planetary Computer".to_string(),
            provider: "NASA LP DAAC at the USGS EROS Center".to_string(),
            backend: BackendKind::PlanetaryComputer,
        },
        CollectionDescriptor {
            name: "roscosmos-opendata.MM".to_string(),
            description: "Глобальные мозайки. Солнечно-синхронная метеорологическая космическая система Метеор-М. По состоянию на 2025 год состоит из двух космических аппаратов. Радиометр МСУ-МР производит непрерывное сканирование.".to_string(),
            source: "Роскосмос".to_string(),
            provider: "Роскосмос".to_string(),
            backend: BackendKind::Roscosmos,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8000);
        assert!(!settings.general.debug);
        assert_eq!(settings.collections.len(), 3);
        assert_eq!(settings.preview.asset_marker, ".TIF");
    }

    #[test]
    fn test_backends_in_use() {
        let settings = Settings::default();
        assert_eq!(
            settings.backends_in_use(),
            vec![BackendKind::PlanetaryComputer, BackendKind::Roscosmos]
        );
    }

    #[test]
    fn test_invalid_request_timeout_rejected() {
        for value in ["-1", "0", ".nan", ".inf"] {
            let yaml = format!("outgoing:\n  request_timeout: {value}\n");
            let err = Settings::from_yaml(&yaml).unwrap_err();
            assert!(err.to_string().contains("request_timeout"), "{value}: {err}");
        }

        let settings = Settings::from_yaml("outgoing:\n  request_timeout: 2.5\n").unwrap();
        assert_eq!(settings.outgoing.request_timeout, 2.5);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
server:
  port: 9100
catalogs:
  roscosmos:
    stac_url: "http://localhost:9200/stac"
collections:
  - name: landsat-c2-l2
    description: Landsat
    source: Microsoft Planetary Computer
    provider: NASA, USGS
    backend: planetary_computer
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.bind_address, "127.0.0.1");
        assert_eq!(
            settings.catalogs.roscosmos.stac_url.as_deref(),
            Some("http://localhost:9200/stac")
        );
        assert_eq!(settings.catalogs.search_limit, 100);
        assert_eq!(settings.collections.len(), 1);
        assert_eq!(settings.backends_in_use(), vec![BackendKind::PlanetaryComputer]);
    }
}

//! HTTP client for making requests to catalog services

use crate::catalogs::{CatalogError, CatalogRequest, CatalogResponse, CatalogResult, HttpMethod};
use crate::config::OutgoingSettings;
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper configured from the outgoing settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> anyhow::Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: user_agent(settings.useragent_suffix.as_deref()),
        })
    }

    /// Execute a catalog request
    pub async fn execute(&self, request: CatalogRequest) -> CatalogResult<CatalogResponse> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        req_builder = req_builder
            .header("User-Agent", &self.user_agent)
            .header("Accept-Encoding", "gzip, deflate, br");

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        if let Some(body) = request.body {
            req_builder = req_builder.json(&body);
        }

        let response = req_builder
            .send()
            .await
            .map_err(|source| CatalogError::Network {
                url: request.url.clone(),
                source,
            })?;

        Self::parse_response(response).await
    }

    /// Simple GET request
    pub async fn get(&self, url: &str) -> CatalogResult<CatalogResponse> {
        self.execute(CatalogRequest::get(url)).await
    }

    /// Parse response into CatalogResponse
    async fn parse_response(response: Response) -> CatalogResult<CatalogResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let text = response
            .text()
            .await
            .map_err(|source| CatalogError::Network {
                url: url.clone(),
                source,
            })?;

        Ok(CatalogResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn user_agent(suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) if !suffix.is_empty() => {
            format!("stac-proxy/{} {}", crate::VERSION, suffix)
        }
        _ => format!("stac-proxy/{}", crate::VERSION),
    }
}

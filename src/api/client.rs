//! reqwest-backed client for the portfolio backend

use super::traits::{FeaturedReply, FormReply, PortfolioApi, ProjectSummary};
use crate::error::{FolioError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment variable overriding the configured base URL
pub const API_URL_ENV: &str = "FOLIO_API_URL";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the site's JSON and form endpoints
#[derive(Debug, Clone)]
pub struct HttpPortfolioApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPortfolioApi {
    /// Create a client for `base_url`, or for `FOLIO_API_URL` when it is set
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        let address = std::env::var(API_URL_ENV)
            .ok()
            .or_else(|| base_url.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let mut headers = HeaderMap::new();
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: parse_base(&address)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a site-relative path against the base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FolioError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(FolioError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Base URLs always end in a slash so relative joins keep their path prefix
fn parse_base(address: &str) -> Result<Url> {
    let normalized = if address.ends_with('/') {
        address.to_string()
    } else {
        format!("{address}/")
    };
    Url::parse(&normalized).map_err(|e| FolioError::InvalidUrl(format!("{address}: {e}")))
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn submit_form(&self, action: &str, fields: Vec<(String, String)>) -> Result<FormReply> {
        let url = self.endpoint(action)?;
        tracing::info!(%url, fields = fields.len(), "submitting form");
        let response = self.client.post(url).form(&fields).send().await?;
        Self::decode(response).await
    }

    async fn toggle_featured(&self, project_id: u64) -> Result<FeaturedReply> {
        let url = self.endpoint(&format!("admin/projects/{project_id}/toggle-featured"))?;
        tracing::debug!(%url, "toggling featured flag");
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn list_projects(&self) -> Result<Vec<ProjectSummary>> {
        let url = self.endpoint("api/projects")?;
        tracing::debug!(%url, "listing projects");
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }
}

//! HTTP client for the metrics API

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::trace;

use super::error::{FetchError, FetchResult, Resource};
use super::source::DashboardSource;
use super::types::{AlertRecord, MetricSample, ServiceRecord};

/// Default base URL of the metrics API
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Reusable HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub struct MetricsApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl MetricsApiClient {
    /// Create a client for `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of a resource
    pub fn url_for(&self, resource: Resource) -> String {
        format!("{}{}", self.base_url, resource.path())
    }

    /// GET a resource and decode its JSON body
    async fn get_json<T: DeserializeOwned>(&self, resource: Resource) -> FetchResult<T> {
        let url = self.url_for(resource);

        trace!("requesting {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { resource, status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport { resource, source })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { resource, source })
    }
}

#[async_trait]
impl DashboardSource for MetricsApiClient {
    async fn fetch_metrics(&self) -> FetchResult<Vec<MetricSample>> {
        self.get_json(Resource::Metrics).await
    }

    async fn fetch_services(&self) -> FetchResult<Vec<ServiceRecord>> {
        self.get_json(Resource::Services).await
    }

    async fn fetch_alerts(&self) -> FetchResult<Vec<AlertRecord>> {
        self.get_json(Resource::Alerts).await
    }
}

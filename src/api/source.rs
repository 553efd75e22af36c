//! Abstraction over where dashboard data comes from

use async_trait::async_trait;

use super::error::FetchResult;
use super::types::{AlertRecord, MetricSample, ServiceRecord};

/// The three independent read operations a poll cycle performs
///
/// [`MetricsApiClient`](super::MetricsApiClient) is the HTTP implementation;
/// the poller only depends on this trait so it can be driven by anything.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Metric samples in chart x-axis order
    async fn fetch_metrics(&self) -> FetchResult<Vec<MetricSample>>;

    /// Monitored services in display order
    async fn fetch_services(&self) -> FetchResult<Vec<ServiceRecord>>;

    /// Active alerts in display order
    async fn fetch_alerts(&self) -> FetchResult<Vec<AlertRecord>>;
}

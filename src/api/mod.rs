//! Client side of the metrics API
//!
//! The API exposes three read-only endpoints, all returning JSON arrays:
//!
//! - `GET /api/metrics` - system metric samples, in chart order
//! - `GET /api/services` - monitored containers/services
//! - `GET /api/alerts` - active alerts
//!
//! No request bodies, query parameters or authentication are involved.

pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::{DEFAULT_API_URL, MetricsApiClient};
pub use error::{FetchError, FetchResult, Resource};
pub use source::DashboardSource;
pub use types::{AlertRecord, HealthStatus, MetricSample, RecordId, ServiceRecord, Severity};

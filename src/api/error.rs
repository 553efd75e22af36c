//! Fetch error types

use reqwest::StatusCode;
use thiserror::Error;

/// The three read-only resources exposed by the metrics API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Metrics,
    Services,
    Alerts,
}

impl Resource {
    /// Request path relative to the API base URL
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Metrics => "/api/metrics",
            Resource::Services => "/api/services",
            Resource::Alerts => "/api/alerts",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Metrics => "metrics",
            Resource::Services => "services",
            Resource::Alerts => "alerts",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result type alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// A failed read of one resource
///
/// The dashboard handles every variant the same way (keep the previous data);
/// the variants only make the logs useful.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, timeout, or the body could not be read
    #[error("request for {resource} failed: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response
    #[error("{resource} endpoint responded with {status}")]
    Status {
        resource: Resource,
        status: StatusCode,
    },

    /// Body was not a valid payload for the resource
    #[error("malformed {resource} payload: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// The resource whose fetch failed
    pub fn resource(&self) -> Resource {
        match self {
            FetchError::Transport { resource, .. }
            | FetchError::Status { resource, .. }
            | FetchError::Decode { resource, .. } => *resource,
        }
    }
}

//! Payload types served by the metrics API
//!
//! Every collection is a JSON array. Payloads are decoded into these types at the
//! boundary; a missing required field or a wrongly typed value fails the whole
//! resource for that poll cycle.

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers and classifications
// ============================================================================

/// Identifier of a service or alert
///
/// The API serves both numeric ids and string ids (container ids, alert keys
/// like `cpu_high`), so either is accepted. Ids are only displayed, so any JSON
/// number is kept as-is: floats and values past `i64::MAX` included.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// Alert severity
///
/// Only `critical` carries meaning. Any other value is kept verbatim so it can
/// still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Critical,
    Other(String),
}

impl Severity {
    pub fn is_critical(&self) -> bool {
        matches!(self, Severity::Critical)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Critical => "critical",
            Severity::Other(raw) => raw,
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        if raw == "critical" {
            Severity::Critical
        } else {
            Severity::Other(raw)
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => "critical".to_string(),
            Severity::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Health status of a monitored service
///
/// Only `healthy` counts as healthy; `unhealthy`, `degraded` or anything else
/// the API invents is treated the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HealthStatus {
    Healthy,
    Other(String),
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    pub fn as_str(&self) -> &str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for HealthStatus {
    fn from(raw: String) -> Self {
        if raw == "healthy" {
            HealthStatus::Healthy
        } else {
            HealthStatus::Other(raw)
        }
    }
}

impl From<HealthStatus> for String {
    fn from(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Healthy => "healthy".to_string(),
            HealthStatus::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Records
// ============================================================================

/// One point of the system metrics time series
///
/// The position in the served array is the x-axis position; samples are never
/// re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Label for the x-axis (e.g. `"14:00"`)
    pub timestamp: String,
    pub cpu: f64,
    pub memory: f64,
    pub disk: f64,
}

/// A monitored container/service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub status: HealthStatus,
    /// Human readable uptime, when the API reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<String>,
}

/// An active alert condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub severity: Severity,
}

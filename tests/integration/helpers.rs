//! Helper functions for integration tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use devops_dashboard::api::{
    AlertRecord, DashboardSource, FetchError, FetchResult, MetricSample, Resource, ServiceRecord,
};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The single-sample payload set used across tests
pub fn scenario_metrics() -> serde_json::Value {
    json!([{ "timestamp": "00:00", "cpu": 10, "memory": 20, "disk": 5 }])
}

pub fn scenario_services() -> serde_json::Value {
    json!([{ "id": 1, "name": "api", "status": "healthy" }])
}

pub fn scenario_alerts() -> serde_json::Value {
    json!([])
}

/// Mount a JSON response for one endpoint
pub async fn mount_json(server: &MockServer, resource: Resource, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(resource.path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount an error status for one endpoint
pub async fn mount_status(server: &MockServer, resource: Resource, status: u16) {
    Mock::given(method("GET"))
        .and(path(resource.path()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mount the three scenario payloads
pub async fn mount_scenario(server: &MockServer) {
    mount_json(server, Resource::Metrics, scenario_metrics()).await;
    mount_json(server, Resource::Services, scenario_services()).await;
    mount_json(server, Resource::Alerts, scenario_alerts()).await;
}

/// In-process source that counts cycles and can be made slow or failing
#[derive(Default)]
pub struct ScriptedSource {
    /// Number of cycles started (one `fetch_metrics` call per cycle)
    pub cycles: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    delay: Duration,
    fail_alerts: AtomicBool,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every metrics fetch takes `delay` of (tokio) time
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    pub fn set_fail_alerts(&self, fail: bool) {
        self.fail_alerts.store(fail, Ordering::SeqCst);
    }

    pub fn cycles(&self) -> usize {
        self.cycles.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardSource for ScriptedSource {
    async fn fetch_metrics(&self) -> FetchResult<Vec<MetricSample>> {
        let cycle = self.cycles.fetch_add(1, Ordering::SeqCst) + 1;
        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        Ok(vec![MetricSample {
            timestamp: format!("cycle-{cycle}"),
            cpu: cycle as f64,
            memory: 50.0,
            disk: 70.0,
        }])
    }

    async fn fetch_services(&self) -> FetchResult<Vec<ServiceRecord>> {
        Ok(vec![])
    }

    async fn fetch_alerts(&self) -> FetchResult<Vec<AlertRecord>> {
        if self.fail_alerts.load(Ordering::SeqCst) {
            return Err(FetchError::Status {
                resource: Resource::Alerts,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(vec![])
    }
}

#[cfg(feature = "dashboard")]
pub mod render {
    use ratatui::{Terminal, backend::TestBackend};

    /// Rendered buffer as plain text, one line per row
    pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();

        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }

        text
    }
}

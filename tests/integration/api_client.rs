//! HTTP client tests against a mock metrics API

use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use devops_dashboard::api::{
    DashboardSource, FetchError, HealthStatus, MetricsApiClient, RecordId, Resource, Severity,
};
use devops_dashboard::poller::PollerHandle;
use devops_dashboard::state::{DashboardState, Transition};
use pretty_assertions::assert_eq;
use serde_json::json;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::*;

fn client_for(server: &MockServer) -> MetricsApiClient {
    MetricsApiClient::new(server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_fetches_all_three_resources() {
    let server = MockServer::start().await;
    mount_scenario(&server).await;
    let client = client_for(&server);

    let metrics = client.fetch_metrics().await.unwrap();
    let services = client.fetch_services().await.unwrap();
    let alerts = client.fetch_alerts().await.unwrap();

    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].timestamp, "00:00");
    assert_eq!(metrics[0].cpu, 10.0);
    assert_eq!(services[0].id, RecordId::Number(1.into()));
    assert_eq!(services[0].status, HealthStatus::Healthy);
    assert!(alerts.is_empty());
}

#[tokio::test]
async fn test_decodes_backend_style_alerts() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        Resource::Alerts,
        json!([
            {
                "id": "cpu_high",
                "title": "High CPU Usage",
                "description": "CPU usage is at 93.5%",
                "severity": "critical"
            },
            {
                "id": "disk_high",
                "title": "High Disk Usage",
                "description": "Disk usage is at 91.2%",
                "severity": "warning"
            }
        ]),
    )
    .await;

    let alerts = client_for(&server).fetch_alerts().await.unwrap();

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].severity, Severity::Critical);
    assert_eq!(alerts[1].severity, Severity::Other("warning".to_string()));
    assert_eq!(alerts[1].id, RecordId::Text("disk_high".to_string()));
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let server = MockServer::start().await;
    mount_status(&server, Resource::Services, 500).await;

    let err = client_for(&server).fetch_services().await.unwrap_err();

    assert_matches!(
        err,
        FetchError::Status {
            resource: Resource::Services,
            ..
        }
    );
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{invalid json"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_metrics().await.unwrap_err();

    assert_matches!(
        err,
        FetchError::Decode {
            resource: Resource::Metrics,
            ..
        }
    );
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;
    // An object instead of an array, and a service without a name
    mount_json(&server, Resource::Metrics, json!({ "cpu": 10 })).await;
    mount_json(&server, Resource::Services, json!([{ "id": 1, "status": "healthy" }])).await;
    let client = client_for(&server);

    assert_matches!(
        client.fetch_metrics().await,
        Err(FetchError::Decode { .. })
    );
    assert_matches!(
        client.fetch_services().await,
        Err(FetchError::Decode { .. })
    );
}

#[tokio::test]
async fn test_failed_alerts_keep_previous_alerts() {
    let server = MockServer::start().await;
    mount_json(&server, Resource::Metrics, scenario_metrics()).await;
    mount_json(&server, Resource::Services, scenario_services()).await;
    mount_json(
        &server,
        Resource::Alerts,
        json!([{ "id": 7, "title": "High Memory Usage", "severity": "critical" }]),
    )
    .await;

    let (report_tx, mut report_rx) = mpsc::unbounded_channel();
    let handle = PollerHandle::spawn(
        Arc::new(client_for(&server)),
        Duration::from_secs(3600),
        report_tx,
    );
    let mut state = DashboardState::new();

    // Initial cycle: everything succeeds
    let first = report_rx.recv().await.unwrap();
    assert!(first.is_complete());
    state.apply(first);
    assert_eq!(state.alerts().len(), 1);

    // Second cycle: new metrics and services, alerts endpoint broken
    server.reset().await;
    mount_json(
        &server,
        Resource::Metrics,
        json!([
            { "timestamp": "00:00", "cpu": 10, "memory": 20, "disk": 5 },
            { "timestamp": "01:00", "cpu": 30, "memory": 25, "disk": 5 }
        ]),
    )
    .await;
    mount_json(
        &server,
        Resource::Services,
        json!([{ "id": 2, "name": "db", "status": "unhealthy" }]),
    )
    .await;
    mount_status(&server, Resource::Alerts, 503).await;

    handle.poll_now().await.unwrap();
    let second = report_rx.recv().await.unwrap();
    assert!(second.alerts.is_err());

    assert_eq!(state.apply(second), Transition::Updated);
    assert_eq!(state.metrics().len(), 2);
    assert_eq!(state.services()[0].name, "db");
    assert_eq!(state.alerts().len(), 1);
    assert_eq!(state.alerts()[0].title, "High Memory Usage");

    handle.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_api_leaves_state_unchanged() {
    // Nothing is listening on this port
    let client = MetricsApiClient::new("http://127.0.0.1:9999", Duration::from_secs(2)).unwrap();

    let (report_tx, mut report_rx) = mpsc::unbounded_channel();
    let handle = PollerHandle::spawn(Arc::new(client), Duration::from_secs(3600), report_tx);
    let mut state = DashboardState::new();

    let report = report_rx.recv().await.unwrap();

    assert_eq!(state.apply(report), Transition::Unchanged);
    assert!(state.metrics().is_empty());
    assert!(state.last_update().is_none());

    handle.shutdown().await.unwrap();
}

//! End-to-end: mock API → poller → state → rendered terminal

use std::sync::Arc;
use std::time::Duration;

use devops_dashboard::api::MetricsApiClient;
use devops_dashboard::dashboard::Config;
use devops_dashboard::dashboard::ui::{self, alerts, metrics, services};
use devops_dashboard::poller::PollerHandle;
use devops_dashboard::state::{DashboardState, Transition};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;
use wiremock::MockServer;

use crate::helpers::mount_scenario;
use crate::helpers::render::buffer_text;

#[tokio::test]
async fn test_single_sample_dashboard() {
    let server = MockServer::start().await;
    mount_scenario(&server).await;

    let config = Config {
        api_url: server.uri(),
        ..Config::default()
    };
    let client = MetricsApiClient::new(config.api_url.clone(), config.timeout()).unwrap();
    let (report_tx, mut report_rx) = mpsc::unbounded_channel();
    let handle = PollerHandle::spawn(Arc::new(client), config.poll_interval(), report_tx);

    let mut state = DashboardState::new();
    let report = tokio::time::timeout(Duration::from_secs(5), report_rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(state.apply(report), Transition::Updated);

    handle.shutdown().await.unwrap();

    // One chart, one point on each of the three series
    let lines = metrics::series(state.metrics());
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.points.len() == 1));
    assert_eq!(lines[0].points[0], (0.0, 10.0));

    // One healthy service card named "api"
    let services::ServicesSection::Cards(cards) = services::section(state.services()) else {
        panic!("expected service cards");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "api");
    assert_eq!(cards[0].affordance, services::HealthAffordance::Healthy);

    // The informational alerts banner
    assert_eq!(
        alerts::section(state.alerts()),
        alerts::AlertsSection::Banner(alerts::NO_ALERTS)
    );

    let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
    terminal
        .draw(|frame| ui::render(frame, &state, &mut ui::ViewState::new(), &config))
        .unwrap();
    let text = buffer_text(&terminal);

    assert!(text.contains(ui::HEADER_TITLE));
    assert_eq!(text.matches("No active alerts.").count(), 1);
    assert!(text.contains("Status: healthy"));
    assert!(!text.contains("No containers found."));
}

//! Dashboard state management
//!
//! The state is only ever changed by [`DashboardState::apply`], which consumes
//! a finished poll cycle. Collections are replaced wholesale; a resource that
//! failed to fetch keeps whatever the last successful cycle delivered.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::api::{AlertRecord, FetchResult, MetricSample, ServiceRecord};
use crate::poller::PollReport;

/// What [`DashboardState::apply`] did with a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// At least one collection was replaced
    Updated,

    /// Every fetch failed; the previous data stays on screen
    Unchanged,

    /// The report belongs to a cycle older than one already applied
    Stale,
}

/// Everything the dashboard renders
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    metrics: Vec<MetricSample>,
    services: Vec<ServiceRecord>,
    alerts: Vec<AlertRecord>,

    /// Cycle number of the newest applied report
    last_cycle: Option<u64>,

    /// Completion time of the newest report with at least one success
    last_update: Option<DateTime<Utc>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metric samples in chart order
    pub fn metrics(&self) -> &[MetricSample] {
        &self.metrics
    }

    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn last_cycle(&self) -> Option<u64> {
        self.last_cycle
    }

    /// Apply the outcome of a poll cycle
    pub fn apply(&mut self, report: PollReport) -> Transition {
        if self.last_cycle.is_some_and(|last| report.cycle <= last) {
            debug!(
                cycle = report.cycle,
                last_cycle = ?self.last_cycle,
                "discarding superseded poll report"
            );
            return Transition::Stale;
        }
        self.last_cycle = Some(report.cycle);

        let updated = [
            replace_on_success(&mut self.metrics, report.metrics),
            replace_on_success(&mut self.services, report.services),
            replace_on_success(&mut self.alerts, report.alerts),
        ];

        if updated.contains(&true) {
            self.last_update = Some(report.completed_at);
            trace!(
                cycle = report.cycle,
                metrics = self.metrics.len(),
                services = self.services.len(),
                alerts = self.alerts.len(),
                "applied poll report"
            );
            Transition::Updated
        } else {
            debug!(cycle = report.cycle, "poll cycle failed, keeping previous data");
            Transition::Unchanged
        }
    }
}

/// Poll-success replaces the collection, poll-failure leaves it alone
///
/// Failures were already logged by the poller.
fn replace_on_success<T>(slot: &mut Vec<T>, result: FetchResult<Vec<T>>) -> bool {
    match result {
        Ok(fresh) => {
            *slot = fresh;
            true
        }
        Err(_) => false,
    }
}

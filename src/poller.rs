//! Poller - the repeating refresh task behind the dashboard
//!
//! One actor per dashboard. It runs a poll cycle immediately, then once per
//! interval, and hands every result to the view as a [`PollReport`].
//!
//! ## Message Flow
//!
//! ```text
//! Timer tick → fetch metrics/services/alerts concurrently → PollReport → view
//!     ↑
//!     └─── Commands (PollNow, Refresh, Shutdown)
//! ```
//!
//! Cycles run one at a time inside the actor, so a slow API delays the next
//! tick instead of producing overlapping cycles. Each report carries a
//! monotonically increasing cycle number so the view can drop anything older
//! than what it already shows.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, instrument, trace, warn};

use crate::api::{AlertRecord, DashboardSource, FetchResult, MetricSample, ServiceRecord};

/// Default time between poll cycles
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Outcome of one poll cycle
///
/// Each resource is fetched independently, so each carries its own result.
#[derive(Debug)]
pub struct PollReport {
    /// Sequence number of the cycle (starts at 1)
    pub cycle: u64,

    /// When the last of the three requests finished
    pub completed_at: DateTime<Utc>,

    pub metrics: FetchResult<Vec<MetricSample>>,
    pub services: FetchResult<Vec<ServiceRecord>>,
    pub alerts: FetchResult<Vec<AlertRecord>>,
}

impl PollReport {
    /// True when all three resources were fetched
    pub fn is_complete(&self) -> bool {
        self.metrics.is_ok() && self.services.is_ok() && self.alerts.is_ok()
    }
}

/// Commands that can be sent to a [`PollerActor`]
#[derive(Debug)]
pub enum PollerCommand {
    /// Run a cycle now and reply with its cycle number
    PollNow { respond_to: oneshot::Sender<u64> },

    /// Run a cycle now without waiting for it
    Refresh,

    /// Stop polling
    Shutdown,
}

/// Actor that polls a [`DashboardSource`] on a fixed interval
pub struct PollerActor {
    source: Arc<dyn DashboardSource>,

    command_rx: mpsc::Receiver<PollerCommand>,

    /// Where finished cycles go; the view owns the receiving end
    report_tx: mpsc::UnboundedSender<PollReport>,

    interval_duration: Duration,

    /// Number assigned to the next cycle
    next_cycle: u64,
}

impl PollerActor {
    pub fn new(
        source: Arc<dyn DashboardSource>,
        interval_duration: Duration,
        command_rx: mpsc::Receiver<PollerCommand>,
        report_tx: mpsc::UnboundedSender<PollReport>,
    ) -> Self {
        Self {
            source,
            command_rx,
            report_tx,
            interval_duration,
            next_cycle: 1,
        }
    }

    /// Run the actor's main loop
    ///
    /// Runs until a Shutdown command arrives, the handle is dropped, or the
    /// view stops listening for reports.
    #[instrument(skip(self), fields(interval = ?self.interval_duration))]
    pub async fn run(mut self) {
        debug!("starting poller");

        let mut ticker = interval(self.interval_duration);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // First tick completes immediately: the initial fetch
                _ = ticker.tick() => {
                    if self.poll_cycle().await.is_none() {
                        break;
                    }
                }

                cmd = self.command_rx.recv() => {
                    match cmd {
                        Some(PollerCommand::PollNow { respond_to }) => {
                            debug!("received PollNow command");
                            match self.poll_cycle().await {
                                Some(cycle) => {
                                    let _ = respond_to.send(cycle);
                                }
                                None => break,
                            }
                        }

                        Some(PollerCommand::Refresh) => {
                            debug!("received Refresh command");
                            if self.poll_cycle().await.is_none() {
                                break;
                            }
                            ticker.reset();
                        }

                        Some(PollerCommand::Shutdown) => {
                            debug!("received shutdown command");
                            break;
                        }

                        None => {
                            debug!("poller handle dropped, shutting down");
                            break;
                        }
                    }
                }
            }
        }

        debug!("poller stopped");
    }

    /// Fetch all three resources concurrently and publish the report
    ///
    /// Returns the cycle number, or `None` once nobody receives reports.
    #[instrument(skip(self), fields(cycle = self.next_cycle))]
    async fn poll_cycle(&mut self) -> Option<u64> {
        let cycle = self.next_cycle;
        self.next_cycle += 1;

        trace!("starting poll cycle");

        let (metrics, services, alerts) = tokio::join!(
            self.source.fetch_metrics(),
            self.source.fetch_services(),
            self.source.fetch_alerts(),
        );

        for err in [metrics.as_ref().err(), services.as_ref().err(), alerts.as_ref().err()]
            .into_iter()
            .flatten()
        {
            warn!(resource = %err.resource(), "fetch failed: {err}");
        }

        let report = PollReport {
            cycle,
            completed_at: Utc::now(),
            metrics,
            services,
            alerts,
        };

        if self.report_tx.send(report).is_err() {
            debug!("report receiver dropped, shutting down");
            return None;
        }

        Some(cycle)
    }
}

/// Handle for controlling a [`PollerActor`]
///
/// Dropping the handle stops the actor as well; [`PollerHandle::shutdown`]
/// additionally waits until it has exited.
pub struct PollerHandle {
    sender: mpsc::Sender<PollerCommand>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Spawn a poller; the first cycle starts right away
    pub fn spawn(
        source: Arc<dyn DashboardSource>,
        interval_duration: Duration,
        report_tx: mpsc::UnboundedSender<PollReport>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);

        let actor = PollerActor::new(source, interval_duration, cmd_rx, report_tx);
        let task = tokio::spawn(actor.run());

        Self {
            sender: cmd_tx,
            task,
        }
    }

    /// Run a cycle now and wait for it; returns the cycle number
    pub async fn poll_now(&self) -> Result<u64> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(PollerCommand::PollNow { respond_to: tx })
            .await
            .context("failed to send PollNow command")?;

        rx.await.context("poller stopped before finishing the cycle")
    }

    /// Ask for a cycle without waiting
    ///
    /// Ignored if the command queue is full, since a cycle is then already due.
    pub fn refresh(&self) {
        if let Err(e) = self.sender.try_send(PollerCommand::Refresh) {
            debug!("refresh request dropped: {e}");
        }
    }

    /// True once the actor has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop polling and wait for the actor to exit
    ///
    /// An in-flight cycle is allowed to finish; no cycle starts afterwards.
    pub async fn shutdown(self) -> Result<()> {
        // The actor may already be gone (receiver dropped); that's fine
        let _ = self.sender.send(PollerCommand::Shutdown).await;

        self.task
            .await
            .inspect_err(|err| error!(error = %err, "poller task did not finish cleanly"))
            .context("poller task panicked")?;
        Ok(())
    }
}

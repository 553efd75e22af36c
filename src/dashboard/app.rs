//! Main application logic

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::{DashboardSource, MetricsApiClient};
use crate::poller::{PollReport, PollerHandle};
use crate::state::{DashboardState, Transition};

use super::{config::Config, ui, ui::ViewState};

/// How long the event loop waits for a key press before redrawing
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// The dashboard view: owns the state and the poller feeding it
pub struct App {
    config: Config,
    state: DashboardState,
    view: ViewState,
    report_rx: mpsc::UnboundedReceiver<PollReport>,
    poller: PollerHandle,
}

impl App {
    /// Create the view and start polling
    ///
    /// Must be called inside a Tokio runtime. The first poll cycle starts
    /// immediately, before the terminal is even set up.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let client = MetricsApiClient::new(config.api_url.clone(), config.timeout())
            .context("failed to build HTTP client")?;

        Ok(Self::with_source(config, Arc::new(client)))
    }

    /// Create the view on top of any data source
    pub fn with_source(config: Config, source: Arc<dyn DashboardSource>) -> Self {
        let (report_tx, report_rx) = mpsc::unbounded_channel();
        let poller = PollerHandle::spawn(source, config.poll_interval(), report_tx);

        info!(
            api_url = %config.api_url,
            interval_secs = config.refresh_interval,
            "dashboard started"
        );

        Self {
            config,
            state: DashboardState::new(),
            view: ViewState::new(),
            report_rx,
            poller,
        }
    }

    /// Run the application until the user quits
    ///
    /// The terminal is restored and the poller shut down on the way out,
    /// whether the loop ended normally or with an error. The first error
    /// encountered is returned.
    pub async fn run(mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_event_loop(&mut terminal);
        let restored = restore_terminal(&mut terminal);

        let stopped = self.poller.shutdown().await;
        info!("dashboard stopped");

        result.and(restored).and(stopped)
    }

    /// Main event loop
    fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        loop {
            // Apply finished poll cycles (non-blocking)
            while let Ok(report) = self.report_rx.try_recv() {
                self.handle_report(report);
            }

            terminal.draw(|f| ui::render(f, &self.state, &mut self.view, &self.config))?;

            if event::poll(INPUT_POLL_TIMEOUT)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key_event(key.code)
            {
                break; // Quit
            }
        }

        Ok(())
    }

    fn handle_report(&mut self, report: PollReport) -> Transition {
        let cycle = report.cycle;
        let transition = self.state.apply(report);
        match transition {
            Transition::Updated => debug!(cycle, "dashboard updated"),
            Transition::Unchanged => debug!(cycle, "poll cycle failed, showing previous data"),
            Transition::Stale => debug!(cycle, "ignored superseded poll cycle"),
        }
        transition
    }

    /// Handle keyboard event; returns true when the user wants to quit
    fn handle_key_event(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                debug!("manual refresh requested");
                self.poller.refresh();
            }
            KeyCode::Down | KeyCode::Char('j') => self.view.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.view.scroll_up(),
            KeyCode::Tab | KeyCode::BackTab => self.view.toggle_focus(),
            _ => {}
        }

        false
    }
}

/// Leave raw mode and the alternate screen, attempting every step
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("failed to show cursor");

    raw.and(screen).and(cursor)
}

//! Main dashboard layout

use chrono::Local;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::dashboard::config::Config;
use crate::state::DashboardState;

use super::view::{Focus, ViewState};
use super::widgets::whole_rows;
use super::{alerts, metrics, services};

pub const HEADER_TITLE: &str = "DevOps Dashboard";

/// Rows the chart always gets before the card sections
const MIN_CHART_HEIGHT: u16 = 10;

/// Header and footer, three rows each
const CHROME_HEIGHT: u16 = 6;

/// Requested and minimum height of a card section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionSize {
    wanted: u16,
    min: u16,
}

/// Render the whole dashboard
///
/// Output depends only on `state`, the scroll position in `view` and the
/// (static) configuration. Scroll offsets are clamped to what exists.
pub fn render(frame: &mut Frame, state: &DashboardState, view: &mut ViewState, config: &Config) {
    let area = frame.area();

    let (alerts_height, services_height) = card_section_heights(
        area.height
            .saturating_sub(CHROME_HEIGHT)
            .saturating_sub(MIN_CHART_HEIGHT),
        SectionSize {
            wanted: alerts::height(state.alerts(), area.width),
            min: alerts::min_height(state.alerts(), area.width),
        },
        alerts::CARD_HEIGHT,
        SectionSize {
            wanted: services::height(state.services(), area.width),
            min: services::min_height(state.services(), area.width),
        },
        services::CARD_HEIGHT,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(alerts_height),   // Alerts
            Constraint::Min(MIN_CHART_HEIGHT),   // Chart
            Constraint::Length(services_height), // Services
            Constraint::Length(3),               // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], config);
    alerts::render(
        frame,
        chunks[1],
        state,
        &mut view.alerts,
        view.focus == Focus::Alerts,
    );
    metrics::render(frame, chunks[2], state);
    services::render(
        frame,
        chunks[3],
        state,
        &mut view.services,
        view.focus == Focus::Services,
    );
    render_footer(frame, chunks[4], state, config);
}

/// Share the rows left over by header, chart and footer between the card sections
///
/// When both fit they get what they ask for. Otherwise alerts are held to a
/// third of the space (but at least one card row) and services take the rest;
/// both are trimmed to whole card rows.
fn card_section_heights(
    available: u16,
    alerts: SectionSize,
    alert_card_height: u16,
    services: SectionSize,
    service_card_height: u16,
) -> (u16, u16) {
    if alerts.wanted.saturating_add(services.wanted) <= available {
        return (alerts.wanted, services.wanted);
    }

    let alerts_height = alerts.wanted.min(alerts.min.max(available / 3));
    let alerts_height = whole_rows(alerts_height, alert_card_height).max(alerts.min);

    let services_height = services
        .wanted
        .min(services.min.max(available.saturating_sub(alerts_height)));
    let services_height = whole_rows(services_height, service_card_height).max(services.min);

    (alerts_height, services_height)
}

/// Render header with the dashboard title and API location
fn render_header(frame: &mut Frame, area: Rect, config: &Config) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            HEADER_TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(&config.api_url, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render footer with keybindings and refresh information
fn render_footer(frame: &mut Frame, area: Rect, state: &DashboardState, config: &Config) {
    let mut footer_text = vec![
        Span::raw("Refresh: "),
        Span::styled("R", Style::default().fg(Color::Yellow)),
        Span::raw(" | Quit: "),
        Span::styled("Q", Style::default().fg(Color::Yellow)),
        Span::raw(" | Scroll: "),
        Span::styled("J/K", Style::default().fg(Color::Yellow)),
        Span::raw(" | Section: "),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(format!(" | Polling every {}s | ", config.refresh_interval)),
    ];

    match state.last_update() {
        Some(updated) => footer_text.push(Span::styled(
            format!("Last updated {}", updated.with_timezone(&Local).format("%H:%M:%S")),
            Style::default().fg(Color::Green),
        )),
        None => footer_text.push(Span::styled(
            "Waiting for data",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let footer =
        Paragraph::new(Line::from(footer_text)).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

//! Active alerts section

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::api::{AlertRecord, Severity};
use crate::state::DashboardState;

use super::widgets::{
    GridScroll, card_section_block, grid_page, info_banner, min_section_height, page_title,
    section_height,
};

pub const TITLE: &str = "Active Alerts";

pub const NO_ALERTS: &str = "No active alerts.";

/// Rows per alert card: border, two lines of description, border
pub const CARD_HEIGHT: u16 = 4;

/// Visual treatment of an alert card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertVariant {
    Error,
    Warning,
}

impl AlertVariant {
    /// Critical alerts are errors, everything else is a warning
    pub fn for_severity(severity: &Severity) -> Self {
        if severity.is_critical() {
            AlertVariant::Error
        } else {
            AlertVariant::Warning
        }
    }

    pub fn color(self) -> Color {
        match self {
            AlertVariant::Error => Color::Red,
            AlertVariant::Warning => Color::Yellow,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AlertVariant::Error => "✖",
            AlertVariant::Warning => "✔",
        }
    }
}

/// One alert as it will be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertCard<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub variant: AlertVariant,
}

/// Content of the alerts section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertsSection<'a> {
    Banner(&'static str),
    Cards(Vec<AlertCard<'a>>),
}

/// Decide what the alerts section shows
pub fn section(alerts: &[AlertRecord]) -> AlertsSection<'_> {
    if alerts.is_empty() {
        return AlertsSection::Banner(NO_ALERTS);
    }

    AlertsSection::Cards(
        alerts
            .iter()
            .map(|alert| AlertCard {
                title: &alert.title,
                description: &alert.description,
                variant: AlertVariant::for_severity(&alert.severity),
            })
            .collect(),
    )
}

/// Rows the section needs at the given width
pub fn height(alerts: &[AlertRecord], width: u16) -> u16 {
    section_height(alerts.len(), width.saturating_sub(2), CARD_HEIGHT)
}

/// Fewest rows that still show one full row of cards (or the banner)
pub fn min_height(alerts: &[AlertRecord], width: u16) -> u16 {
    min_section_height(alerts.len(), width.saturating_sub(2), CARD_HEIGHT)
}

/// Render the alerts section
///
/// Only whole card rows are drawn; the rest is reached by scrolling.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    scroll: &mut GridScroll,
    focused: bool,
) {
    match section(state.alerts()) {
        AlertsSection::Banner(message) => {
            let block = card_section_block(TITLE, focused);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(info_banner(message), inner);
        }
        AlertsSection::Cards(cards) => {
            let inner = card_section_block(TITLE, focused).inner(area);
            let page = grid_page(inner, cards.len(), CARD_HEIGHT, scroll);

            frame.render_widget(
                card_section_block(page_title(TITLE, &page, cards.len()), focused),
                area,
            );
            for (card, cell) in cards[page.range.clone()].iter().zip(page.cells) {
                render_card(frame, cell, card);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &AlertCard) {
    let color = card.variant.color();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Line::from(vec![
            Span::styled(format!(" {} ", card.variant.icon()), Style::default().fg(color)),
            Span::styled(
                card.title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]));

    let description = Paragraph::new(card.description)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(description, area);
}

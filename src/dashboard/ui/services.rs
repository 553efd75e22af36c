//! Container services section

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::api::{HealthStatus, ServiceRecord};
use crate::state::DashboardState;

use super::widgets::{
    GridScroll, card_section_block, grid_page, info_banner, min_section_height, page_title,
    section_height,
};

pub const TITLE: &str = "Container Services";

pub const NO_SERVICES: &str = "No containers found.";

/// Rows per service card: border, name, description, status, uptime, border
pub const CARD_HEIGHT: u16 = 6;

/// Light green card background
pub const HEALTHY_BACKGROUND: Color = Color::Rgb(0xc8, 0xe6, 0xc9);

/// Light red card background
pub const UNHEALTHY_BACKGROUND: Color = Color::Rgb(0xff, 0xeb, 0xee);

/// Visual treatment of a service card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthAffordance {
    Healthy,
    Unhealthy,
}

impl HealthAffordance {
    pub fn for_status(status: &HealthStatus) -> Self {
        if status.is_healthy() {
            HealthAffordance::Healthy
        } else {
            HealthAffordance::Unhealthy
        }
    }

    pub fn background(self) -> Color {
        match self {
            HealthAffordance::Healthy => HEALTHY_BACKGROUND,
            HealthAffordance::Unhealthy => UNHEALTHY_BACKGROUND,
        }
    }

    /// Color of the status text
    pub fn status_color(self) -> Color {
        match self {
            HealthAffordance::Healthy => Color::Green,
            HealthAffordance::Unhealthy => Color::Red,
        }
    }
}

/// One service as it will be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceCard<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub status: &'a str,
    pub uptime: Option<&'a str>,
    pub affordance: HealthAffordance,
}

/// Content of the services section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServicesSection<'a> {
    Banner(&'static str),
    Cards(Vec<ServiceCard<'a>>),
}

/// Decide what the services section shows
pub fn section(services: &[ServiceRecord]) -> ServicesSection<'_> {
    if services.is_empty() {
        return ServicesSection::Banner(NO_SERVICES);
    }

    ServicesSection::Cards(
        services
            .iter()
            .map(|service| ServiceCard {
                name: &service.name,
                description: &service.description,
                status: service.status.as_str(),
                uptime: service.uptime.as_deref(),
                affordance: HealthAffordance::for_status(&service.status),
            })
            .collect(),
    )
}

/// Rows the section needs at the given width
pub fn height(services: &[ServiceRecord], width: u16) -> u16 {
    section_height(services.len(), width.saturating_sub(2), CARD_HEIGHT)
}

/// Fewest rows that still show one full row of cards (or the banner)
pub fn min_height(services: &[ServiceRecord], width: u16) -> u16 {
    min_section_height(services.len(), width.saturating_sub(2), CARD_HEIGHT)
}

/// Render the services section
///
/// Only whole card rows are drawn; the rest is reached by scrolling.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    scroll: &mut GridScroll,
    focused: bool,
) {
    match section(state.services()) {
        ServicesSection::Banner(message) => {
            let block = card_section_block(TITLE, focused);
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(info_banner(message), inner);
        }
        ServicesSection::Cards(cards) => {
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

fn render_card(frame: &mut Frame, area: Rect, card: &ServiceCard) {
    // Dark text, the backgrounds are pastel
    let base = Style::default()
        .bg(card.affordance.background())
        .fg(Color::Black);

    let mut lines = vec![
        Line::from(Span::styled(
            card.name,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.description,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                card.status,
                Style::default()
                    .fg(card.affordance.status_color())
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    if let Some(uptime) = card.uptime {
        lines.push(Line::from(vec![
            Span::raw("Uptime: "),
            Span::raw(uptime),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .style(base)
        .block(Block::default().borders(Borders::ALL).style(base));

    frame.render_widget(paragraph, area);
}

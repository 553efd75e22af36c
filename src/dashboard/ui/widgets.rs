//! Reusable UI widgets

use std::borrow::Cow;
use std::ops::Range;

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Rows taken by a section's own border
pub const SECTION_CHROME: u16 = 2;

/// Number of card columns for a given width (one, two or three per row)
pub fn columns_for_width(width: u16) -> usize {
    match width {
        w if w >= 120 => 3,
        w if w >= 80 => 2,
        _ => 1,
    }
}

/// Height of a card section holding `count` cards of `card_height` rows
///
/// An empty section still needs one row for its banner.
pub fn section_height(count: usize, width: u16, card_height: u16) -> u16 {
    if count == 0 {
        return SECTION_CHROME + 1;
    }

    let rows = count.div_ceil(columns_for_width(width));
    let rows = u16::try_from(rows).unwrap_or(u16::MAX);
    rows.saturating_mul(card_height).saturating_add(SECTION_CHROME)
}

/// Smallest useful height of a card section: one full row of cards
pub fn min_section_height(count: usize, width: u16, card_height: u16) -> u16 {
    section_height(count, width, card_height).min(card_height.saturating_add(SECTION_CHROME))
}

/// Round a section height down so it holds whole card rows only
pub fn whole_rows(height: u16, card_height: u16) -> u16 {
    if height <= SECTION_CHROME || card_height == 0 {
        return height;
    }

    let rows = (height - SECTION_CHROME) / card_height;
    rows * card_height + SECTION_CHROME
}

/// Scroll position of a card grid, counted in card rows
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GridScroll {
    offset: usize,
}

impl GridScroll {
    /// First visible card row
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Keep the last page full: never scroll past the final row
    fn clamp(&mut self, total_rows: usize, visible_rows: usize) {
        self.offset = self.offset.min(total_rows.saturating_sub(visible_rows));
    }
}

/// The part of a card grid that fits on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPage {
    /// Indices of the visible cards
    pub range: Range<usize>,
    /// One slot per visible card, row by row
    pub cells: Vec<Rect>,
}

impl GridPage {
    /// True when some cards are scrolled out of view
    pub fn is_partial(&self, count: usize) -> bool {
        self.range.len() < count
    }
}

/// Lay out the rows of `count` cards that fit in `area` at full height
///
/// Rows that would be cut short are left out instead of squeezed, so a
/// visible card always shows all of its lines. `scroll` is clamped to the
/// rows that exist.
pub fn grid_page(area: Rect, count: usize, card_height: u16, scroll: &mut GridScroll) -> GridPage {
    if count == 0 || card_height == 0 {
        return GridPage {
            range: 0..0,
            cells: Vec::new(),
        };
    }

    let columns = columns_for_width(area.width);
    let total_rows = count.div_ceil(columns);
    let visible_rows = usize::from(area.height / card_height).min(total_rows);
    scroll.clamp(total_rows, visible_rows);

    let start = scroll.offset() * columns;
    let end = ((scroll.offset() + visible_rows) * columns).min(count);

    let row_areas = Layout::vertical(vec![Constraint::Length(card_height); visible_rows])
        .flex(Flex::Start)
        .split(area);

    let cells = row_areas
        .iter()
        .flat_map(|row| {
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(end - start)
        .collect();

    GridPage {
        range: start..end,
        cells,
    }
}

/// Section heading with a position hint when not every card is visible
pub fn page_title(title: &str, page: &GridPage, count: usize) -> String {
    if !page.is_partial(count) {
        return title.to_string();
    }

    if page.range.is_empty() {
        return format!("{title} ({count} hidden)");
    }

    format!(
        "{title} ({}-{} of {count}, j/k to scroll)",
        page.range.start + 1,
        page.range.end
    )
}

/// Bordered block with a bold section heading
pub fn section_block<'a>(title: impl Into<Cow<'a, str>>) -> Block<'a> {
    Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Section block for a scrollable card grid; the focused one is highlighted
pub fn card_section_block<'a>(title: impl Into<Cow<'a, str>>, focused: bool) -> Block<'a> {
    let block = section_block(title);
    if focused {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block
    }
}

/// Single-line informational banner ("nothing to show")
pub fn info_banner(message: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![
        Span::styled("ℹ ", Style::default().fg(Color::Blue)),
        Span::raw(message),
    ]))
    .style(Style::default().fg(Color::Gray))
}

//! View-only state: which card section has focus and how far each is scrolled
//!
//! Kept apart from [`DashboardState`](crate::state::DashboardState), which only
//! changes when a poll cycle lands.

use super::widgets::GridScroll;

/// Card section that receives scroll keys
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Alerts,
    #[default]
    Services,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Alerts => Focus::Services,
            Focus::Services => Focus::Alerts,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub focus: Focus,
    pub alerts: GridScroll,
    pub services: GridScroll,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    fn focused_scroll(&mut self) -> &mut GridScroll {
        match self.focus {
            Focus::Alerts => &mut self.alerts,
            Focus::Services => &mut self.services,
        }
    }

    /// Scroll the focused section one card row down
    pub fn scroll_down(&mut self) {
        self.focused_scroll().scroll_down();
    }

    /// Scroll the focused section one card row up
    pub fn scroll_up(&mut self) {
        self.focused_scroll().scroll_up();
    }
}

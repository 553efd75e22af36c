//! UI rendering module

pub mod alerts;
mod layout;
pub mod metrics;
pub mod services;
mod view;
mod widgets;

pub use layout::{HEADER_TITLE, render};
pub use view::{Focus, ViewState};
pub use widgets::GridScroll;

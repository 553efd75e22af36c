//! TUI Dashboard Module
//!
//! Terminal front end: renders the alerts, metrics chart and services of a
//! [`DashboardState`](crate::state::DashboardState) and keeps it fresh through
//! the [`poller`](crate::poller).

#[cfg(feature = "dashboard")]
mod app;
#[cfg(feature = "dashboard")]
pub mod config;
#[cfg(feature = "dashboard")]
pub mod ui;

#[cfg(feature = "dashboard")]
pub use app::App;
#[cfg(feature = "dashboard")]
pub use config::Config;

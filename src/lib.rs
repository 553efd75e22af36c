//! Terminal dashboard for a metrics API
//!
//! Polls three read-only endpoints (metrics, services, alerts) on a fixed
//! interval and renders them as a chart, service cards and alert cards.
//!
//! - [`api`] - payload types and the HTTP client
//! - [`poller`] - the cancellable repeating poll task
//! - [`state`] - what the dashboard shows and how poll results change it
//! - [`dashboard`] - the terminal UI (feature `dashboard`)

pub mod api;
pub mod dashboard;
pub mod poller;
pub mod state;

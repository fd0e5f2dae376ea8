//! # Weather Kiosk - source-reconciling weather dashboard renderer
//!
//! Polls a home weather backend for current conditions, an hourly
//! forecast and a five-day forecast, and renders them onto a fixed kiosk
//! layout. Each displayed quantity is taken from the local sensor station
//! when it is enabled and reporting, from the forecast provider where that
//! can stand in, or hidden, and the layout degrades from a dual-source to a
//! single-source arrangement without leaving gaps.
//!
//! ## Architecture
//!
//! - `config`: YAML process configuration and validation
//! - `logging`: Structured logging and tracing
//! - `api`: Backend HTTP client, wire types and section validation
//! - `reconcile`: Availability tracking, source resolution, pressure
//!   trend and data-quality scoring
//! - `ui`: Regions, the rendering surface, layout adaptation and render
//!   passes
//! - `dashboard`: State, refresh/theme cycles and the timer loop
//! - `web`: Read-only view server

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod reconcile;
pub mod ui;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use dashboard::{Dashboard, DashboardState, RefreshOutcome};
pub use error::{KioskError, Result};

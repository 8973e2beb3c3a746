//! bankroll-chart: buy-in and running-profit line chart engine.
//!
//! The crate turns a chronological sequence of monetary amounts into a
//! backend-agnostic `RenderFrame` (smooth two-tone profit curves, buy-in
//! polylines, markers, zero reference line and a five-row currency scale) and
//! keeps it in sync with data, mode and surface-size changes.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartMode, ChartRenderer, ChartWidget};
pub use error::{ChartError, ChartResult};

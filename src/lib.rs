/// Water Tests - terminal dashboard for water-quality readings.
///
/// Core library providing the static test catalog, limit tables and
/// location readings, the selection logic over them, and the ratatui
/// front end that renders the dashboard.

pub mod config;
pub mod core;
pub mod error;
pub mod tui;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

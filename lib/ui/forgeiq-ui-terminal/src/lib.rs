//! Command-line surface: config discovery, dashboard wiring and plain-text
//! rendering of reports.

pub mod bootstrap;
#[cfg(feature = "cli")]
pub mod cli;
pub mod render;

pub use bootstrap::{config_path, dashboard_from, load_config};

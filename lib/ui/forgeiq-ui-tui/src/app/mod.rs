//! TUI application state and event handling.
//!
//! # Examples
//! ```rust,no_run
//! use forgeiq_application::Dashboard;
//! use forgeiq_domain::ForgeConfig;
//! use forgeiq_ui_tui::app::App;
//!
//! let dashboard = Dashboard::new(&ForgeConfig::default());
//! let mut app = App::new(dashboard);
//! app.on_tick();
//! ```

mod keyboard;
mod lifecycle;
mod navigation;

use std::time::Instant;

use chrono::{DateTime, Utc};

use forgeiq_application::{Dashboard, ViewReport};

#[doc(inline)]
pub use navigation::{NavItem, nav_items};

pub struct App {
    pub dashboard: Dashboard,
    /// Report for the active view; `None` when the last refresh failed.
    pub report: Option<ViewReport>,
    pub error: Option<String>,
    pub status: Option<String>,
    pub scroll: u16,
    pub now: DateTime<Utc>,
    pub should_quit: bool,
    last_refresh: Instant,
}

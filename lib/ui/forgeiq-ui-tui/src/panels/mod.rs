//! Panel renderers for the dashboard layout.

mod cards;
mod heatmap;
mod main;
mod report;
mod sidebar;

pub use main::render_main;
pub use sidebar::render_sidebar;

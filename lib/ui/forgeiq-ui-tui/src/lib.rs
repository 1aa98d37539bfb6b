//! Terminal dashboard.

pub mod app;
mod macros;
pub mod panels;
mod render;
mod runner;
mod util;

pub use app::App;
pub use runner::start;

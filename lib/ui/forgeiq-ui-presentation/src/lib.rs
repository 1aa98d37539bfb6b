//! Presentation helpers shared by the CLI and the terminal dashboard.

pub mod formatting;

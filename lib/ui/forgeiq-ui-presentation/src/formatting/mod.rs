//! Shared formatting helpers used by UI and CLI.

mod badges;
mod cards;
mod lines;
mod numbers;

pub use badges::{Badge, badge, reported_badge};
pub use cards::{StatCard, stat_cards};
pub use lines::{LineKind, ReportLine, report_lines};
pub use numbers::{age, grouped, money_per_hour, percent, signed_percent, users};

//! ForgeIQ: classification and recommendation engine behind an API-testing
//! analytics dashboard.
//!
//! The facade re-exports the workspace crates; the `cli` and `tui` features
//! add the two front ends.

pub use forgeiq_adapter_fixtures as fixtures;
pub use forgeiq_application as application;
pub use forgeiq_domain as domain;
pub use forgeiq_engine as engine;
pub use forgeiq_ports as ports;

pub use forgeiq_application::{Dashboard, DashboardState, ViewReport};
pub use forgeiq_domain::ForgeConfig;
pub use forgeiq_engine::{Classifier, SchedulingRecommender};

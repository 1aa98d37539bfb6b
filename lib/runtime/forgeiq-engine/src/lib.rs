//! Classification and scheduling rules for dashboard metrics.
//!
//! Every operation here is a pure, total function: metric values in, tiers
//! out. Malformed input is clamped and logged, never rejected.

mod bands;
pub mod classify;
mod sanitize;
pub mod schedule;

pub use classify::{
    Classifier, SampleTier, classify_coverage, classify_deviation, classify_failure_count,
    classify_failure_probability, classify_reliability, classify_risk, classify_severity,
    classify_sla, sla_delta,
};
pub use schedule::{SchedulingRecommender, recommend};

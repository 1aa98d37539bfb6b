//! Domain models and invariants.

pub mod analytics;
pub mod anomaly;
pub mod config;
pub mod coverage;
pub mod display;
pub mod metrics;
pub mod prediction;
pub mod reliability;
pub mod schedule;
pub mod tier;
pub mod view;

pub use analytics::{
    ForecastPoint, HeatmapRow, OperationalCounters, ReliabilityPoint, SchedulePoint, TimeRange,
    TrendPoint, WEEKDAYS,
};
pub use anomaly::{Anomaly, AnomalyKind};
pub use config::{
    ActionItemTable, CoverageBands, ForgeConfig, LikelihoodBands, ReliabilityBands,
    SchedulingConfig, SeverityBands, SlaBands, ThresholdConfig,
};
pub use coverage::{CoverageDistribution, CoverageGap, ServiceCoverage};
pub use display::{Emphasis, TierMeta, Tiered, compact};
pub use metrics::{MetricKind, MetricSample};
pub use prediction::FailurePrediction;
pub use reliability::{ApiReliability, ReliabilityAction};
pub use schedule::{
    EndpointSchedule, ScheduleChange, ScheduleRecommendation, Stability, TestFrequency,
};
pub use tier::{CoverageTier, FailureLikelihood, HeatLevel, ReliabilityTier, Severity, SlaStatus};
pub use view::ViewKind;

//! Dashboard composition root: pulls datasets through the ports and turns
//! them into classified, per-view reports.

mod dashboard;
pub mod reports;
mod state;

pub use dashboard::Dashboard;
pub use reports::{
    AnalyticsReport, AnomalyReport, ApiAssessment, BusinessReport, ClassifiedAnomaly,
    ClassifiedGap, ClassifiedPrediction, CoverageReport, HeatmapEntry, PredictionReport,
    ScheduleReport, ScheduledEndpoint, ServiceAssessment, SeverityCount, TierSummary, TierTally,
    ViewReport,
};
pub use state::DashboardState;

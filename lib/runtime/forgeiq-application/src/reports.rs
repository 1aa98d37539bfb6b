//! Per-view report models. Every report is plain data; rendering lives in
//! the UI crates.

use serde::Serialize;

use forgeiq_domain::{
    Anomaly, ApiReliability, CoverageDistribution, CoverageGap, CoverageTier, EndpointSchedule,
    FailureLikelihood, FailurePrediction, ForecastPoint, HeatLevel, MetricKind,
    ReliabilityAction, ReliabilityPoint, ReliabilityTier, ScheduleRecommendation, SchedulePoint,
    ServiceCoverage, Severity, SlaStatus, TimeRange, TrendPoint, ViewKind,
};
use forgeiq_engine::SampleTier;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewReport {
    Analytics(AnalyticsReport),
    Anomalies(AnomalyReport),
    Predictions(PredictionReport),
    Scheduling(ScheduleReport),
    Coverage(CoverageReport),
    Business(BusinessReport),
}

impl ViewReport {
    pub fn view(&self) -> ViewKind {
        match self {
            ViewReport::Analytics(_) => ViewKind::Analytics,
            ViewReport::Anomalies(_) => ViewKind::Anomalies,
            ViewReport::Predictions(_) => ViewKind::Predictions,
            ViewReport::Scheduling(_) => ViewKind::Scheduling,
            ViewReport::Coverage(_) => ViewKind::Coverage,
            ViewReport::Business(_) => ViewKind::Business,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapEntry {
    pub endpoint: String,
    pub daily_failures: [u32; 7],
    pub levels: [HeatLevel; 7],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub range: TimeRange,
    pub total_tests: u64,
    pub success_rate_pct: f64,
    pub failures: u64,
    pub avg_latency_ms: f64,
    pub trend: Vec<TrendPoint>,
    pub heatmap: Vec<HeatmapEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedAnomaly {
    pub anomaly: Anomaly,
    /// Resolved from the reported label.
    pub severity: Severity,
    /// Resolved from the deviation percentage.
    pub deviation_severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityCount {
    pub severity: Severity,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyReport {
    pub anomalies: Vec<ClassifiedAnomaly>,
    /// Most severe first, zero counts included.
    pub by_severity: Vec<SeverityCount>,
    pub resolved_today: Option<u32>,
}

impl AnomalyReport {
    pub fn count(&self, severity: Severity) -> usize {
        self.by_severity
            .iter()
            .find(|entry| entry.severity == severity)
            .map_or(0, |entry| entry.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedPrediction {
    pub prediction: FailurePrediction,
    pub likelihood: FailureLikelihood,
    pub impact: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub predictions: Vec<ClassifiedPrediction>,
    pub forecast: Vec<ForecastPoint>,
    /// First projected point predicted below the lowest observed value.
    pub degradation_start: Option<String>,
    pub avg_confidence_pct: Option<f64>,
    pub likely_failures: usize,
    pub prevented_outages: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledEndpoint {
    pub schedule: EndpointSchedule,
    pub risk: Severity,
    pub recommendation: ScheduleRecommendation,
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleReport {
    pub endpoints: Vec<ScheduledEndpoint>,
    pub load: Vec<SchedulePoint>,
    pub active_schedules: Option<u32>,
    pub auto_adjusted: u32,
    /// Proposed changes not applied yet.
    pub pending_review: usize,
    pub efficiency_gain_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceAssessment {
    pub coverage: ServiceCoverage,
    pub tier: CoverageTier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedGap {
    pub gap: CoverageGap,
    pub priority: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub overall_coverage_pct: f64,
    pub distribution: CoverageDistribution,
    pub services: Vec<ServiceAssessment>,
    pub gaps: Vec<ClassifiedGap>,
    /// Endpoints without a test, summed over services.
    pub gap_endpoints: u32,
    /// Tests written, summed over services.
    pub well_covered: u32,
    pub improvement_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiAssessment {
    pub api: ApiReliability,
    pub tier: ReliabilityTier,
    pub action: ReliabilityAction,
    pub action_items: u32,
    pub sla_delta: f64,
    pub sla_status: SlaStatus,
    pub revenue_impact: Severity,
    pub customer_impact: Severity,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessReport {
    pub apis: Vec<ApiAssessment>,
    pub revenue_at_risk_per_hour: u64,
    pub affected_users: u64,
    /// APIs below the healthy tier, lowest score first.
    pub needs_attention: Vec<ApiAssessment>,
    pub overall_score: Option<f64>,
    pub target_score: Option<f64>,
    pub reliability_trend: Vec<ReliabilityPoint>,
    pub avg_resolution_minutes: Option<u32>,
    pub resolution_change_pct: Option<f64>,
    pub sla_violations_this_month: Option<u32>,
    pub executive_summary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierTally {
    pub kind: MetricKind,
    #[serde(flatten)]
    pub tier: SampleTier,
    pub count: usize,
}

/// Tier counts across every metric sample of a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierSummary {
    pub range: TimeRange,
    pub samples: usize,
    pub tallies: Vec<TierTally>,
}

impl TierSummary {
    pub fn count(&self, kind: MetricKind, tier: SampleTier) -> usize {
        self.tallies
            .iter()
            .find(|tally| tally.kind == kind && tally.tier == tier)
            .map_or(0, |tally| tally.count)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    LatencySpike,
    FailureRateIncrease,
    ResponseSizeAnomaly,
    TrafficSpike,
}

impl AnomalyKind {
    pub fn title(self) -> &'static str {
        match self {
            AnomalyKind::LatencySpike => "Latency Spike",
            AnomalyKind::FailureRateIncrease => "Failure Rate Increase",
            AnomalyKind::ResponseSizeAnomaly => "Response Size Anomaly",
            AnomalyKind::TrafficSpike => "Traffic Spike",
        }
    }
}

/// A detected deviation on one endpoint.
///
/// `reported_severity` is the label attached by the detector; it is resolved
/// into a [`crate::Severity`] by the classifier, never matched on directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub id: u32,
    pub kind: AnomalyKind,
    pub endpoint: String,
    pub reported_severity: String,
    pub description: String,
    pub detected_at: DateTime<Utc>,
    pub baseline: String,
    pub current: String,
    /// Deviation from baseline, in percent.
    pub deviation_pct: f64,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Abstract 0-100 risk score.
    RiskScore,
    /// Percentage deviation from baseline.
    AnomalyDeviation,
    /// Percentage of endpoints covered by tests.
    CoveragePercent,
    /// 0-100 composite reliability score.
    ReliabilityScore,
    /// Uptime minus SLA target, in percentage points.
    SlaDelta,
    /// Predicted failure probability, 0-100.
    FailureProbability,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        MetricKind::RiskScore,
        MetricKind::AnomalyDeviation,
        MetricKind::CoveragePercent,
        MetricKind::ReliabilityScore,
        MetricKind::SlaDelta,
        MetricKind::FailureProbability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::RiskScore => "risk_score",
            MetricKind::AnomalyDeviation => "anomaly_deviation",
            MetricKind::CoveragePercent => "coverage_percent",
            MetricKind::ReliabilityScore => "reliability_score",
            MetricKind::SlaDelta => "sla_delta",
            MetricKind::FailureProbability => "failure_probability",
        }
    }
}

/// A single reading handed to the classifier. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    /// Endpoint, service or API the value belongs to.
    pub subject: String,
    pub kind: MetricKind,
    pub value: f64,
}

impl MetricSample {
    pub fn new(subject: impl Into<String>, kind: MetricKind, value: f64) -> Self {
        Self {
            subject: subject.into(),
            kind,
            value,
        }
    }
}

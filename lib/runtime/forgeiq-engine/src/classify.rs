//! Threshold classification of dashboard metrics.

use std::sync::LazyLock;

use serde::Serialize;

use forgeiq_domain::{
    ActionItemTable, CoverageTier, FailureLikelihood, ForgeConfig, HeatLevel, MetricKind,
    MetricSample, ReliabilityAction, ReliabilityTier, Severity, SlaStatus, ThresholdConfig,
    TierMeta, Tiered,
};

use crate::bands::Bands;
use crate::sanitize::{Polarity, percent};

static STANDARD: LazyLock<Classifier> = LazyLock::new(Classifier::default);

/// SLA deltas are compared at micro-point resolution.
const SLA_DELTA_SCALE: f64 = 1e6;

/// Daily failure counts above this are hot on the heatmap.
const HEAT_ELEVATED_MAX: u32 = 2;

/// Threshold tables for every metric kind.
///
/// Cheap to clone and free of interior state; share it freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    risk: Bands<Severity, 3>,
    coverage: Bands<CoverageTier, 2>,
    reliability: Bands<ReliabilityTier, 2>,
    likelihood: Bands<FailureLikelihood, 2>,
    sla_tolerance: f64,
    action_items: ActionItemTable,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&ThresholdConfig::default(), ActionItemTable::default())
    }
}

impl Classifier {
    pub fn new(thresholds: &ThresholdConfig, action_items: ActionItemTable) -> Self {
        let risk = &thresholds.risk;
        let coverage = &thresholds.coverage;
        let reliability = &thresholds.reliability;
        let likelihood = &thresholds.failure_probability;
        Self {
            risk: Bands::new(
                [
                    (risk.critical, Severity::Critical),
                    (risk.high, Severity::High),
                    (risk.medium, Severity::Medium),
                ],
                Severity::Low,
            ),
            coverage: Bands::new(
                [
                    (coverage.good, CoverageTier::Good),
                    (coverage.needs_attention, CoverageTier::NeedsAttention),
                ],
                CoverageTier::Poor,
            ),
            reliability: Bands::new(
                [
                    (reliability.healthy, ReliabilityTier::Healthy),
                    (reliability.watch, ReliabilityTier::Watch),
                ],
                ReliabilityTier::Critical,
            ),
            likelihood: Bands::new(
                [
                    (likelihood.likely, FailureLikelihood::Likely),
                    (likelihood.elevated, FailureLikelihood::Elevated),
                ],
                FailureLikelihood::Watch,
            ),
            sla_tolerance: thresholds.sla.at_risk_tolerance,
            action_items,
        }
    }

    pub fn from_config(config: &ForgeConfig) -> Self {
        Self::new(&config.thresholds, config.action_items.clone())
    }

    /// 0-100 risk score to the four severity bands.
    pub fn classify_risk(&self, score: f64) -> Severity {
        self.risk
            .classify(percent("risk_score", score, Polarity::HigherIsWorse))
    }

    /// Percentage deviation from baseline, banded like a risk score.
    pub fn classify_deviation(&self, deviation_pct: f64) -> Severity {
        self.risk.classify(percent(
            "anomaly_deviation",
            deviation_pct,
            Polarity::HigherIsWorse,
        ))
    }

    /// Resolve a reported severity or impact label. Unknown labels read as low.
    pub fn classify_severity(&self, label: &str) -> Severity {
        Severity::from_label(label).unwrap_or_else(|| {
            tracing::warn!(label, "unknown severity label, treating as low");
            Severity::Low
        })
    }

    pub fn classify_coverage(&self, coverage_pct: f64) -> CoverageTier {
        self.coverage.classify(percent(
            "coverage_percent",
            coverage_pct,
            Polarity::LowerIsWorse,
        ))
    }

    pub fn classify_reliability(&self, score: f64) -> ReliabilityTier {
        self.reliability.classify(percent(
            "reliability_score",
            score,
            Polarity::LowerIsWorse,
        ))
    }

    pub fn reliability_action(&self, tier: ReliabilityTier) -> ReliabilityAction {
        tier.action()
    }

    /// Pending action items for a reliability tier, from the lookup table.
    pub fn action_items(&self, tier: ReliabilityTier) -> u32 {
        match tier {
            ReliabilityTier::Healthy => self.action_items.healthy,
            ReliabilityTier::Watch => self.action_items.watch,
            ReliabilityTier::Critical => self.action_items.critical,
        }
    }

    /// Compare current uptime against the SLA target, both in percent.
    pub fn classify_sla(&self, current_uptime: f64, sla_target: f64) -> SlaStatus {
        if current_uptime.is_nan() || sla_target.is_nan() {
            tracing::warn!(
                current_uptime,
                sla_target,
                "non-numeric SLA reading, classifying as below target"
            );
            return SlaStatus::Below;
        }
        self.classify_sla_delta(sla_delta(current_uptime, sla_target))
    }

    /// Classify an already computed `uptime - target` delta.
    pub fn classify_sla_delta(&self, delta: f64) -> SlaStatus {
        if delta.is_nan() {
            tracing::warn!("non-numeric SLA delta, classifying as below target");
            return SlaStatus::Below;
        }
        let delta = round_delta(delta);
        if delta >= 0.0 {
            SlaStatus::Meeting
        } else if delta >= -self.sla_tolerance {
            SlaStatus::AtRisk
        } else {
            SlaStatus::Below
        }
    }

    pub fn classify_failure_probability(&self, probability: f64) -> FailureLikelihood {
        self.likelihood.classify(percent(
            "failure_probability",
            probability,
            Polarity::HigherIsWorse,
        ))
    }

    /// Heatmap level for a daily failure count: none, a couple, or more.
    pub fn classify_failure_count(&self, failures: u32) -> HeatLevel {
        match failures {
            0 => HeatLevel::Clear,
            n if n <= HEAT_ELEVATED_MAX => HeatLevel::Elevated,
            _ => HeatLevel::Hot,
        }
    }

    /// Dispatch a sample to the classifier for its kind.
    pub fn classify_sample(&self, sample: &MetricSample) -> SampleTier {
        match sample.kind {
            MetricKind::RiskScore => SampleTier::Severity(self.classify_risk(sample.value)),
            MetricKind::AnomalyDeviation => {
                SampleTier::Severity(self.classify_deviation(sample.value))
            }
            MetricKind::CoveragePercent => {
                SampleTier::Coverage(self.classify_coverage(sample.value))
            }
            MetricKind::ReliabilityScore => {
                SampleTier::Reliability(self.classify_reliability(sample.value))
            }
            MetricKind::SlaDelta => SampleTier::Sla(self.classify_sla_delta(sample.value)),
            MetricKind::FailureProbability => {
                SampleTier::Likelihood(self.classify_failure_probability(sample.value))
            }
        }
    }
}

/// Tier of a [`MetricSample`], whichever kind it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "tier_kind", content = "tier", rename_all = "snake_case")]
pub enum SampleTier {
    Severity(Severity),
    Coverage(CoverageTier),
    Reliability(ReliabilityTier),
    Sla(SlaStatus),
    Likelihood(FailureLikelihood),
}

impl Tiered for SampleTier {
    fn meta(self) -> TierMeta {
        match self {
            SampleTier::Severity(tier) => tier.meta(),
            SampleTier::Coverage(tier) => tier.meta(),
            SampleTier::Reliability(tier) => tier.meta(),
            SampleTier::Sla(tier) => tier.meta(),
            SampleTier::Likelihood(tier) => tier.meta(),
        }
    }
}

/// `current_uptime - sla_target`, both clamped to `[0, 100]`.
pub fn sla_delta(current_uptime: f64, sla_target: f64) -> f64 {
    let uptime = percent("current_uptime", current_uptime, Polarity::LowerIsWorse);
    let target = percent("sla_target", sla_target, Polarity::HigherIsWorse);
    round_delta(uptime - target)
}

// Decimal inputs like 99.4 - 99.9 must hit the tolerance boundary exactly.
fn round_delta(delta: f64) -> f64 {
    (delta * SLA_DELTA_SCALE).round() / SLA_DELTA_SCALE
}

pub fn classify_risk(score: f64) -> Severity {
    STANDARD.classify_risk(score)
}

pub fn classify_deviation(deviation_pct: f64) -> Severity {
    STANDARD.classify_deviation(deviation_pct)
}

pub fn classify_severity(label: &str) -> Severity {
    STANDARD.classify_severity(label)
}

pub fn classify_coverage(coverage_pct: f64) -> CoverageTier {
    STANDARD.classify_coverage(coverage_pct)
}

pub fn classify_reliability(score: f64) -> ReliabilityTier {
    STANDARD.classify_reliability(score)
}

pub fn classify_sla(current_uptime: f64, sla_target: f64) -> SlaStatus {
    STANDARD.classify_sla(current_uptime, sla_target)
}

pub fn classify_failure_probability(probability: f64) -> FailureLikelihood {
    STANDARD.classify_failure_probability(probability)
}

pub fn classify_failure_count(failures: u32) -> HeatLevel {
    STANDARD.classify_failure_count(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgeiq_domain::{CoverageBands, Emphasis};

    #[test]
    fn risk_boundaries() {
        assert_eq!(classify_risk(80.0), Severity::Critical);
        assert_eq!(classify_risk(79.9), Severity::High);
        assert_eq!(classify_risk(50.0), Severity::High);
        assert_eq!(classify_risk(49.9), Severity::Medium);
        assert_eq!(classify_risk(30.0), Severity::Medium);
        assert_eq!(classify_risk(29.9), Severity::Low);
        assert_eq!(classify_risk(0.0), Severity::Low);
        assert_eq!(classify_risk(100.0), Severity::Critical);
    }

    #[test]
    fn risk_is_monotonic_over_its_domain() {
        let mut previous = Severity::Low;
        for step in 0..=1000 {
            let score = f64::from(step) / 10.0;
            let tier = classify_risk(score);
            assert!(tier >= previous, "severity dropped at {score}");
            previous = tier;
        }
        assert_eq!(previous, Severity::Critical);
    }

    #[test]
    fn out_of_range_scores_clamp() {
        assert_eq!(classify_risk(150.0), Severity::Critical);
        assert_eq!(classify_risk(-5.0), Severity::Low);
        assert_eq!(classify_coverage(140.0), CoverageTier::Good);
        assert_eq!(classify_coverage(-3.0), CoverageTier::Poor);
        assert_eq!(classify_failure_probability(-1.0), FailureLikelihood::Watch);
    }

    #[test]
    fn nan_never_reads_as_safe() {
        assert_eq!(classify_risk(f64::NAN), Severity::Critical);
        assert_eq!(classify_coverage(f64::NAN), CoverageTier::Poor);
        assert_eq!(classify_reliability(f64::NAN), ReliabilityTier::Critical);
        assert_eq!(
            classify_failure_probability(f64::NAN),
            FailureLikelihood::Likely
        );
        assert_eq!(classify_sla(f64::NAN, 99.9), SlaStatus::Below);
        assert_eq!(classify_sla(99.9, f64::NAN), SlaStatus::Below);
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = Classifier::default();
        for value in [-5.0, 0.0, 29.9, 50.0, 79.99, 80.0, 150.0] {
            assert_eq!(classifier.classify_risk(value), classifier.classify_risk(value));
            assert_eq!(
                classifier.classify_coverage(value),
                classifier.classify_coverage(value)
            );
        }
    }

    #[test]
    fn deviation_uses_risk_bands() {
        assert_eq!(classify_deviation(340.0), Severity::Critical);
        assert_eq!(classify_deviation(55.0), Severity::High);
        assert_eq!(classify_deviation(12.0), Severity::Low);
    }

    #[test]
    fn severity_labels_resolve_with_low_fallback() {
        assert_eq!(classify_severity("critical"), Severity::Critical);
        assert_eq!(classify_severity("Severe"), Severity::Critical);
        assert_eq!(classify_severity("High"), Severity::High);
        assert_eq!(classify_severity("nonsense"), Severity::Low);
        assert_eq!(classify_severity(""), Severity::Low);
    }

    #[test]
    fn coverage_boundaries() {
        assert_eq!(classify_coverage(80.0), CoverageTier::Good);
        assert_eq!(classify_coverage(79.9), CoverageTier::NeedsAttention);
        assert_eq!(classify_coverage(60.0), CoverageTier::NeedsAttention);
        assert_eq!(classify_coverage(59.9), CoverageTier::Poor);
    }

    #[test]
    fn reliability_boundaries_and_lookups() {
        let classifier = Classifier::default();
        assert_eq!(classify_reliability(95.0), ReliabilityTier::Healthy);
        assert_eq!(classify_reliability(94.9), ReliabilityTier::Watch);
        assert_eq!(classify_reliability(85.0), ReliabilityTier::Watch);
        assert_eq!(classify_reliability(84.9), ReliabilityTier::Critical);

        assert_eq!(classifier.action_items(ReliabilityTier::Healthy), 0);
        assert_eq!(classifier.action_items(ReliabilityTier::Watch), 2);
        assert_eq!(classifier.action_items(ReliabilityTier::Critical), 5);
        assert_eq!(
            classifier.reliability_action(ReliabilityTier::Critical),
            ReliabilityAction::UrgentAction
        );
    }

    #[test]
    fn sla_status_uses_half_point_tolerance() {
        assert_eq!(classify_sla(99.2, 99.9), SlaStatus::Below);
        assert_eq!(classify_sla(99.6, 99.9), SlaStatus::AtRisk);
        assert_eq!(classify_sla(99.95, 99.9), SlaStatus::Meeting);
        assert_eq!(classify_sla(99.9, 99.9), SlaStatus::Meeting);
        assert_eq!(classify_sla(99.4, 99.9), SlaStatus::AtRisk);
        assert_eq!(classify_sla(99.39, 99.9), SlaStatus::Below);
    }

    #[test]
    fn sla_delta_is_rounded() {
        assert_eq!(sla_delta(99.4, 99.9), -0.5);
        assert_eq!(sla_delta(98.8, 99.5), -0.7);
    }

    #[test]
    fn failure_probability_bands() {
        assert_eq!(classify_failure_probability(78.0), FailureLikelihood::Likely);
        assert_eq!(classify_failure_probability(70.0), FailureLikelihood::Likely);
        assert_eq!(
            classify_failure_probability(62.0),
            FailureLikelihood::Elevated
        );
        assert_eq!(
            classify_failure_probability(50.0),
            FailureLikelihood::Elevated
        );
        assert_eq!(classify_failure_probability(45.0), FailureLikelihood::Watch);
    }

    #[test]
    fn failure_counts_heat_up() {
        assert_eq!(classify_failure_count(0), HeatLevel::Clear);
        assert_eq!(classify_failure_count(1), HeatLevel::Elevated);
        assert_eq!(classify_failure_count(2), HeatLevel::Elevated);
        assert_eq!(classify_failure_count(3), HeatLevel::Hot);
    }

    #[test]
    fn custom_thresholds_apply() {
        let thresholds = ThresholdConfig {
            coverage: CoverageBands {
                good: 90.0,
                needs_attention: 70.0,
            },
            ..ThresholdConfig::default()
        };
        let classifier = Classifier::new(&thresholds, ActionItemTable::default());
        assert_eq!(classifier.classify_coverage(85.0), CoverageTier::NeedsAttention);
        assert_eq!(classifier.classify_coverage(65.0), CoverageTier::Poor);
        assert_eq!(classifier.classify_risk(80.0), Severity::Critical);
    }

    #[test]
    fn samples_dispatch_by_kind() {
        let classifier = Classifier::default();
        let risk = MetricSample::new("/api/orders", MetricKind::RiskScore, 87.0);
        let sla = MetricSample::new("Payments", MetricKind::SlaDelta, -0.3);
        let coverage = MetricSample::new("Users", MetricKind::CoveragePercent, 45.0);

        assert_eq!(
            classifier.classify_sample(&risk),
            SampleTier::Severity(Severity::Critical)
        );
        assert_eq!(
            classifier.classify_sample(&sla),
            SampleTier::Sla(SlaStatus::AtRisk)
        );
        let tier = classifier.classify_sample(&coverage);
        assert_eq!(tier, SampleTier::Coverage(CoverageTier::Poor));
        assert_eq!(tier.emphasis(), Emphasis::Danger);
    }
}

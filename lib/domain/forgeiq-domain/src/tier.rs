//! Classification tiers.
//!
//! Every tier enum is declared in order of increasing severity, so `Ord`
//! compares how much attention a value demands.

use serde::{Deserialize, Serialize};

use crate::display::{Emphasis, TierMeta, Tiered};
use crate::reliability::ReliabilityAction;

/// Shared four-level ordering for risk scores, anomaly severity and impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

const SEVERITY_META: [TierMeta; 4] = [
    TierMeta::new("Low", Emphasis::Info),
    TierMeta::new("Medium", Emphasis::Caution),
    TierMeta::new("High", Emphasis::Warning),
    TierMeta::new("Critical", Emphasis::Danger),
];

impl Severity {
    /// Most severe first.
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Parse a reported severity or impact label. `severe` ranks with `critical`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" | "severe" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

impl Tiered for Severity {
    fn meta(self) -> TierMeta {
        SEVERITY_META[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    Meeting,
    AtRisk,
    Below,
}

const SLA_META: [TierMeta; 3] = [
    TierMeta::new("Meeting SLA", Emphasis::Positive),
    TierMeta::new("At Risk", Emphasis::Caution),
    TierMeta::new("Below SLA", Emphasis::Danger),
];

impl Tiered for SlaStatus {
    fn meta(self) -> TierMeta {
        SLA_META[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageTier {
    Good,
    NeedsAttention,
    Poor,
}

const COVERAGE_META: [TierMeta; 3] = [
    TierMeta::new("Good", Emphasis::Positive),
    TierMeta::new("Needs Attention", Emphasis::Caution),
    TierMeta::new("Poor", Emphasis::Danger),
];

impl Tiered for CoverageTier {
    fn meta(self) -> TierMeta {
        COVERAGE_META[self as usize]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityTier {
    Healthy,
    Watch,
    Critical,
}

const RELIABILITY_META: [TierMeta; 3] = [
    TierMeta::new("Healthy", Emphasis::Positive),
    TierMeta::new("Watch", Emphasis::Caution),
    TierMeta::new("Critical", Emphasis::Danger),
];

impl ReliabilityTier {
    pub fn action(self) -> ReliabilityAction {
        match self {
            ReliabilityTier::Healthy => ReliabilityAction::Maintain,
            ReliabilityTier::Watch => ReliabilityAction::Improve,
            ReliabilityTier::Critical => ReliabilityAction::UrgentAction,
        }
    }
}

impl Tiered for ReliabilityTier {
    fn meta(self) -> TierMeta {
        RELIABILITY_META[self as usize]
    }
}

/// Alert banding for predicted failure probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureLikelihood {
    Watch,
    Elevated,
    Likely,
}

const LIKELIHOOD_META: [TierMeta; 3] = [
    TierMeta::new("Watch", Emphasis::Caution),
    TierMeta::new("Elevated", Emphasis::Warning),
    TierMeta::new("High Likelihood", Emphasis::Danger),
];

impl FailureLikelihood {
    /// The likelihood bands never resolve to `Low`.
    pub fn severity(self) -> Severity {
        match self {
            FailureLikelihood::Watch => Severity::Medium,
            FailureLikelihood::Elevated => Severity::High,
            FailureLikelihood::Likely => Severity::Critical,
        }
    }
}

impl Tiered for FailureLikelihood {
    fn meta(self) -> TierMeta {
        LIKELIHOOD_META[self as usize]
    }
}

/// Heatmap cell level for a daily failure count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatLevel {
    Clear,
    Elevated,
    Hot,
}

const HEAT_META: [TierMeta; 3] = [
    TierMeta::new("Clear", Emphasis::Positive),
    TierMeta::new("Elevated", Emphasis::Caution),
    TierMeta::new("Hot", Emphasis::Danger),
];

impl Tiered for HeatLevel {
    fn meta(self) -> TierMeta {
        HEAT_META[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_labels_parse_case_insensitively() {
        assert_eq!(Severity::from_label("CRITICAL"), Some(Severity::Critical));
        assert_eq!(Severity::from_label(" Severe "), Some(Severity::Critical));
        assert_eq!(Severity::from_label("High"), Some(Severity::High));
        assert_eq!(Severity::from_label("medium"), Some(Severity::Medium));
        assert_eq!(Severity::from_label("low"), Some(Severity::Low));
        assert_eq!(Severity::from_label("urgent"), None);
    }

    #[test]
    fn meta_tables_follow_declaration_order() {
        assert_eq!(Severity::Critical.label(), "Critical");
        assert_eq!(Severity::Low.emphasis(), Emphasis::Info);
        assert_eq!(SlaStatus::AtRisk.label(), "At Risk");
        assert_eq!(CoverageTier::NeedsAttention.label(), "Needs Attention");
        assert_eq!(ReliabilityTier::Critical.emphasis(), Emphasis::Danger);
        assert_eq!(FailureLikelihood::Likely.label(), "High Likelihood");
        assert_eq!(HeatLevel::Clear.emphasis(), Emphasis::Positive);
    }

    #[test]
    fn tiers_order_by_severity() {
        assert!(Severity::Critical > Severity::High);
        assert!(SlaStatus::Below > SlaStatus::AtRisk);
        assert!(CoverageTier::Poor > CoverageTier::Good);
        assert_eq!(Severity::ALL[0], Severity::Critical);
    }

    #[test]
    fn likelihood_maps_to_upper_severities() {
        assert_eq!(FailureLikelihood::Likely.severity(), Severity::Critical);
        assert_eq!(FailureLikelihood::Elevated.severity(), Severity::High);
        assert_eq!(FailureLikelihood::Watch.severity(), Severity::Medium);
    }

    #[test]
    fn reliability_tiers_key_actions() {
        assert_eq!(ReliabilityTier::Healthy.action(), ReliabilityAction::Maintain);
        assert_eq!(ReliabilityTier::Watch.action(), ReliabilityAction::Improve);
        assert_eq!(
            ReliabilityTier::Critical.action(),
            ReliabilityAction::UrgentAction
        );
    }
}

//! Adaptive test scheduling.
//!
//! Only low-risk relaxations of a stable endpoint are auto-applied. Any
//! tightening, and every ambiguous case, waits for a human.

use std::sync::LazyLock;

use forgeiq_domain::{
    ForgeConfig, ScheduleChange, ScheduleRecommendation, SchedulingConfig, Stability,
    TestFrequency,
};

use crate::sanitize::{Polarity, percent};

static STANDARD: LazyLock<SchedulingRecommender> = LazyLock::new(SchedulingRecommender::default);

#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingRecommender {
    high_risk: f64,
    low_risk: f64,
    tighten_steps: usize,
    relax_steps: usize,
    /// Ascending.
    ladder: Vec<TestFrequency>,
}

impl Default for SchedulingRecommender {
    fn default() -> Self {
        Self::new(&SchedulingConfig::default())
    }
}

impl SchedulingRecommender {
    pub fn new(config: &SchedulingConfig) -> Self {
        let mut ladder: Vec<TestFrequency> = config
            .ladder_minutes
            .iter()
            .map(|minutes| TestFrequency::from_minutes(*minutes))
            .collect();
        ladder.sort();
        ladder.dedup();
        Self {
            high_risk: config.high_risk,
            low_risk: config.low_risk,
            tighten_steps: config.tighten_steps.max(1),
            relax_steps: config.relax_steps.max(1),
            ladder,
        }
    }

    pub fn from_config(config: &ForgeConfig) -> Self {
        Self::new(&config.scheduling)
    }

    pub fn ladder(&self) -> &[TestFrequency] {
        &self.ladder
    }

    /// Propose a cadence for an endpoint from its risk score (0-100) and
    /// recent stability.
    pub fn recommend(
        &self,
        current: TestFrequency,
        risk_score: f64,
        stability: Stability,
    ) -> ScheduleRecommendation {
        let risk = percent("risk_score", risk_score, Polarity::HigherIsWorse);
        let (recommended, relaxing) = if risk >= self.high_risk {
            (self.tighten(current), false)
        } else if risk < self.low_risk && stability.is_stable() {
            (self.relax(current), true)
        } else {
            (current, false)
        };

        let change = match recommended.cmp(&current) {
            std::cmp::Ordering::Less => ScheduleChange::Tighten,
            std::cmp::Ordering::Equal => ScheduleChange::Keep,
            std::cmp::Ordering::Greater => ScheduleChange::Relax,
        };
        let recommendation = ScheduleRecommendation {
            current,
            recommended_frequency: recommended,
            change,
            auto_adjust_eligible: relaxing && change == ScheduleChange::Relax,
        };
        tracing::debug!(
            risk,
            ?stability,
            current = %current,
            recommended = %recommended,
            auto_adjust = recommendation.auto_adjust_eligible,
            "schedule recommendation"
        );
        recommendation
    }

    /// Move `tighten_steps` rungs below the current cadence, stopping at the
    /// fastest rung.
    fn tighten(&self, current: TestFrequency) -> TestFrequency {
        let faster: Vec<TestFrequency> = self
            .ladder
            .iter()
            .copied()
            .filter(|rung| *rung < current)
            .collect();
        if faster.is_empty() {
            return current;
        }
        faster[faster.len().saturating_sub(self.tighten_steps)]
    }

    /// Move `relax_steps` rungs above the current cadence, stopping at the
    /// slowest rung.
    fn relax(&self, current: TestFrequency) -> TestFrequency {
        let slower: Vec<TestFrequency> = self
            .ladder
            .iter()
            .copied()
            .filter(|rung| *rung > current)
            .collect();
        match slower.get(self.relax_steps - 1).or(slower.last()) {
            Some(rung) => *rung,
            None => current,
        }
    }
}

/// [`SchedulingRecommender::recommend`] with the default policy.
pub fn recommend(
    current: TestFrequency,
    risk_score: f64,
    stability: Stability,
) -> ScheduleRecommendation {
    STANDARD.recommend(current, risk_score, stability)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(value: u64) -> TestFrequency {
        TestFrequency::from_minutes(value)
    }

    #[test]
    fn high_risk_tightens_without_auto_adjust() {
        let rec = recommend(minutes(15), 87.0, Stability::Degrading);
        assert!(rec.recommended_frequency < rec.current);
        assert_eq!(rec.recommended_frequency, minutes(5));
        assert_eq!(rec.change, ScheduleChange::Tighten);
        assert!(!rec.auto_adjust_eligible);

        let rec = recommend(minutes(10), 92.0, Stability::Degrading);
        assert_eq!(rec.recommended_frequency, minutes(3));
    }

    #[test]
    fn unvalidated_huge_rung_does_not_panic() {
        let config = SchedulingConfig {
            ladder_minutes: vec![1, u64::MAX],
            ..SchedulingConfig::default()
        };
        let recommender = SchedulingRecommender::new(&config);
        let rec = recommender.recommend(minutes(1), 10.0, Stability::Stable);
        assert_eq!(rec.recommended_frequency.as_secs(), u64::MAX);
        assert!(rec.auto_adjust_eligible);
    }

    #[test]
    fn high_risk_ignores_stability() {
        let rec = recommend(minutes(15), 80.0, Stability::Stable);
        assert_eq!(rec.change, ScheduleChange::Tighten);
        assert!(!rec.auto_adjust_eligible);
    }

    #[test]
    fn low_risk_stable_relaxes_automatically() {
        let rec = recommend(minutes(30), 12.0, Stability::Stable);
        assert!(rec.recommended_frequency > rec.current);
        assert_eq!(rec.recommended_frequency, minutes(60));
        assert!(rec.auto_adjust_eligible);

        let rec = recommend(minutes(60), 8.0, Stability::Stable);
        assert_eq!(rec.recommended_frequency, minutes(120));
        assert!(rec.auto_adjust_eligible);
    }

    #[test]
    fn low_risk_but_degrading_keeps_cadence() {
        let rec = recommend(minutes(30), 12.0, Stability::Degrading);
        assert_eq!(rec.recommended_frequency, minutes(30));
        assert_eq!(rec.change, ScheduleChange::Keep);
        assert!(!rec.auto_adjust_eligible);
    }

    #[test]
    fn mid_range_risk_keeps_cadence() {
        for risk in [30.0, 50.0, 79.9] {
            let rec = recommend(minutes(15), risk, Stability::Stable);
            assert_eq!(rec.change, ScheduleChange::Keep, "risk {risk}");
            assert!(!rec.is_change());
            assert!(!rec.auto_adjust_eligible);
        }
    }

    #[test]
    fn off_ladder_cadence_snaps_in_direction_of_travel() {
        let rec = recommend(minutes(12), 90.0, Stability::Degrading);
        assert_eq!(rec.recommended_frequency, minutes(5));

        let rec = recommend(minutes(45), 5.0, Stability::Stable);
        assert_eq!(rec.recommended_frequency, minutes(60));
    }

    #[test]
    fn ladder_ends_hold_position() {
        let rec = recommend(minutes(1), 99.0, Stability::Degrading);
        assert_eq!(rec.recommended_frequency, minutes(1));
        assert_eq!(rec.change, ScheduleChange::Keep);

        let rec = recommend(minutes(1440), 1.0, Stability::Stable);
        assert_eq!(rec.recommended_frequency, minutes(1440));
        assert!(!rec.auto_adjust_eligible);
    }

    #[test]
    fn malformed_risk_is_treated_conservatively() {
        let rec = recommend(minutes(30), f64::NAN, Stability::Stable);
        assert_eq!(rec.change, ScheduleChange::Tighten);
        assert!(!rec.auto_adjust_eligible);

        let rec = recommend(minutes(30), 150.0, Stability::Stable);
        assert_eq!(rec.change, ScheduleChange::Tighten);

        let rec = recommend(minutes(30), -5.0, Stability::Stable);
        assert_eq!(rec.change, ScheduleChange::Relax);
    }

    #[test]
    fn custom_policy_steps() {
        let config = SchedulingConfig {
            tighten_steps: 1,
            relax_steps: 2,
            ..SchedulingConfig::default()
        };
        let recommender = SchedulingRecommender::new(&config);
        let tighter = recommender.recommend(minutes(15), 85.0, Stability::Stable);
        assert_eq!(tighter.recommended_frequency, minutes(10));
        let looser = recommender.recommend(minutes(15), 10.0, Stability::Stable);
        assert_eq!(looser.recommended_frequency, minutes(60));
    }

    #[test]
    fn recommendations_are_deterministic() {
        let first = recommend(minutes(15), 87.0, Stability::Degrading);
        let second = recommend(minutes(15), 87.0, Stability::Degrading);
        assert_eq!(first, second);
    }
}

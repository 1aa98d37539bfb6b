use serde::Serialize;

use forgeiq_application::ViewReport;
use forgeiq_domain::{Emphasis, Severity, compact};

use super::numbers::{grouped, percent, signed_percent};

/// Headline figure shown at the top of a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub note: Option<String>,
    pub emphasis: Emphasis,
}

impl StatCard {
    fn new(title: &'static str, value: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            title,
            value: value.into(),
            note: None,
            emphasis,
        }
    }

    fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

fn or_na<T>(value: Option<T>, show: impl Fn(T) -> String) -> String {
    value.map_or_else(|| "n/a".to_string(), show)
}

pub fn stat_cards(report: &ViewReport) -> Vec<StatCard> {
    match report {
        ViewReport::Analytics(r) => vec![
            StatCard::new("Total Tests", grouped(r.total_tests), Emphasis::Info)
                .note(r.range.to_string()),
            StatCard::new("Success Rate", percent(r.success_rate_pct), Emphasis::Positive),
            StatCard::new("Failures", r.failures.to_string(), Emphasis::Danger),
            StatCard::new(
                "Avg Latency",
                format!("{:.0}ms", r.avg_latency_ms),
                Emphasis::Info,
            ),
        ],
        ViewReport::Anomalies(r) => vec![
            StatCard::new("Active Anomalies", r.anomalies.len().to_string(), Emphasis::Info),
            StatCard::new(
                "Critical",
                r.count(Severity::Critical).to_string(),
                Emphasis::Danger,
            ),
            StatCard::new(
                "High Priority",
                r.count(Severity::High).to_string(),
                Emphasis::Warning,
            ),
            StatCard::new(
                "Resolved Today",
                or_na(r.resolved_today, |n| n.to_string()),
                Emphasis::Positive,
            ),
        ],
        ViewReport::Predictions(r) => vec![
            StatCard::new(
                "Active Predictions",
                r.predictions.len().to_string(),
                Emphasis::Info,
            ),
            StatCard::new(
                "Prevented Outages",
                or_na(r.prevented_outages, |n| n.to_string()),
                Emphasis::Positive,
            ),
            StatCard::new(
                "Avg Confidence",
                or_na(r.avg_confidence_pct, |pct| format!("{pct:.0}%")),
                Emphasis::Info,
            ),
            StatCard::new("High Priority", r.likely_failures.to_string(), Emphasis::Danger),
        ],
        ViewReport::Scheduling(r) => vec![
            StatCard::new(
                "Active Schedules",
                or_na(r.active_schedules, |n| n.to_string()),
                Emphasis::Info,
            ),
            StatCard::new("Auto-Adjusted", r.auto_adjusted.to_string(), Emphasis::Positive),
            StatCard::new("Pending Review", r.pending_review.to_string(), Emphasis::Warning),
            StatCard::new(
                "Efficiency Gain",
                or_na(r.efficiency_gain_pct, percent),
                Emphasis::Info,
            ),
        ],
        ViewReport::Coverage(r) => vec![
            StatCard::new(
                "Overall Coverage",
                percent(r.overall_coverage_pct),
                Emphasis::Info,
            ),
            StatCard::new("Coverage Gaps", r.gap_endpoints.to_string(), Emphasis::Danger),
            StatCard::new("Well Covered", r.well_covered.to_string(), Emphasis::Positive),
            StatCard::new(
                "Improvement",
                or_na(r.improvement_pct, signed_percent),
                Emphasis::Info,
            ),
        ],
        ViewReport::Business(r) => {
            let mut resolution = StatCard::new(
                "Avg Resolution Time",
                or_na(r.avg_resolution_minutes, |m| format!("{m} min")),
                Emphasis::Info,
            );
            if let Some(change) = r.resolution_change_pct {
                resolution = resolution.note(format!("{} vs last month", signed_percent(change)));
            }
            vec![
                StatCard::new(
                    "Potential Revenue at Risk",
                    format!("${}", compact(r.revenue_at_risk_per_hour)),
                    Emphasis::Danger,
                )
                .note("Per hour of downtime"),
                StatCard::new("Affected Users", compact(r.affected_users), Emphasis::Warning)
                    .note("In case of major outage"),
                resolution,
                StatCard::new(
                    "SLA Violations",
                    or_na(r.sla_violations_this_month, |n| n.to_string()),
                    Emphasis::Caution,
                )
                .note("This month"),
            ]
        }
    }
}

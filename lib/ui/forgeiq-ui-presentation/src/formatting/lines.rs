use chrono::{DateTime, Utc};
use serde::Serialize;

use forgeiq_application::{
    AnalyticsReport, AnomalyReport, BusinessReport, CoverageReport, PredictionReport,
    ScheduleReport, ViewReport,
};
use forgeiq_domain::{HeatLevel, Severity, Tiered, WEEKDAYS};

use super::badges::{Badge, badge, reported_badge};
use super::numbers::{age, money_per_hour, percent, users};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Heading,
    Item,
    Detail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub kind: LineKind,
    pub text: String,
    pub badge: Option<Badge>,
}

impl ReportLine {
    fn heading(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Heading,
            text: text.into(),
            badge: None,
        }
    }

    fn item(text: impl Into<String>, tier: impl Tiered) -> Self {
        Self {
            kind: LineKind::Item,
            text: text.into(),
            badge: Some(badge(tier)),
        }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Item,
            text: text.into(),
            badge: None,
        }
    }

    fn detail(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Detail,
            text: text.into(),
            badge: None,
        }
    }

    fn with_badge(mut self, tier: impl Tiered) -> Self {
        self.badge = Some(badge(tier));
        self
    }

    fn badged(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// Line-oriented rendering of a report. `now` anchors relative ages.
pub fn report_lines(report: &ViewReport, now: DateTime<Utc>) -> Vec<ReportLine> {
    match report {
        ViewReport::Analytics(r) => analytics_lines(r),
        ViewReport::Anomalies(r) => anomaly_lines(r, now),
        ViewReport::Predictions(r) => prediction_lines(r),
        ViewReport::Scheduling(r) => schedule_lines(r),
        ViewReport::Coverage(r) => coverage_lines(r),
        ViewReport::Business(r) => business_lines(r),
    }
}

fn analytics_lines(report: &AnalyticsReport) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::heading(format!(
        "Success vs Failure Trends ({})",
        report.range
    ))];
    lines.extend(report.trend.iter().map(|point| {
        ReportLine::plain(format!(
            "{:<8} {:>4} passed {:>3} failed {:>4}ms",
            point.label, point.successes, point.failures, point.avg_latency_ms
        ))
    }));

    lines.push(ReportLine::heading("Failure Heatmap by Endpoint"));
    for row in &report.heatmap {
        let worst = row.levels.iter().copied().max().unwrap_or(HeatLevel::Clear);
        let cells: Vec<String> = WEEKDAYS
            .iter()
            .zip(row.daily_failures.iter())
            .map(|(day, failures)| format!("{day} {failures}"))
            .collect();
        lines.push(ReportLine::item(
            format!("{:<16} {}", row.endpoint, cells.join("  ")),
            worst,
        ));
    }
    lines
}

fn anomaly_lines(report: &AnomalyReport, now: DateTime<Utc>) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::heading("Detected Anomalies")];
    for entry in &report.anomalies {
        let anomaly = &entry.anomaly;
        lines.push(
            ReportLine::plain(format!("{} on {}", anomaly.kind.title(), anomaly.endpoint))
                .badged(reported_badge(&anomaly.reported_severity, entry.severity)),
        );
        lines.push(ReportLine::detail(anomaly.description.clone()));
        lines.push(ReportLine::detail(format!(
            "Baseline {} -> current {} ({:+.0}%), {}",
            anomaly.baseline,
            anomaly.current,
            anomaly.deviation_pct,
            age(anomaly.detected_at, now)
        )));
    }
    lines
}

fn prediction_lines(report: &PredictionReport) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::heading("24-Hour Reliability Forecast")];
    for point in &report.forecast {
        let actual = point
            .actual
            .map_or_else(|| "  -".to_string(), |value| format!("{value:>3.0}"));
        lines.push(ReportLine::plain(format!(
            "{}  actual {}%  predicted {:>3.0}%  confidence {:.0}%",
            point.time, actual, point.predicted, point.confidence
        )));
    }
    if let Some(start) = &report.degradation_start {
        lines.push(
            ReportLine::detail(format!("Success rate projected to degrade from {start}"))
                .with_badge(Severity::High),
        );
    }

    lines.push(ReportLine::heading("Upcoming Failure Predictions"));
    for entry in &report.predictions {
        let prediction = &entry.prediction;
        lines.push(ReportLine::item(
            format!(
                "{}  {} within {}",
                prediction.endpoint,
                percent(prediction.probability),
                prediction.timeframe
            ),
            entry.likelihood,
        ));
        lines.push(ReportLine::detail(prediction.reason.clone()));
        lines.push(
            ReportLine::detail(format!("Impact: {}", entry.impact.label()))
                .badged(reported_badge(&prediction.impact, entry.impact)),
        );
        lines.push(ReportLine::detail(format!(
            "Recommended action: {}",
            prediction.recommendation
        )));
    }
    lines
}

fn schedule_lines(report: &ScheduleReport) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::heading("Recommended vs Current Test Frequency")];
    lines.extend(report.load.iter().map(|point| {
        ReportLine::plain(format!(
            "{}  current {:>3}  recommended {:>3}",
            point.hour, point.current_tests, point.recommended_tests
        ))
    }));

    lines.push(ReportLine::heading("Schedule Recommendations"));
    for entry in &report.endpoints {
        let rec = &entry.recommendation;
        lines.push(ReportLine::item(
            format!(
                "{}  {} -> {} ({})",
                entry.schedule.endpoint,
                rec.current,
                rec.recommended_frequency,
                rec.change.label()
            ),
            entry.risk,
        ));
        lines.push(ReportLine::detail(format!(
            "Risk score {:.0}: {}",
            entry.schedule.risk_score, entry.schedule.reason
        )));
        let status = if entry.applied {
            "Applied automatically"
        } else if rec.auto_adjust_eligible {
            "Eligible for auto-adjust"
        } else if rec.is_change() {
            "Requires review"
        } else {
            "No change needed"
        };
        lines.push(ReportLine::detail(status));
    }
    lines
}

fn coverage_lines(report: &CoverageReport) -> Vec<ReportLine> {
    let dist = &report.distribution;
    let mut lines = vec![
        ReportLine::heading("Coverage Distribution"),
        ReportLine::plain(format!(
            "Covered {}  Partial {}  No Coverage {}",
            percent(dist.covered),
            percent(dist.partial),
            percent(dist.uncovered)
        )),
        ReportLine::heading("Service Coverage Details"),
    ];
    lines.extend(report.services.iter().map(|entry| {
        let service = &entry.coverage;
        ReportLine::item(
            format!(
                "{:<22} {:>4}  {} tests / {} endpoints",
                service.service,
                percent(service.coverage_pct),
                service.tests,
                service.endpoints
            ),
            entry.tier,
        )
    }));

    lines.push(ReportLine::heading("Recommended Tests to Add"));
    for entry in &report.gaps {
        let gap = &entry.gap;
        lines.push(
            ReportLine::plain(gap.endpoint.clone())
                .badged(reported_badge(&gap.priority, entry.priority)),
        );
        lines.push(ReportLine::detail(gap.reason.clone()));
        lines.push(ReportLine::detail(format!(
            "Traffic {}, {}",
            gap.traffic, gap.failure_history
        )));
        lines.push(ReportLine::detail(format!(
            "Suggested: {}",
            gap.suggested_tests.join(", ")
        )));
    }
    lines
}

fn business_lines(report: &BusinessReport) -> Vec<ReportLine> {
    let mut lines = vec![ReportLine::heading("Overall Reliability Score Trend")];
    let trend: Vec<String> = report
        .reliability_trend
        .iter()
        .map(|point| format!("{} {:.0}", point.month, point.score))
        .collect();
    if !trend.is_empty() {
        lines.push(ReportLine::plain(trend.join("  ")));
    }
    if let (Some(score), Some(target)) = (report.overall_score, report.target_score) {
        lines.push(ReportLine::detail(format!(
            "Current overall score {score:.0}, target {target:.0}"
        )));
    }

    lines.push(ReportLine::heading("API Reliability & Business Impact"));
    for entry in &report.apis {
        let api = &entry.api;
        lines.push(ReportLine::item(
            format!("{}  score {:.0}", api.api, api.score),
            entry.tier,
        ));
        lines.push(
            ReportLine::detail(format!(
                "Uptime {}% vs SLA {}% ({:+.1})",
                api.current_uptime, api.sla_target, entry.sla_delta
            ))
            .with_badge(entry.sla_status),
        );
        lines.push(
            ReportLine::detail(format!(
                "Revenue impact {}, est. loss {}",
                entry.revenue_impact.label(),
                money_per_hour(api.estimated_loss_per_hour)
            ))
            .badged(reported_badge(&api.revenue_impact, entry.revenue_impact)),
        );
        lines.push(
            ReportLine::detail(format!(
                "Customer impact {}, {} affected users",
                entry.customer_impact.label(),
                users(api.affected_users)
            ))
            .badged(reported_badge(&api.customer_impact, entry.customer_impact)),
        );
        lines.push(ReportLine::detail(format!(
            "Priority recommendation: {}, {} pending action items",
            entry.action.label(),
            entry.action_items
        )));
    }

    lines.push(ReportLine::heading("Executive Summary"));
    lines.push(ReportLine::plain(report.executive_summary.clone()));
    lines
}

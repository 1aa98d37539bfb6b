use std::collections::BTreeMap;

use anyhow::{Context, Result};

use forgeiq_domain::{
    FailureLikelihood, ForgeConfig, MetricKind, ReliabilityTier, Severity, TestFrequency,
    TimeRange, ViewKind, compact,
};
use forgeiq_engine::{Classifier, SchedulingRecommender};
use forgeiq_ports::PortSet;

use crate::reports::{
    AnalyticsReport, AnomalyReport, ApiAssessment, BusinessReport, ClassifiedAnomaly,
    ClassifiedGap, ClassifiedPrediction, CoverageReport, HeatmapEntry, PredictionReport,
    ScheduleReport, ScheduledEndpoint, ServiceAssessment, SeverityCount, TierSummary, TierTally,
    ViewReport,
};
use crate::state::DashboardState;

pub struct Dashboard {
    ports: PortSet,
    classifier: Classifier,
    recommender: SchedulingRecommender,
    state: DashboardState,
    /// Cadences applied this session, keyed by schedule id.
    applied: BTreeMap<u32, TestFrequency>,
}

impl Dashboard {
    pub fn new(config: &ForgeConfig) -> Self {
        Self::new_with_ports(config, PortSet::empty())
    }

    pub fn new_with_ports(config: &ForgeConfig, ports: PortSet) -> Self {
        Self {
            ports,
            classifier: Classifier::from_config(config),
            recommender: SchedulingRecommender::from_config(config),
            state: DashboardState::default(),
            applied: BTreeMap::new(),
        }
    }

    pub fn with_state(mut self, state: DashboardState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> DashboardState {
        self.state
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn recommender(&self) -> &SchedulingRecommender {
        &self.recommender
    }

    pub fn select_view(&mut self, view: ViewKind) {
        self.state.view = view;
    }

    pub fn next_view(&mut self) {
        self.state.view = self.state.view.next();
    }

    pub fn prev_view(&mut self) {
        self.state.view = self.state.view.prev();
    }

    pub fn set_range(&mut self, range: TimeRange) {
        self.state.range = range;
    }

    pub fn cycle_range(&mut self) {
        self.state.range = self.state.range.next();
    }

    pub fn current_report(&self) -> Result<ViewReport> {
        self.report(self.state.view)
    }

    pub fn report(&self, view: ViewKind) -> Result<ViewReport> {
        let report = match view {
            ViewKind::Analytics => ViewReport::Analytics(self.analytics()?),
            ViewKind::Anomalies => ViewReport::Anomalies(self.anomalies()?),
            ViewKind::Predictions => ViewReport::Predictions(self.predictions()?),
            ViewKind::Scheduling => ViewReport::Scheduling(self.scheduling()?),
            ViewKind::Coverage => ViewReport::Coverage(self.coverage()?),
            ViewKind::Business => ViewReport::Business(self.business()?),
        };
        Ok(report)
    }

    pub fn analytics(&self) -> Result<AnalyticsReport> {
        let range = self.state.range;
        let port = &self.ports.analytics;
        let trend = port
            .success_trend(range)
            .context("failed to load success trend")?;
        let heatmap = port
            .failure_heatmap()
            .context("failed to load failure heatmap")?
            .into_iter()
            .map(|row| HeatmapEntry {
                levels: row
                    .daily_failures
                    .map(|failures| self.classifier.classify_failure_count(failures)),
                daily_failures: row.daily_failures,
                endpoint: row.endpoint,
            })
            .collect();

        let (successes, failures) = trend.iter().fold((0u64, 0u64), |(ok, failed), point| {
            (
                ok.saturating_add(u64::from(point.successes)),
                failed.saturating_add(u64::from(point.failures)),
            )
        });
        let total_tests = successes.saturating_add(failures);
        Ok(AnalyticsReport {
            range,
            total_tests,
            success_rate_pct: ratio_pct(successes, total_tests),
            failures,
            avg_latency_ms: mean(trend.iter().map(|point| f64::from(point.avg_latency_ms)))
                .unwrap_or(0.0),
            trend,
            heatmap,
        })
    }

    pub fn anomalies(&self) -> Result<AnomalyReport> {
        let port = &self.ports.analytics;
        let mut anomalies: Vec<ClassifiedAnomaly> = port
            .anomalies()
            .context("failed to load anomalies")?
            .into_iter()
            .map(|anomaly| ClassifiedAnomaly {
                severity: self.classifier.classify_severity(&anomaly.reported_severity),
                deviation_severity: self.classifier.classify_deviation(anomaly.deviation_pct),
                anomaly,
            })
            .collect();
        anomalies.sort_by(|a, b| b.anomaly.detected_at.cmp(&a.anomaly.detected_at));

        let by_severity = Severity::ALL
            .into_iter()
            .map(|severity| SeverityCount {
                severity,
                count: anomalies.iter().filter(|a| a.severity == severity).count(),
            })
            .collect();
        let counters = port.counters().context("failed to load counters")?;
        Ok(AnomalyReport {
            anomalies,
            by_severity,
            resolved_today: counters.map(|c| c.resolved_anomalies_today),
        })
    }

    pub fn predictions(&self) -> Result<PredictionReport> {
        let port = &self.ports.analytics;
        let predictions: Vec<ClassifiedPrediction> = port
            .failure_predictions()
            .context("failed to load failure predictions")?
            .into_iter()
            .map(|prediction| ClassifiedPrediction {
                likelihood: self
                    .classifier
                    .classify_failure_probability(prediction.probability),
                impact: self.classifier.classify_severity(&prediction.impact),
                prediction,
            })
            .collect();
        let forecast = port
            .reliability_forecast()
            .context("failed to load reliability forecast")?;

        let floor = forecast
            .iter()
            .filter_map(|point| point.actual)
            .fold(None, |low: Option<f64>, value| {
                Some(low.map_or(value, |low| low.min(value)))
            });
        let degradation_start = floor.and_then(|floor| {
            forecast
                .iter()
                .find(|point| point.actual.is_none() && point.predicted < floor)
                .map(|point| point.time.clone())
        });
        let likely_failures = predictions
            .iter()
            .filter(|p| p.likelihood == FailureLikelihood::Likely)
            .count();
        let counters = port.counters().context("failed to load counters")?;

        Ok(PredictionReport {
            avg_confidence_pct: mean(forecast.iter().map(|point| point.confidence)),
            degradation_start,
            likely_failures,
            prevented_outages: counters.map(|c| c.prevented_outages),
            predictions,
            forecast,
        })
    }

    pub fn scheduling(&self) -> Result<ScheduleReport> {
        let port = &self.ports.analytics;
        let endpoints: Vec<ScheduledEndpoint> = port
            .endpoint_schedules()
            .context("failed to load endpoint schedules")?
            .into_iter()
            .map(|schedule| {
                let recommendation =
                    self.recommender
                        .recommend(schedule.current, schedule.risk_score, schedule.stability);
                ScheduledEndpoint {
                    risk: self.classifier.classify_risk(schedule.risk_score),
                    applied: self.applied.contains_key(&schedule.id),
                    recommendation,
                    schedule,
                }
            })
            .collect();
        let load = port.schedule_load().context("failed to load schedule load")?;
        let counters = port.counters().context("failed to load counters")?;

        let pending_review = endpoints
            .iter()
            .filter(|e| e.recommendation.is_change() && !e.applied)
            .count();
        let applied = u32::try_from(self.applied.len()).unwrap_or(u32::MAX);
        Ok(ScheduleReport {
            pending_review,
            auto_adjusted: counters
                .as_ref()
                .map_or(0, |c| c.auto_adjusted_schedules)
                .saturating_add(applied),
            active_schedules: counters.as_ref().map(|c| c.active_schedules),
            efficiency_gain_pct: counters.as_ref().map(|c| c.efficiency_gain_pct),
            endpoints,
            load,
        })
    }

    /// Apply every pending change that is eligible for automatic adjustment.
    /// Returns how many were applied; tightenings are left for review.
    pub fn apply_all_schedules(&mut self) -> Result<usize> {
        let report = self.scheduling()?;
        let mut applied = 0;
        for endpoint in report.endpoints {
            let rec = endpoint.recommendation;
            if endpoint.applied || !rec.auto_adjust_eligible {
                continue;
            }
            tracing::info!(
                endpoint = %endpoint.schedule.endpoint,
                from = %rec.current,
                to = %rec.recommended_frequency,
                "applied schedule recommendation"
            );
            self.applied
                .insert(endpoint.schedule.id, rec.recommended_frequency);
            applied += 1;
        }
        Ok(applied)
    }

    /// Cadence applied this session for a schedule, if any.
    pub fn applied_frequency(&self, schedule_id: u32) -> Option<TestFrequency> {
        self.applied.get(&schedule_id).copied()
    }

    pub fn coverage(&self) -> Result<CoverageReport> {
        let port = &self.ports.analytics;
        let services: Vec<ServiceAssessment> = port
            .service_coverage()
            .context("failed to load service coverage")?
            .into_iter()
            .map(|coverage| ServiceAssessment {
                tier: self.classifier.classify_coverage(coverage.coverage_pct),
                coverage,
            })
            .collect();
        let mut gaps: Vec<ClassifiedGap> = port
            .coverage_gaps()
            .context("failed to load coverage gaps")?
            .into_iter()
            .map(|gap| ClassifiedGap {
                priority: self.classifier.classify_severity(&gap.priority),
                gap,
            })
            .collect();
        gaps.sort_by(|a, b| b.priority.cmp(&a.priority));
        let distribution = port
            .coverage_distribution()
            .context("failed to load coverage distribution")?;
        let counters = port.counters().context("failed to load counters")?;

        Ok(CoverageReport {
            overall_coverage_pct: distribution.covered,
            gap_endpoints: services
                .iter()
                .map(|s| s.coverage.endpoints.saturating_sub(s.coverage.tests))
                .fold(0, u32::saturating_add),
            well_covered: services
                .iter()
                .map(|s| s.coverage.tests)
                .fold(0, u32::saturating_add),
            improvement_pct: counters.map(|c| c.coverage_improvement_pct),
            distribution,
            services,
            gaps,
        })
    }

    pub fn business(&self) -> Result<BusinessReport> {
        let port = &self.ports.analytics;
        let apis: Vec<ApiAssessment> = port
            .api_reliability()
            .context("failed to load api reliability")?
            .into_iter()
            .map(|api| {
                let tier = self.classifier.classify_reliability(api.score);
                ApiAssessment {
                    action: self.classifier.reliability_action(tier),
                    action_items: self.classifier.action_items(tier),
                    sla_delta: forgeiq_engine::sla_delta(api.current_uptime, api.sla_target),
                    sla_status: self
                        .classifier
                        .classify_sla(api.current_uptime, api.sla_target),
                    revenue_impact: self.classifier.classify_severity(&api.revenue_impact),
                    customer_impact: self.classifier.classify_severity(&api.customer_impact),
                    tier,
                    api,
                }
            })
            .collect();
        let reliability_trend = port
            .reliability_trend()
            .context("failed to load reliability trend")?;
        let counters = port.counters().context("failed to load counters")?;

        let mut needs_attention: Vec<ApiAssessment> = apis
            .iter()
            .filter(|a| a.tier != ReliabilityTier::Healthy)
            .cloned()
            .collect();
        needs_attention.sort_by(|a, b| a.api.score.total_cmp(&b.api.score));

        let revenue_at_risk_per_hour = apis
            .iter()
            .map(|a| a.api.estimated_loss_per_hour)
            .fold(0, u64::saturating_add);
        let overall_score = reliability_trend.last().map(|point| point.score);
        let executive_summary =
            executive_summary(overall_score, revenue_at_risk_per_hour, &needs_attention);

        Ok(BusinessReport {
            affected_users: apis
                .iter()
                .map(|a| a.api.affected_users)
                .fold(0, u64::saturating_add),
            revenue_at_risk_per_hour,
            needs_attention,
            overall_score,
            target_score: counters.as_ref().map(|c| c.reliability_target),
            avg_resolution_minutes: counters.as_ref().map(|c| c.avg_resolution_minutes),
            resolution_change_pct: counters.as_ref().map(|c| c.resolution_change_pct),
            sla_violations_this_month: counters.as_ref().map(|c| c.sla_violations_this_month),
            executive_summary,
            reliability_trend,
            apis,
        })
    }

    /// Tier counts over every metric sample the port reports for `range`.
    pub fn tier_summary(&self, range: TimeRange) -> Result<TierSummary> {
        let samples = self
            .ports
            .analytics
            .fetch_metrics(range)
            .with_context(|| format!("failed to fetch metrics for {range}"))?;

        let mut tallies: Vec<TierTally> = Vec::new();
        for sample in &samples {
            let tier = self.classifier.classify_sample(sample);
            match tallies
                .iter_mut()
                .find(|t| t.kind == sample.kind && t.tier == tier)
            {
                Some(tally) => tally.count += 1,
                None => tallies.push(TierTally {
                    kind: sample.kind,
                    tier,
                    count: 1,
                }),
            }
        }
        tallies.sort_by_key(|t| kind_rank(t.kind));
        Ok(TierSummary {
            range,
            samples: samples.len(),
            tallies,
        })
    }
}

fn kind_rank(kind: MetricKind) -> usize {
    MetricKind::ALL
        .iter()
        .position(|k| *k == kind)
        .unwrap_or(MetricKind::ALL.len())
}

fn ratio_pct(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

fn executive_summary(
    overall_score: Option<f64>,
    revenue_at_risk: u64,
    needs_attention: &[ApiAssessment],
) -> String {
    let mut summary = match overall_score {
        Some(score) => format!("Current system reliability is at {score:.0}/100"),
        None => "No reliability history is available".to_string(),
    };
    let count = needs_attention.len();
    summary.push_str(&match count {
        0 => ", with no APIs requiring attention. ".to_string(),
        1 => ", with 1 API requiring attention. ".to_string(),
        n => format!(", with {n} APIs requiring attention. "),
    });
    summary.push_str(&format!(
        "Total potential revenue exposure is ${}/hour across all critical systems.",
        compact(revenue_at_risk)
    ));
    if count > 0 {
        let focus: Vec<String> = needs_attention
            .iter()
            .map(|a| format!("{} (score: {:.0})", a.api.api, a.api.score))
            .collect();
        summary.push_str(&format!(
            " Priority focus should be on {} to reduce business risk.",
            focus.join(", ")
        ));
    }
    summary
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use forgeiq_adapter_fixtures::{AnalyticsSnapshot, FixtureAnalytics};
    use forgeiq_domain::{
        ApiReliability, CoverageTier, HeatLevel, ReliabilityAction, ScheduleChange,
        ServiceCoverage, SlaStatus, TrendPoint,
    };
    use forgeiq_engine::SampleTier;

    use super::*;

    fn dashboard() -> Dashboard {
        let now = Utc.with_ymd_and_hms(2025, 11, 29, 12, 0, 0).unwrap();
        let ports = PortSet::new(Arc::new(FixtureAnalytics::sample_at(now)));
        Dashboard::new_with_ports(&ForgeConfig::default(), ports)
    }

    #[test]
    fn analytics_totals_follow_the_trend_window() {
        let mut dash = dashboard();
        let month = dash.analytics().unwrap();
        assert_eq!(month.total_tests, 1410);
        assert_eq!(month.failures, 50);
        assert_eq!(month.success_rate_pct, 96.5);
        assert_eq!(month.avg_latency_ms, 173.0);

        dash.set_range(TimeRange::Days7);
        let week = dash.analytics().unwrap();
        assert_eq!(week.trend.len(), 1);
        assert_eq!(week.total_tests, 311);
        assert_eq!(week.avg_latency_ms, 170.0);
    }

    #[test]
    fn heatmap_cells_are_classified_by_failure_count() {
        let report = dashboard().analytics().unwrap();
        let orders = report
            .heatmap
            .iter()
            .find(|row| row.endpoint == "/api/orders")
            .unwrap();
        assert_eq!(orders.levels[0], HeatLevel::Hot);
        assert_eq!(orders.levels[3], HeatLevel::Elevated);
        assert_eq!(orders.levels[6], HeatLevel::Clear);
    }

    #[test]
    fn anomalies_are_counted_by_reported_severity() {
        let report = dashboard().anomalies().unwrap();
        assert_eq!(report.anomalies.len(), 4);
        assert_eq!(report.count(Severity::Critical), 1);
        assert_eq!(report.count(Severity::High), 1);
        assert_eq!(report.count(Severity::Medium), 1);
        assert_eq!(report.count(Severity::Low), 1);
        assert_eq!(report.by_severity[0].severity, Severity::Critical);
        assert_eq!(report.resolved_today, Some(12));
        // newest first
        assert_eq!(report.anomalies[0].anomaly.endpoint, "/api/orders/checkout");
        assert_eq!(report.anomalies[1].deviation_severity, Severity::Critical);
    }

    #[test]
    fn predictions_find_degradation_start() {
        let report = dashboard().predictions().unwrap();
        assert_eq!(report.degradation_start.as_deref(), Some("16:00"));
        assert_eq!(report.likely_failures, 1);
        assert_eq!(report.prevented_outages, Some(18));
        let likelihoods: Vec<FailureLikelihood> =
            report.predictions.iter().map(|p| p.likelihood).collect();
        assert_eq!(
            likelihoods,
            vec![
                FailureLikelihood::Likely,
                FailureLikelihood::Elevated,
                FailureLikelihood::Watch
            ]
        );
        assert_eq!(report.predictions[2].impact, Severity::Critical);
        let confidence = report.avg_confidence_pct.unwrap();
        assert!((confidence - 585.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn scheduling_matches_the_recommender() {
        let report = dashboard().scheduling().unwrap();
        let changes: Vec<(ScheduleChange, bool)> = report
            .endpoints
            .iter()
            .map(|e| (e.recommendation.change, e.recommendation.auto_adjust_eligible))
            .collect();
        assert_eq!(
            changes,
            vec![
                (ScheduleChange::Tighten, false),
                (ScheduleChange::Relax, true),
                (ScheduleChange::Tighten, false),
                (ScheduleChange::Relax, true),
            ]
        );
        assert_eq!(
            report.endpoints[0].recommendation.recommended_frequency,
            TestFrequency::from_minutes(5)
        );
        assert_eq!(report.endpoints[2].risk, Severity::Critical);
        assert_eq!(report.pending_review, 4);
        assert_eq!(report.auto_adjusted, 28);
    }

    #[test]
    fn apply_all_only_touches_eligible_changes() {
        let mut dash = dashboard();
        assert_eq!(dash.apply_all_schedules().unwrap(), 2);
        assert_eq!(
            dash.applied_frequency(2),
            Some(TestFrequency::from_minutes(60))
        );
        assert_eq!(dash.applied_frequency(1), None);

        let report = dash.scheduling().unwrap();
        assert_eq!(report.pending_review, 2);
        assert_eq!(report.auto_adjusted, 30);

        // second pass has nothing left to apply
        assert_eq!(dash.apply_all_schedules().unwrap(), 0);
    }

    #[test]
    fn coverage_counts_come_from_the_service_table() {
        let report = dashboard().coverage().unwrap();
        assert_eq!(report.overall_coverage_pct, 68.0);
        assert_eq!(report.well_covered, 148);
        assert_eq!(report.gap_endpoints, 60);
        let tiers: Vec<CoverageTier> = report.services.iter().map(|s| s.tier).collect();
        assert_eq!(
            tiers,
            vec![
                CoverageTier::Good,
                CoverageTier::NeedsAttention,
                CoverageTier::Good,
                CoverageTier::Poor,
                CoverageTier::Poor,
            ]
        );
        assert_eq!(report.gaps[0].priority, Severity::Critical);
    }

    #[test]
    fn business_totals_and_attention_list() {
        let report = dashboard().business().unwrap();
        assert_eq!(report.revenue_at_risk_per_hour, 435_000);
        assert_eq!(report.affected_users, 215_000);
        assert_eq!(report.overall_score, Some(95.0));
        assert_eq!(report.target_score, Some(98.0));

        let attention: Vec<&str> = report
            .needs_attention
            .iter()
            .map(|a| a.api.api.as_str())
            .collect();
        assert_eq!(
            attention,
            vec!["Notifications", "Product Catalog", "Order Management"]
        );

        let payments = &report.apis[0];
        assert_eq!(payments.tier, ReliabilityTier::Healthy);
        assert_eq!(payments.action, ReliabilityAction::Maintain);
        assert_eq!(payments.action_items, 0);
        assert_eq!(payments.sla_status, SlaStatus::Below);
        assert_eq!(report.apis[2].sla_status, SlaStatus::AtRisk);
        assert_eq!(report.apis[2].customer_impact, Severity::Critical);
        assert_eq!(report.apis[4].action_items, 5);

        assert!(report.executive_summary.contains("95/100"));
        assert!(report.executive_summary.contains("$435K/hour"));
        assert!(report.executive_summary.contains("Notifications (score: 82)"));
    }

    #[test]
    fn tier_summary_counts_every_sample() {
        let summary = dashboard().tier_summary(TimeRange::Days30).unwrap();
        assert_eq!(summary.samples, 26);
        let total: usize = summary.tallies.iter().map(|t| t.count).sum();
        assert_eq!(total, 26);
        assert_eq!(
            summary.count(MetricKind::RiskScore, SampleTier::Severity(Severity::Critical)),
            2
        );
        assert_eq!(
            summary.count(MetricKind::SlaDelta, SampleTier::Sla(SlaStatus::Below)),
            4
        );
        assert_eq!(summary.tallies[0].kind, MetricKind::RiskScore);
    }

    #[test]
    fn huge_dataset_totals_do_not_overflow() {
        let point = |label: &str| TrendPoint {
            label: label.to_string(),
            successes: 3_000_000_000,
            failures: 3_000_000_000,
            avg_latency_ms: 100,
        };
        let service = |name: &str| ServiceCoverage {
            service: name.to_string(),
            coverage_pct: 50.0,
            tests: u32::MAX,
            endpoints: u32::MAX,
        };
        let api = |id: u32| ApiReliability {
            id,
            api: format!("api-{id}"),
            score: 90.0,
            sla_target: 99.9,
            current_uptime: 99.0,
            revenue_impact: "high".to_string(),
            estimated_loss_per_hour: u64::MAX,
            customer_impact: "high".to_string(),
            affected_users: u64::MAX,
        };
        let snapshot = AnalyticsSnapshot {
            trend: vec![point("Nov 22"), point("Nov 29")],
            services: vec![service("Orders"), service("Payments")],
            apis: vec![api(1), api(2)],
            ..AnalyticsSnapshot::default()
        };
        let ports = PortSet::new(Arc::new(FixtureAnalytics::new(snapshot)));
        let dash = Dashboard::new_with_ports(&ForgeConfig::default(), ports);

        let analytics = dash.analytics().unwrap();
        assert_eq!(analytics.total_tests, 12_000_000_000);
        assert_eq!(analytics.failures, 6_000_000_000);
        assert_eq!(analytics.success_rate_pct, 50.0);

        let coverage = dash.coverage().unwrap();
        assert_eq!(coverage.well_covered, u32::MAX);
        assert_eq!(coverage.gap_endpoints, 0);

        let business = dash.business().unwrap();
        assert_eq!(business.revenue_at_risk_per_hour, u64::MAX);
        assert_eq!(business.affected_users, u64::MAX);
    }

    #[test]
    fn tier_summary_and_business_view_agree_on_sla() {
        let snapshot = AnalyticsSnapshot {
            apis: vec![ApiReliability {
                id: 7,
                api: "Legacy Gateway".to_string(),
                score: 97.0,
                sla_target: 0.0,
                current_uptime: -1.0,
                revenue_impact: "low".to_string(),
                estimated_loss_per_hour: 1_000,
                customer_impact: "low".to_string(),
                affected_users: 10,
            }],
            ..AnalyticsSnapshot::default()
        };
        let ports = PortSet::new(Arc::new(FixtureAnalytics::new(snapshot)));
        let dash = Dashboard::new_with_ports(&ForgeConfig::default(), ports);

        let business = dash.business().unwrap();
        assert_eq!(business.apis[0].sla_status, SlaStatus::Meeting);
        let summary = dash.tier_summary(TimeRange::Days30).unwrap();
        assert_eq!(
            summary.count(MetricKind::SlaDelta, SampleTier::Sla(SlaStatus::Meeting)),
            1
        );
    }

    #[test]
    fn empty_ports_produce_empty_reports() {
        let dash = Dashboard::new(&ForgeConfig::default());
        for view in ViewKind::ALL {
            let report = dash.report(view).unwrap();
            assert_eq!(report.view(), view);
        }
        let business = dash.business().unwrap();
        assert_eq!(business.revenue_at_risk_per_hour, 0);
        assert!(business.executive_summary.starts_with("No reliability history"));
        assert_eq!(dash.predictions().unwrap().degradation_start, None);
        assert_eq!(dash.analytics().unwrap().success_rate_pct, 0.0);
    }

    #[test]
    fn navigation_updates_state() {
        let mut dash = dashboard();
        assert_eq!(dash.state().view, ViewKind::Analytics);
        dash.prev_view();
        assert_eq!(dash.state().view, ViewKind::Business);
        dash.next_view();
        dash.select_view(ViewKind::Coverage);
        assert_eq!(dash.state().view, ViewKind::Coverage);
        dash.cycle_range();
        assert_eq!(dash.state().range, TimeRange::Days90);
        assert!(matches!(
            dash.current_report().unwrap(),
            ViewReport::Coverage(_)
        ));
    }

    #[test]
    fn reports_serialize_with_view_tag() {
        let report = dashboard().report(ViewKind::Scheduling).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["view"], "scheduling");
        assert_eq!(
            json["endpoints"][0]["recommendation"]["recommended_frequency"],
            "5m"
        );
    }
}

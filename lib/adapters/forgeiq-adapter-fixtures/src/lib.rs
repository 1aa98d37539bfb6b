//! Analytics port backed by in-memory datasets.
//!
//! [`FixtureAnalytics::sample`] serves the demo datasets; a snapshot file
//! written by [`FixtureAnalytics::save_to_path`] can be served instead.

mod snapshot;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use forgeiq_domain::{
    Anomaly, ApiReliability, CoverageDistribution, CoverageGap, EndpointSchedule,
    FailurePrediction, ForecastPoint, HeatmapRow, MetricKind, MetricSample, OperationalCounters,
    ReliabilityPoint, SchedulePoint, ServiceCoverage, TimeRange, TrendPoint,
};
use forgeiq_engine::sla_delta;
use forgeiq_ports::AnalyticsPort;

pub use snapshot::AnalyticsSnapshot;

#[derive(Debug, Clone)]
pub struct FixtureAnalytics {
    snapshot: AnalyticsSnapshot,
}

impl FixtureAnalytics {
    pub fn new(snapshot: AnalyticsSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn sample() -> Self {
        Self::sample_at(Utc::now())
    }

    pub fn sample_at(now: DateTime<Utc>) -> Self {
        Self::new(AnalyticsSnapshot::sample(now))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?;
        let snapshot: AnalyticsSnapshot = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse dataset {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            anomalies = snapshot.anomalies.len(),
            apis = snapshot.apis.len(),
            "loaded analytics dataset"
        );
        Ok(Self::new(snapshot))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let raw = serde_yaml::to_string(&self.snapshot).context("failed to encode dataset")?;
        fs::write(path, raw).with_context(|| format!("failed to write dataset {}", path.display()))
    }

    pub fn snapshot(&self) -> &AnalyticsSnapshot {
        &self.snapshot
    }
}

/// Number of weekly trend points that fall inside `range`.
fn weeks_in(range: TimeRange) -> usize {
    (range.days() as usize).div_ceil(7).max(1)
}

impl AnalyticsPort for FixtureAnalytics {
    fn fetch_metrics(&self, _range: TimeRange) -> Result<Vec<MetricSample>> {
        let snap = &self.snapshot;
        let mut samples = Vec::new();
        samples.extend(
            snap.schedules
                .iter()
                .map(|s| MetricSample::new(&s.endpoint, MetricKind::RiskScore, s.risk_score)),
        );
        samples.extend(snap.anomalies.iter().map(|a| {
            MetricSample::new(&a.endpoint, MetricKind::AnomalyDeviation, a.deviation_pct)
        }));
        samples.extend(
            snap.services
                .iter()
                .map(|s| MetricSample::new(&s.service, MetricKind::CoveragePercent, s.coverage_pct)),
        );
        samples.extend(snap.predictions.iter().map(|p| {
            MetricSample::new(&p.endpoint, MetricKind::FailureProbability, p.probability)
        }));
        for api in &snap.apis {
            samples.push(MetricSample::new(
                &api.api,
                MetricKind::ReliabilityScore,
                api.score,
            ));
            samples.push(MetricSample::new(
                &api.api,
                MetricKind::SlaDelta,
                sla_delta(api.current_uptime, api.sla_target),
            ));
        }
        Ok(samples)
    }

    fn success_trend(&self, range: TimeRange) -> Result<Vec<TrendPoint>> {
        let trend = &self.snapshot.trend;
        let keep = weeks_in(range).min(trend.len());
        Ok(trend[trend.len() - keep..].to_vec())
    }

    fn failure_heatmap(&self) -> Result<Vec<HeatmapRow>> {
        Ok(self.snapshot.heatmap.clone())
    }

    fn anomalies(&self) -> Result<Vec<Anomaly>> {
        Ok(self.snapshot.anomalies.clone())
    }

    fn failure_predictions(&self) -> Result<Vec<FailurePrediction>> {
        Ok(self.snapshot.predictions.clone())
    }

    fn reliability_forecast(&self) -> Result<Vec<ForecastPoint>> {
        Ok(self.snapshot.forecast.clone())
    }

    fn endpoint_schedules(&self) -> Result<Vec<EndpointSchedule>> {
        Ok(self.snapshot.schedules.clone())
    }

    fn schedule_load(&self) -> Result<Vec<SchedulePoint>> {
        Ok(self.snapshot.schedule_load.clone())
    }

    fn service_coverage(&self) -> Result<Vec<ServiceCoverage>> {
        Ok(self.snapshot.services.clone())
    }

    fn coverage_distribution(&self) -> Result<CoverageDistribution> {
        Ok(self.snapshot.distribution.clone())
    }

    fn coverage_gaps(&self) -> Result<Vec<CoverageGap>> {
        Ok(self.snapshot.gaps.clone())
    }

    fn api_reliability(&self) -> Result<Vec<ApiReliability>> {
        Ok(self.snapshot.apis.clone())
    }

    fn reliability_trend(&self) -> Result<Vec<ReliabilityPoint>> {
        Ok(self.snapshot.reliability_trend.clone())
    }

    fn counters(&self) -> Result<Option<OperationalCounters>> {
        Ok(self.snapshot.counters.clone())
    }
}

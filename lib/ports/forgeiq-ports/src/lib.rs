//! Port traits the application depends on.

use std::sync::Arc;

use anyhow::Result;
use forgeiq_domain::{
    Anomaly, ApiReliability, CoverageDistribution, CoverageGap, EndpointSchedule,
    FailurePrediction, ForecastPoint, HeatmapRow, MetricSample, OperationalCounters,
    ReliabilityPoint, SchedulePoint, ServiceCoverage, TimeRange, TrendPoint,
};

/// Source of every dataset the dashboard renders.
pub trait AnalyticsPort: Send + Sync {
    /// Every classifiable reading for the window, flattened.
    fn fetch_metrics(&self, range: TimeRange) -> Result<Vec<MetricSample>>;

    fn success_trend(&self, range: TimeRange) -> Result<Vec<TrendPoint>>;
    fn failure_heatmap(&self) -> Result<Vec<HeatmapRow>>;

    fn anomalies(&self) -> Result<Vec<Anomaly>>;

    fn failure_predictions(&self) -> Result<Vec<FailurePrediction>>;
    fn reliability_forecast(&self) -> Result<Vec<ForecastPoint>>;

    fn endpoint_schedules(&self) -> Result<Vec<EndpointSchedule>>;
    fn schedule_load(&self) -> Result<Vec<SchedulePoint>>;

    fn service_coverage(&self) -> Result<Vec<ServiceCoverage>>;
    fn coverage_distribution(&self) -> Result<CoverageDistribution>;
    fn coverage_gaps(&self) -> Result<Vec<CoverageGap>>;

    fn api_reliability(&self) -> Result<Vec<ApiReliability>>;
    fn reliability_trend(&self) -> Result<Vec<ReliabilityPoint>>;

    fn counters(&self) -> Result<Option<OperationalCounters>>;
}

#[derive(Clone)]
pub struct PortSet {
    pub analytics: Arc<dyn AnalyticsPort>,
}

impl PortSet {
    pub fn new(analytics: Arc<dyn AnalyticsPort>) -> Self {
        Self { analytics }
    }

    pub fn empty() -> Self {
        Self {
            analytics: Arc::new(NullAnalyticsPort),
        }
    }
}

#[derive(Clone, Default)]
struct NullAnalyticsPort;

impl AnalyticsPort for NullAnalyticsPort {
    fn fetch_metrics(&self, _range: TimeRange) -> Result<Vec<MetricSample>> {
        Ok(Vec::new())
    }

    fn success_trend(&self, _range: TimeRange) -> Result<Vec<TrendPoint>> {
        Ok(Vec::new())
    }

    fn failure_heatmap(&self) -> Result<Vec<HeatmapRow>> {
        Ok(Vec::new())
    }

    fn anomalies(&self) -> Result<Vec<Anomaly>> {
        Ok(Vec::new())
    }

    fn failure_predictions(&self) -> Result<Vec<FailurePrediction>> {
        Ok(Vec::new())
    }

    fn reliability_forecast(&self) -> Result<Vec<ForecastPoint>> {
        Ok(Vec::new())
    }

    fn endpoint_schedules(&self) -> Result<Vec<EndpointSchedule>> {
        Ok(Vec::new())
    }

    fn schedule_load(&self) -> Result<Vec<SchedulePoint>> {
        Ok(Vec::new())
    }

    fn service_coverage(&self) -> Result<Vec<ServiceCoverage>> {
        Ok(Vec::new())
    }

    fn coverage_distribution(&self) -> Result<CoverageDistribution> {
        Ok(CoverageDistribution::default())
    }

    fn coverage_gaps(&self) -> Result<Vec<CoverageGap>> {
        Ok(Vec::new())
    }

    fn api_reliability(&self) -> Result<Vec<ApiReliability>> {
        Ok(Vec::new())
    }

    fn reliability_trend(&self) -> Result<Vec<ReliabilityPoint>> {
        Ok(Vec::new())
    }

    fn counters(&self) -> Result<Option<OperationalCounters>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_port_set_returns_no_data() {
        let ports = PortSet::empty();
        assert!(ports.analytics.fetch_metrics(TimeRange::Days7).unwrap().is_empty());
        assert!(ports.analytics.anomalies().unwrap().is_empty());
        assert!(ports.analytics.counters().unwrap().is_none());
        assert_eq!(
            ports.analytics.coverage_distribution().unwrap(),
            CoverageDistribution::default()
        );
    }
}

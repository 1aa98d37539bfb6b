//! Canned dashboard datasets.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use forgeiq_domain::{
    Anomaly, AnomalyKind, ApiReliability, CoverageDistribution, CoverageGap, EndpointSchedule,
    FailurePrediction, ForecastPoint, HeatmapRow, OperationalCounters, ReliabilityPoint,
    SchedulePoint, ServiceCoverage, Stability, TestFrequency, TrendPoint,
};

/// Every dataset the dashboard reads, as one serializable document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsSnapshot {
    pub trend: Vec<TrendPoint>,
    pub heatmap: Vec<HeatmapRow>,
    pub anomalies: Vec<Anomaly>,
    pub predictions: Vec<FailurePrediction>,
    pub forecast: Vec<ForecastPoint>,
    pub schedules: Vec<EndpointSchedule>,
    pub schedule_load: Vec<SchedulePoint>,
    pub services: Vec<ServiceCoverage>,
    pub distribution: CoverageDistribution,
    pub gaps: Vec<CoverageGap>,
    pub apis: Vec<ApiReliability>,
    pub reliability_trend: Vec<ReliabilityPoint>,
    pub counters: Option<OperationalCounters>,
}

impl AnalyticsSnapshot {
    /// The demo datasets, with anomaly timestamps relative to `now`.
    pub fn sample(now: DateTime<Utc>) -> Self {
        Self {
            trend: vec![
                trend("Nov 1", 245, 12, 180),
                trend("Nov 8", 268, 8, 165),
                trend("Nov 15", 256, 15, 195),
                trend("Nov 22", 289, 6, 155),
                trend("Nov 29", 302, 9, 170),
            ],
            heatmap: vec![
                heat("/api/users", [2, 0, 1, 0, 3, 0, 0]),
                heat("/api/orders", [5, 3, 4, 2, 1, 0, 0]),
                heat("/api/payments", [1, 0, 0, 1, 0, 0, 0]),
                heat("/api/inventory", [0, 2, 1, 0, 2, 1, 0]),
            ],
            anomalies: sample_anomalies(now),
            predictions: sample_predictions(),
            forecast: vec![
                forecast("00:00", Some(95.0), 94.0, 85.0),
                forecast("04:00", Some(97.0), 96.0, 88.0),
                forecast("08:00", Some(93.0), 92.0, 90.0),
                forecast("12:00", Some(91.0), 89.0, 87.0),
                forecast("16:00", None, 86.0, 82.0),
                forecast("20:00", None, 83.0, 78.0),
                forecast("24:00", None, 81.0, 75.0),
            ],
            schedules: vec![
                schedule(
                    1,
                    "/api/orders/create",
                    15,
                    87.0,
                    Stability::Degrading,
                    "High business impact + recent instability",
                ),
                schedule(
                    2,
                    "/api/inventory/sync",
                    30,
                    12.0,
                    Stability::Stable,
                    "Stable performance, low failure rate",
                ),
                schedule(
                    3,
                    "/api/payments/webhook",
                    10,
                    92.0,
                    Stability::Degrading,
                    "Critical path + peak traffic window approaching",
                ),
                schedule(
                    4,
                    "/api/reports/generate",
                    60,
                    8.0,
                    Stability::Stable,
                    "Low priority, consistent success rate",
                ),
            ],
            schedule_load: [
                ("00:00", 8),
                ("04:00", 6),
                ("08:00", 20),
                ("12:00", 24),
                ("16:00", 18),
                ("20:00", 10),
            ]
            .into_iter()
            .map(|(hour, recommended_tests)| SchedulePoint {
                hour: hour.to_string(),
                current_tests: 12,
                recommended_tests,
            })
            .collect(),
            services: vec![
                service("User Service", 85.0, 42, 49),
                service("Order Service", 72.0, 38, 53),
                service("Payment Service", 91.0, 29, 32),
                service("Inventory Service", 58.0, 24, 41),
                service("Notification Service", 45.0, 15, 33),
            ],
            distribution: CoverageDistribution {
                covered: 68.0,
                partial: 18.0,
                uncovered: 14.0,
            },
            gaps: sample_gaps(),
            apis: sample_apis(),
            reliability_trend: [
                ("Jul", 92.0),
                ("Aug", 89.0),
                ("Sep", 94.0),
                ("Oct", 96.0),
                ("Nov", 93.0),
                ("Dec", 95.0),
            ]
            .into_iter()
            .map(|(month, score)| ReliabilityPoint {
                month: month.to_string(),
                score,
            })
            .collect(),
            counters: Some(OperationalCounters {
                resolved_anomalies_today: 12,
                prevented_outages: 18,
                active_schedules: 47,
                auto_adjusted_schedules: 28,
                efficiency_gain_pct: 23.0,
                coverage_improvement_pct: 12.0,
                avg_resolution_minutes: 23,
                resolution_change_pct: -35.0,
                sla_violations_this_month: 2,
                reliability_target: 98.0,
            }),
        }
    }
}

fn trend(label: &str, successes: u32, failures: u32, avg_latency_ms: u32) -> TrendPoint {
    TrendPoint {
        label: label.to_string(),
        successes,
        failures,
        avg_latency_ms,
    }
}

fn heat(endpoint: &str, daily_failures: [u32; 7]) -> HeatmapRow {
    HeatmapRow {
        endpoint: endpoint.to_string(),
        daily_failures,
    }
}

fn forecast(time: &str, actual: Option<f64>, predicted: f64, confidence: f64) -> ForecastPoint {
    ForecastPoint {
        time: time.to_string(),
        actual,
        predicted,
        confidence,
    }
}

fn schedule(
    id: u32,
    endpoint: &str,
    every_minutes: u64,
    risk_score: f64,
    stability: Stability,
    reason: &str,
) -> EndpointSchedule {
    EndpointSchedule {
        id,
        endpoint: endpoint.to_string(),
        current: TestFrequency::from_minutes(every_minutes),
        risk_score,
        stability,
        reason: reason.to_string(),
    }
}

fn service(name: &str, coverage_pct: f64, tests: u32, endpoints: u32) -> ServiceCoverage {
    ServiceCoverage {
        service: name.to_string(),
        coverage_pct,
        tests,
        endpoints,
    }
}

fn sample_anomalies(now: DateTime<Utc>) -> Vec<Anomaly> {
    let anomaly = |id: u32,
                   kind: AnomalyKind,
                   endpoint: &str,
                   severity: &str,
                   description: &str,
                   minutes_ago: i64,
                   (baseline, current): (&str, &str),
                   deviation_pct: f64| Anomaly {
        id,
        kind,
        endpoint: endpoint.to_string(),
        reported_severity: severity.to_string(),
        description: description.to_string(),
        detected_at: now - Duration::minutes(minutes_ago),
        baseline: baseline.to_string(),
        current: current.to_string(),
        deviation_pct,
    };
    vec![
        anomaly(
            1,
            AnomalyKind::LatencySpike,
            "/api/orders/checkout",
            "high",
            "Response time increased by 340% in the last hour",
            2,
            ("145ms", "638ms"),
            340.0,
        ),
        anomaly(
            2,
            AnomalyKind::FailureRateIncrease,
            "/api/payments/process",
            "critical",
            "Failure rate jumped from 2% to 18% in 30 minutes",
            8,
            ("2%", "18%"),
            800.0,
        ),
        anomaly(
            3,
            AnomalyKind::ResponseSizeAnomaly,
            "/api/inventory/search",
            "medium",
            "Response payload 3x larger than typical",
            23,
            ("12KB", "36KB"),
            200.0,
        ),
        anomaly(
            4,
            AnomalyKind::TrafficSpike,
            "/api/users/login",
            "low",
            "Request volume 2.5x higher than usual for this time",
            60,
            ("120 req/min", "305 req/min"),
            154.0,
        ),
    ]
}

fn sample_predictions() -> Vec<FailurePrediction> {
    let prediction = |id: u32,
                      endpoint: &str,
                      probability: f64,
                      timeframe: &str,
                      reason: &str,
                      impact: &str,
                      recommendation: &str| FailurePrediction {
        id,
        endpoint: endpoint.to_string(),
        probability,
        timeframe: timeframe.to_string(),
        reason: reason.to_string(),
        impact: impact.to_string(),
        recommendation: recommendation.to_string(),
    };
    vec![
        prediction(
            1,
            "/api/database/connection",
            78.0,
            "6-8 hours",
            "Degrading connection pool performance detected",
            "High",
            "Scale database connections or investigate slow queries",
        ),
        prediction(
            2,
            "/api/cache/redis",
            62.0,
            "12-16 hours",
            "Memory usage trending towards limit",
            "Medium",
            "Review cache eviction policies or increase memory allocation",
        ),
        prediction(
            3,
            "/api/external/payment-gateway",
            45.0,
            "24 hours",
            "Historical failure pattern matches current trend",
            "Critical",
            "Verify third-party service status and prepare fallback",
        ),
    ]
}

fn sample_gaps() -> Vec<CoverageGap> {
    let gap = |id: u32,
               endpoint: &str,
               priority: &str,
               reason: &str,
               traffic: &str,
               failure_history: &str,
               suggested: [&str; 3]| CoverageGap {
        id,
        endpoint: endpoint.to_string(),
        priority: priority.to_string(),
        reason: reason.to_string(),
        traffic: traffic.to_string(),
        failure_history: failure_history.to_string(),
        suggested_tests: suggested.iter().map(|test| test.to_string()).collect(),
    };
    vec![
        gap(
            1,
            "/api/orders/cancel",
            "Critical",
            "High traffic endpoint with no test coverage",
            "2.3K req/day",
            "3 incidents in 30 days",
            [
                "Happy path cancellation",
                "Invalid order ID",
                "Already shipped order",
            ],
        ),
        gap(
            2,
            "/api/users/password-reset",
            "High",
            "Security-critical flow with partial coverage",
            "450 req/day",
            "1 incident in 90 days",
            ["Invalid token", "Expired token", "Rate limiting"],
        ),
        gap(
            3,
            "/api/inventory/bulk-update",
            "Medium",
            "Complex operation lacking edge case tests",
            "180 req/day",
            "No recent failures",
            ["Large batch size", "Duplicate SKUs", "Concurrent updates"],
        ),
    ]
}

fn sample_apis() -> Vec<ApiReliability> {
    let api = |id: u32,
               name: &str,
               score: f64,
               (sla_target, current_uptime): (f64, f64),
               (revenue_impact, customer_impact): (&str, &str),
               estimated_loss_per_hour: u64,
               affected_users: u64| ApiReliability {
        id,
        api: name.to_string(),
        score,
        sla_target,
        current_uptime,
        revenue_impact: revenue_impact.to_string(),
        estimated_loss_per_hour,
        customer_impact: customer_impact.to_string(),
        affected_users,
    };
    vec![
        api(
            1,
            "Payment Processing",
            98.0,
            (99.9, 99.2),
            ("Critical", "High"),
            125_000,
            50_000,
        ),
        api(
            2,
            "Order Management",
            94.0,
            (99.5, 98.8),
            ("High", "High"),
            75_000,
            35_000,
        ),
        api(
            3,
            "User Authentication",
            96.0,
            (99.9, 99.6),
            ("Critical", "Severe"),
            200_000,
            100_000,
        ),
        api(
            4,
            "Product Catalog",
            88.0,
            (99.0, 97.5),
            ("Medium", "Medium"),
            30_000,
            20_000,
        ),
        api(
            5,
            "Notifications",
            82.0,
            (95.0, 94.2),
            ("Low", "Low"),
            5_000,
            10_000,
        ),
    ]
}

use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Look-back window selectable on the analytics view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "7d")]
    Days7,
    #[default]
    #[serde(rename = "30d")]
    Days30,
    #[serde(rename = "90d")]
    Days90,
}

impl TimeRange {
    pub const ALL: [TimeRange; 3] = [TimeRange::Days7, TimeRange::Days30, TimeRange::Days90];

    pub fn days(self) -> u32 {
        match self {
            TimeRange::Days7 => 7,
            TimeRange::Days30 => 30,
            TimeRange::Days90 => 90,
        }
    }

    pub fn next(self) -> Self {
        match self {
            TimeRange::Days7 => TimeRange::Days30,
            TimeRange::Days30 => TimeRange::Days90,
            TimeRange::Days90 => TimeRange::Days7,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days", self.days())
    }
}

impl FromStr for TimeRange {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim().to_ascii_lowercase();
        let days = trimmed
            .strip_suffix("days")
            .or_else(|| trimmed.strip_suffix('d'))
            .unwrap_or(&trimmed)
            .trim();
        match days {
            "7" => Ok(TimeRange::Days7),
            "30" => Ok(TimeRange::Days30),
            "90" => Ok(TimeRange::Days90),
            _ => bail!("unsupported time range '{raw}' (expected 7, 30 or 90 days)"),
        }
    }
}

/// Weekly test outcome totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub label: String,
    pub successes: u32,
    pub failures: u32,
    pub avg_latency_ms: u32,
}

/// Failures per weekday for one endpoint, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapRow {
    pub endpoint: String,
    pub daily_failures: [u32; 7],
}

/// Success-rate forecast. `actual` is absent for projected points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub time: String,
    pub actual: Option<f64>,
    pub predicted: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityPoint {
    pub month: String,
    pub score: f64,
}

/// Tests per hour, current schedule vs. recommended schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulePoint {
    pub hour: String,
    pub current_tests: u32,
    pub recommended_tests: u32,
}

/// Running counters reported by the platform that have no derivation in the
/// datasets themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationalCounters {
    pub resolved_anomalies_today: u32,
    pub prevented_outages: u32,
    pub active_schedules: u32,
    pub auto_adjusted_schedules: u32,
    pub efficiency_gain_pct: f64,
    pub coverage_improvement_pct: f64,
    pub avg_resolution_minutes: u32,
    pub resolution_change_pct: f64,
    pub sla_violations_this_month: u32,
    pub reliability_target: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_range_parses_common_spellings() {
        assert_eq!("7".parse::<TimeRange>().unwrap(), TimeRange::Days7);
        assert_eq!("30d".parse::<TimeRange>().unwrap(), TimeRange::Days30);
        assert_eq!("90 days".parse::<TimeRange>().unwrap(), TimeRange::Days90);
        assert!("14".parse::<TimeRange>().is_err());
    }

    #[test]
    fn time_range_cycles() {
        assert_eq!(TimeRange::default(), TimeRange::Days30);
        assert_eq!(TimeRange::Days90.next(), TimeRange::Days7);
        assert_eq!(TimeRange::Days7.to_string(), "7 days");
    }
}

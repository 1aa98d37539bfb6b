//! Test cadence types and scheduling recommendations.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Interval between two runs of an endpoint's test suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TestFrequency(Duration);

impl TestFrequency {
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Saturates at `u64::MAX` seconds.
    pub const fn from_minutes(minutes: u64) -> Self {
        Self(Duration::from_secs(minutes.saturating_mul(60)))
    }

    pub fn interval(self) -> Duration {
        self.0
    }

    pub fn as_secs(self) -> u64 {
        self.0.as_secs()
    }
}

impl From<Duration> for TestFrequency {
    fn from(interval: Duration) -> Self {
        Self(interval)
    }
}

impl fmt::Display for TestFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.as_secs();
        let (amount, unit) = if secs % 60 == 0 {
            (secs / 60, "minute")
        } else {
            (secs, "second")
        };
        let plural = if amount == 1 { "" } else { "s" };
        write!(f, "Every {amount} {unit}{plural}")
    }
}

impl FromStr for TestFrequency {
    type Err = anyhow::Error;

    /// Accepts `15m`, `2h`, `90s`, `15` (minutes) and `every 15 minutes`.
    fn from_str(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        let value = normalized
            .strip_prefix("every")
            .unwrap_or(&normalized)
            .trim();
        let split = value
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(value.len());
        let (digits, unit) = value.split_at(split);
        let amount: u64 = digits
            .parse()
            .with_context(|| format!("invalid test frequency '{raw}'"))?;
        let multiplier = match unit.trim() {
            "" | "m" | "min" | "mins" | "minute" | "minutes" => 60,
            "s" | "sec" | "secs" | "second" | "seconds" => 1,
            "h" | "hr" | "hrs" | "hour" | "hours" => 3600,
            other => bail!("unknown frequency unit '{other}' in '{raw}'"),
        };
        let secs = amount
            .checked_mul(multiplier)
            .with_context(|| format!("test frequency '{raw}' is too large"))?;
        if secs == 0 {
            bail!("test frequency must be positive, got '{raw}'");
        }
        Ok(Self::from_secs(secs))
    }
}

impl TryFrom<String> for TestFrequency {
    type Error = anyhow::Error;

    fn try_from(raw: String) -> Result<Self> {
        raw.parse()
    }
}

impl From<TestFrequency> for String {
    fn from(frequency: TestFrequency) -> Self {
        let secs = frequency.as_secs();
        if secs % 60 == 0 {
            format!("{}m", secs / 60)
        } else {
            format!("{secs}s")
        }
    }
}

/// Recent behaviour of an endpoint's test results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Degrading,
}

impl Stability {
    pub fn is_stable(self) -> bool {
        matches!(self, Stability::Stable)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleChange {
    Tighten,
    Keep,
    Relax,
}

impl ScheduleChange {
    pub fn label(self) -> &'static str {
        match self {
            ScheduleChange::Tighten => "Increase frequency",
            ScheduleChange::Keep => "No change",
            ScheduleChange::Relax => "Reduce frequency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecommendation {
    pub current: TestFrequency,
    pub recommended_frequency: TestFrequency,
    pub change: ScheduleChange,
    /// Whether the change may be applied without human confirmation.
    pub auto_adjust_eligible: bool,
}

impl ScheduleRecommendation {
    pub fn is_change(&self) -> bool {
        self.current != self.recommended_frequency
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointSchedule {
    pub id: u32,
    pub endpoint: String,
    pub current: TestFrequency,
    pub risk_score: f64,
    pub stability: Stability,
    pub reason: String,
}

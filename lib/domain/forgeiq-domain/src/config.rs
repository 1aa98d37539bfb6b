//! Dashboard configuration: threshold tables, scheduling policy and lookups.
//!
//! Every field has a default, so an empty or partial YAML file is valid.
//!
//! ```yaml
//! thresholds:
//!   risk: { critical: 80, high: 50, medium: 30 }
//!   sla: { at_risk_tolerance: 0.5 }
//! scheduling:
//!   ladder_minutes: [1, 3, 5, 10, 15, 30, 60, 120]
//! action_items: { healthy: 0, watch: 2, critical: 5 }
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub thresholds: ThresholdConfig,
    pub scheduling: SchedulingConfig,
    pub action_items: ActionItemTable,
}

impl ForgeConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config = Self::from_yaml(&raw)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded dashboard config");
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(
                path = %path.display(),
                "no config file found, using default thresholds"
            );
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    pub fn from_yaml(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(raw).context("failed to parse config yaml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.thresholds.validate()?;
        self.scheduling.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub risk: SeverityBands,
    pub coverage: CoverageBands,
    pub reliability: ReliabilityBands,
    pub sla: SlaBands,
    pub failure_probability: LikelihoodBands,
}

impl ThresholdConfig {
    fn validate(&self) -> Result<()> {
        let risk = &self.risk;
        descending("risk", &[risk.critical, risk.high, risk.medium])?;
        descending(
            "coverage",
            &[self.coverage.good, self.coverage.needs_attention],
        )?;
        descending(
            "reliability",
            &[self.reliability.healthy, self.reliability.watch],
        )?;
        descending(
            "failure_probability",
            &[
                self.failure_probability.likely,
                self.failure_probability.elevated,
            ],
        )?;
        let tolerance = self.sla.at_risk_tolerance;
        ensure!(
            tolerance.is_finite() && tolerance >= 0.0,
            "sla.at_risk_tolerance must be a non-negative number, got {tolerance}"
        );
        Ok(())
    }
}

/// Floors of the upper three severity bands; anything below `medium` is low.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityBands {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for SeverityBands {
    fn default() -> Self {
        Self {
            critical: 80.0,
            high: 50.0,
            medium: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageBands {
    pub good: f64,
    pub needs_attention: f64,
}

impl Default for CoverageBands {
    fn default() -> Self {
        Self {
            good: 80.0,
            needs_attention: 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliabilityBands {
    pub healthy: f64,
    pub watch: f64,
}

impl Default for ReliabilityBands {
    fn default() -> Self {
        Self {
            healthy: 95.0,
            watch: 85.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaBands {
    /// Percentage points below target still reported as "at risk".
    pub at_risk_tolerance: f64,
}

impl Default for SlaBands {
    fn default() -> Self {
        Self {
            at_risk_tolerance: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LikelihoodBands {
    pub likely: f64,
    pub elevated: f64,
}

impl Default for LikelihoodBands {
    fn default() -> Self {
        Self {
            likely: 70.0,
            elevated: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulingConfig {
    /// Risk at or above which the cadence is tightened.
    pub high_risk: f64,
    /// Risk below which a stable endpoint's cadence is relaxed.
    pub low_risk: f64,
    pub tighten_steps: usize,
    pub relax_steps: usize,
    /// Allowed test intervals in minutes, ascending.
    pub ladder_minutes: Vec<u64>,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            high_risk: 80.0,
            low_risk: 30.0,
            tighten_steps: 2,
            relax_steps: 1,
            ladder_minutes: vec![1, 3, 5, 10, 15, 30, 60, 120, 240, 720, 1440],
        }
    }
}

impl SchedulingConfig {
    fn validate(&self) -> Result<()> {
        descending("scheduling", &[self.high_risk, self.low_risk])?;
        ensure!(
            self.tighten_steps > 0 && self.relax_steps > 0,
            "scheduling steps must be at least 1"
        );
        ensure!(
            !self.ladder_minutes.is_empty(),
            "scheduling.ladder_minutes must not be empty"
        );
        ensure!(
            self.ladder_minutes[0] > 0,
            "scheduling.ladder_minutes must be positive"
        );
        if let Some(minutes) = self
            .ladder_minutes
            .iter()
            .find(|minutes| minutes.checked_mul(60).is_none())
        {
            bail!("scheduling.ladder_minutes rung {minutes} is too large");
        }
        if let Some(pair) = self
            .ladder_minutes
            .windows(2)
            .find(|pair| pair[0] >= pair[1])
        {
            bail!(
                "scheduling.ladder_minutes must be strictly ascending ({} then {})",
                pair[0],
                pair[1]
            );
        }
        Ok(())
    }
}

/// Pending action items shown per reliability tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionItemTable {
    pub healthy: u32,
    pub watch: u32,
    pub critical: u32,
}

impl Default for ActionItemTable {
    fn default() -> Self {
        Self {
            healthy: 0,
            watch: 2,
            critical: 5,
        }
    }
}

fn descending(name: &str, floors: &[f64]) -> Result<()> {
    for floor in floors {
        ensure!(
            floor.is_finite() && (0.0..=100.0).contains(floor),
            "{name} thresholds must lie within [0, 100], got {floor}"
        );
    }
    if let Some(pair) = floors.windows(2).find(|pair| pair[0] <= pair[1]) {
        bail!(
            "{name} thresholds must be strictly descending ({} then {})",
            pair[0],
            pair[1]
        );
    }
    Ok(())
}

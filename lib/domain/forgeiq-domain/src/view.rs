use std::str::FromStr;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// The dashboard views listed in the sidebar, in sidebar order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    #[default]
    Analytics,
    Anomalies,
    Predictions,
    Scheduling,
    Coverage,
    Business,
}

impl ViewKind {
    pub const ALL: [ViewKind; 6] = [
        ViewKind::Analytics,
        ViewKind::Anomalies,
        ViewKind::Predictions,
        ViewKind::Scheduling,
        ViewKind::Coverage,
        ViewKind::Business,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len())
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::from_index((self.index() + len - 1) % len)
    }

    pub fn slug(self) -> &'static str {
        match self {
            ViewKind::Analytics => "analytics",
            ViewKind::Anomalies => "anomalies",
            ViewKind::Predictions => "predictions",
            ViewKind::Scheduling => "scheduling",
            ViewKind::Coverage => "coverage",
            ViewKind::Business => "business",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Analytics => "Analytics",
            ViewKind::Anomalies => "Anomaly Detection",
            ViewKind::Predictions => "Predictive Alerts",
            ViewKind::Scheduling => "Adaptive Scheduling",
            ViewKind::Coverage => "Coverage Advisor",
            ViewKind::Business => "Business Impact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewKind::Analytics => "Analytics Dashboard",
            ViewKind::Anomalies => "Anomaly Detection",
            ViewKind::Predictions => "Predictive Failure Alerts",
            ViewKind::Scheduling => "Adaptive Scheduling Engine",
            ViewKind::Coverage => "Test Coverage Advisor",
            ViewKind::Business => "Business Impact Dashboard",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ViewKind::Analytics => "Comprehensive testing insights and trends",
            ViewKind::Anomalies => "Detection of unusual patterns and behaviors",
            ViewKind::Predictions => "Forecasting of potential issues",
            ViewKind::Scheduling => "Test frequency optimization based on risk and patterns",
            ViewKind::Coverage => "Recommendations to improve test coverage",
            ViewKind::Business => "Technical reliability translated into business metrics",
        }
    }
}

impl FromStr for ViewKind {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        let wanted = raw.trim().to_ascii_lowercase();
        let found = Self::ALL.into_iter().find(|view| {
            view.slug() == wanted || view.label().to_ascii_lowercase() == wanted
        });
        match found {
            Some(view) => Ok(view),
            None => bail!(
                "unknown view '{raw}' (expected one of: {})",
                Self::ALL
                    .iter()
                    .map(|view| view.slug())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps() {
        assert_eq!(ViewKind::Business.next(), ViewKind::Analytics);
        assert_eq!(ViewKind::Analytics.prev(), ViewKind::Business);
        assert_eq!(ViewKind::from_index(3), ViewKind::Scheduling);
        assert_eq!(ViewKind::from_index(42), ViewKind::Analytics);
    }

    #[test]
    fn parses_slug_and_label() {
        assert_eq!("coverage".parse::<ViewKind>().unwrap(), ViewKind::Coverage);
        assert_eq!(
            "Anomaly Detection".parse::<ViewKind>().unwrap(),
            ViewKind::Anomalies
        );
        assert!("topology".parse::<ViewKind>().is_err());
    }
}

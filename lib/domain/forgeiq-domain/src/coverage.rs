use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCoverage {
    pub service: String,
    pub coverage_pct: f64,
    pub tests: u32,
    pub endpoints: u32,
}

/// Share of endpoints by coverage state, in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageDistribution {
    pub covered: f64,
    pub partial: f64,
    pub uncovered: f64,
}

/// An endpoint that should gain tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageGap {
    pub id: u32,
    pub endpoint: String,
    /// Reported priority label (`Critical`, `High`, ...).
    pub priority: String,
    pub reason: String,
    pub traffic: String,
    pub failure_history: String,
    pub suggested_tests: Vec<String>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailurePrediction {
    pub id: u32,
    pub endpoint: String,
    /// Failure probability in percent.
    pub probability: f64,
    pub timeframe: String,
    pub reason: String,
    /// Reported business impact label (`Critical`, `High`, ...).
    pub impact: String,
    pub recommendation: String,
}

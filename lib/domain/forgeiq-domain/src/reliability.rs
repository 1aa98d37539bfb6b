use serde::{Deserialize, Serialize};

/// Business-facing reliability figures for one API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiReliability {
    pub id: u32,
    pub api: String,
    pub score: f64,
    pub sla_target: f64,
    pub current_uptime: f64,
    pub revenue_impact: String,
    /// Estimated revenue loss per hour of downtime, in dollars.
    pub estimated_loss_per_hour: u64,
    pub customer_impact: String,
    pub affected_users: u64,
}

/// Recommendation keyed by reliability tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReliabilityAction {
    Maintain,
    Improve,
    UrgentAction,
}

impl ReliabilityAction {
    pub fn label(self) -> &'static str {
        match self {
            ReliabilityAction::Maintain => "Maintain",
            ReliabilityAction::Improve => "Improve",
            ReliabilityAction::UrgentAction => "Urgent Action",
        }
    }
}

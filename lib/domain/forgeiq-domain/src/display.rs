//! Display metadata attached to classification tiers.
//!
//! Views never match on tier variants to pick colors or labels; they look
//! up the [`TierMeta`] of a tier and render its [`Emphasis`].

use serde::{Deserialize, Serialize};

/// Visual weight of a tier, from reassuring to alarming. `Neutral` marks a
/// reported label that maps to no tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Neutral,
    Positive,
    Info,
    Caution,
    Warning,
    Danger,
}

impl Emphasis {
    pub fn as_str(self) -> &'static str {
        match self {
            Emphasis::Neutral => "neutral",
            Emphasis::Positive => "positive",
            Emphasis::Info => "info",
            Emphasis::Caution => "caution",
            Emphasis::Warning => "warning",
            Emphasis::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierMeta {
    pub label: &'static str,
    pub emphasis: Emphasis,
}

impl TierMeta {
    pub const fn new(label: &'static str, emphasis: Emphasis) -> Self {
        Self { label, emphasis }
    }
}

/// A classification result with an associated display entry.
pub trait Tiered: Copy {
    fn meta(self) -> TierMeta;

    fn label(self) -> &'static str {
        self.meta().label
    }

    fn emphasis(self) -> Emphasis {
        self.meta().emphasis
    }
}

/// Abbreviate a count for headlines: `125000` as `125K`, `2300` as `2.3K`.
pub fn compact(value: u64) -> String {
    let scaled = |unit: u64, suffix: &str| {
        let whole = value / unit;
        let tenth = (value % unit) * 10 / unit;
        if tenth == 0 {
            format!("{whole}{suffix}")
        } else {
            format!("{whole}.{tenth}{suffix}")
        }
    };
    match value {
        1_000_000.. => scaled(1_000_000, "M"),
        1_000.. => scaled(1_000, "K"),
        _ => value.to_string(),
    }
}

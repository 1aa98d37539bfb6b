use serde::Serialize;

use forgeiq_domain::{Emphasis, Severity, Tiered};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: &'static str,
    pub emphasis: Emphasis,
}

impl Badge {
    /// `[Critical]`
    pub fn bracketed(&self) -> String {
        format!("[{}]", self.text)
    }
}

pub fn badge<T: Tiered>(tier: T) -> Badge {
    let meta = tier.meta();
    Badge {
        text: meta.label,
        emphasis: meta.emphasis,
    }
}

/// Badge for a reported severity label. Labels that name no severity get a
/// neutral badge even though they classify as low.
pub fn reported_badge(label: &str, resolved: Severity) -> Badge {
    match Severity::from_label(label) {
        Some(_) => badge(resolved),
        None => Badge {
            text: "Unrated",
            emphasis: Emphasis::Neutral,
        },
    }
}

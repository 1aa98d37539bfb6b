use serde::Serialize;

use forgeiq_domain::{TimeRange, ViewKind};

/// What the user is looking at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    pub view: ViewKind,
    pub range: TimeRange,
}

impl DashboardState {
    pub fn new(view: ViewKind, range: TimeRange) -> Self {
        Self { view, range }
    }
}

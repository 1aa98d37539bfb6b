//! Layout helpers.
//!
//! `let rows = crate::ui_layout_split!(Direction::Vertical, [Constraint::Length(3), Constraint::Min(0)], area);`

#[macro_export]
macro_rules! ui_layout_split {
    ($direction:expr, [$($constraint:expr),+ $(,)?], $area:expr) => {{
        ratatui::layout::Layout::default()
            .direction($direction)
            .constraints([$($constraint),+])
            .split($area)
    }};
}

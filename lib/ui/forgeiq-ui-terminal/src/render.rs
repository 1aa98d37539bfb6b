use std::fmt::Write;

use chrono::{DateTime, Utc};

use forgeiq_application::{TierSummary, ViewReport};
use forgeiq_domain::Tiered;
use forgeiq_ui_presentation::formatting::{LineKind, report_lines, stat_cards};

/// Plain-text rendering of a report for the terminal.
pub fn render_report(report: &ViewReport, now: DateTime<Utc>) -> String {
    let view = report.view();
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title());
    let _ = writeln!(out, "{}", view.subtitle());
    let _ = writeln!(out);

    for card in stat_cards(report) {
        let _ = write!(out, "  {}: {}", card.title, card.value);
        if let Some(note) = &card.note {
            let _ = write!(out, " ({note})");
        }
        let _ = writeln!(out);
    }

    for line in report_lines(report, now) {
        match line.kind {
            LineKind::Heading => {
                let _ = writeln!(out, "\n== {} ==", line.text);
            }
            LineKind::Item => {
                let _ = match line.badge {
                    Some(badge) => writeln!(out, "  {} {}", badge.bracketed(), line.text),
                    None => writeln!(out, "  {}", line.text),
                };
            }
            LineKind::Detail => {
                let _ = match line.badge {
                    Some(badge) => writeln!(out, "      {} {}", line.text, badge.bracketed()),
                    None => writeln!(out, "      {}", line.text),
                };
            }
        }
    }
    out
}

pub fn render_tier_summary(summary: &TierSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} samples over {}",
        summary.samples, summary.range
    );
    for tally in &summary.tallies {
        let _ = writeln!(
            out,
            "  {:<20} {:<16} {}",
            tally.kind.as_str(),
            tally.tier.label(),
            tally.count
        );
    }
    out
}

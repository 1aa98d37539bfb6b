use chrono::{DateTime, Utc};

use forgeiq_domain::compact;

/// `1,347`
pub fn grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$125K/hour`
pub fn money_per_hour(dollars: u64) -> String {
    format!("${}/hour", compact(dollars))
}

/// `~50K`
pub fn users(count: u64) -> String {
    format!("~{}", compact(count))
}

/// Percentages drop a trailing `.0`: `68%`, `96.5%`.
pub fn percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

/// `+12%`, `-35%`
pub fn signed_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", percent(value))
    } else {
        percent(value)
    }
}

/// Relative age of an event: `2 minutes ago`, `1 hour ago`.
pub fn age(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - at).num_minutes();
    let (amount, unit) = match minutes {
        ..=0 => return "just now".to_string(),
        1..60 => (minutes, "minute"),
        60..1440 => (minutes / 60, "hour"),
        _ => (minutes / 1440, "day"),
    };
    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

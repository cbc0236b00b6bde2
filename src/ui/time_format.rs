use chrono::TimeDelta;
use chrono_humanize::HumanTime;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Whole seconds from `created_utc` to `now`, floored after subtracting so
/// fractional timestamps don't gain a second.
fn elapsed_secs(now: i64, created_utc: f64) -> i64 {
    (now as f64 - created_utc).floor() as i64
}

/// Compact age label for a card: "3d", "5h", "12m" or "now".
/// Only the largest whole unit is shown; future timestamps read as "now".
pub fn format_age(now: i64, created_utc: f64) -> String {
    let diff = elapsed_secs(now, created_utc);
    let (days, hours, minutes) = (diff / DAY, diff / HOUR, diff / MINUTE);
    if days > 0 {
        format!("{}d", days)
    } else if hours > 0 {
        format!("{}h", hours)
    } else if minutes > 0 {
        format!("{}m", minutes)
    } else {
        "now".to_string()
    }
}

/// Long form for the status line, e.g. "2 hours ago". Empty when the gap is
/// outside what `TimeDelta` can hold.
pub fn humanized_age(now: i64, created_utc: f64) -> String {
    TimeDelta::try_seconds(elapsed_secs(now, created_utc).saturating_neg())
        .map(|delta| HumanTime::from(delta).to_string())
        .unwrap_or_default()
}

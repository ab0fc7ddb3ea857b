/// Formats how long ago `last_active` was, relative to `now` (both Unix millis).
pub fn format_last_seen(last_active: i64, now: i64) -> String {
    let diff = now.saturating_sub(last_active);
    let minutes = diff.div_euclid(60_000);
    let hours = diff.div_euclid(3_600_000);
    let days = diff.div_euclid(86_400_000);

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", days)
    }
}

use chrono::{DateTime, Utc};

const MS_PER_MINUTE: i64 = 60_000;

/// Whole minutes between `started_at` and `now`, rounded half-up.
///
/// Returns 0 when there is no start time, and clamps to 0 when the clock
/// has moved backward past the start.
pub fn elapsed_minutes(now: DateTime<Utc>, started_at: Option<DateTime<Utc>>) -> i64 {
    let Some(started_at) = started_at else {
        return 0;
    };
    let elapsed_ms = (now - started_at).num_milliseconds();
    if elapsed_ms <= 0 {
        return 0;
    }
    (elapsed_ms + MS_PER_MINUTE / 2) / MS_PER_MINUTE
}

/// "1 minute" / "5 minutes"
pub fn format_minutes(minutes: i64) -> String {
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{} minutes", minutes)
    }
}

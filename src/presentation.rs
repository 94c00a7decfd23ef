use crate::models::STATUS_SUCCESSFUL;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

const SUCCESS_ICON: &str = "<i class='fa-solid fa-check' style='color: #63E6BE;'></i>";
const FAILURE_ICON: &str = "<i class='fa-solid fa-xmark' style='color: #df0c0c;'></i>";

pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(value.trim(), &Rfc3339).ok()
}

/// Whole minutes elapsed from `date` to `now`, floored. Future dates are negative.
pub fn minutes_since(date: OffsetDateTime, now: OffsetDateTime) -> i64 {
    let millis = (now - date).whole_milliseconds();
    millis.div_euclid(60_000) as i64
}

pub fn minutes_since_date(date: OffsetDateTime) -> i64 {
    minutes_since(date, OffsetDateTime::now_utc())
}

pub fn status_icon(status: &str) -> &'static str {
    if status == STATUS_SUCCESSFUL {
        SUCCESS_ICON
    } else {
        FAILURE_ICON
    }
}

pub fn format_minutes_ago(minutes: i64) -> String {
    match minutes {
        i64::MIN..=0 => "just now".to_string(),
        1 => "1 minute ago".to_string(),
        _ => format!("{minutes} minutes ago"),
    }
}

/// Relative age of an agent timestamp, or "n/a" when it is missing or unreadable.
pub fn timestamp_age(value: Option<&str>, now: OffsetDateTime) -> String {
    value
        .and_then(parse_timestamp)
        .map(|date| format_minutes_ago(minutes_since(date, now)))
        .unwrap_or_else(|| "n/a".to_string())
}

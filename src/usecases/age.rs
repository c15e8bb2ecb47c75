use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Human readable distance from `created` (unix seconds) to `now`, e.g. "3 days ago".
pub fn describe_age(created: i64, now: DateTime<Utc>) -> String {
    let seconds = now.timestamp() - created;
    let (amount, future) = if seconds < 0 {
        (-seconds, true)
    } else {
        (seconds, false)
    };

    let phrase = humanize(amount);
    if future {
        format!("in {}", phrase)
    } else {
        format!("{} ago", phrase)
    }
}

fn humanize(seconds: i64) -> String {
    let minutes = (seconds as f64 / MINUTE as f64).round() as i64;
    let hours = (seconds as f64 / HOUR as f64).round() as i64;
    let days = (seconds as f64 / DAY as f64).round() as i64;
    let months = (seconds as f64 / (30.4375 * DAY as f64)).round() as i64;
    let years = (seconds as f64 / (365.25 * DAY as f64)).round() as i64;

    match seconds {
        s if s < 45 => "a few seconds".to_string(),
        s if s < 90 => "a minute".to_string(),
        s if s < 45 * MINUTE => format!("{} minutes", minutes),
        s if s < 90 * MINUTE => "an hour".to_string(),
        s if s < 22 * HOUR => format!("{} hours", hours),
        s if s < 36 * HOUR => "a day".to_string(),
        s if s < 26 * DAY => format!("{} days", days),
        s if s < 46 * DAY => "a month".to_string(),
        s if s < 320 * DAY => format!("{} months", months),
        s if s < 548 * DAY => "a year".to_string(),
        _ => format!("{} years", years),
    }
}

//! Formatting utilities used for CLI outputs.

use super::time::to_zoned;
use crate::errors::AppResult;
use chrono::TimeZone;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `YYYY-MM-DD HH:MM:SS` of an epoch in the given zone.
pub fn format_timestamp<Tz: TimeZone>(epoch: f64, tz: &Tz) -> AppResult<String>
where
    Tz::Offset: std::fmt::Display,
{
    Ok(to_zoned(epoch, tz)?
        .format("%Y-%m-%d %H:%M:%S")
        .to_string())
}

/// Human readable duration, e.g. `1:02:03`, `0:00:01.500000`,
/// `2 days, 3:00:00`.
pub fn format_duration(seconds: f64) -> String {
    let micros = (seconds * 1_000_000.0).round() as i64;
    let sign = if micros < 0 { "-" } else { "" };
    let micros = micros.unsigned_abs();

    let total_secs = micros / 1_000_000;
    let frac = micros % 1_000_000;

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut out = String::from(sign);
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{} {}, ", days, unit));
    }
    out.push_str(&format!("{}:{:02}:{:02}", hours, mins, secs));
    if frac > 0 {
        out.push_str(&format!(".{:06}", frac));
    }
    out
}

/// Hide all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

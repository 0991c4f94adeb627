//! Display formatting helpers.
//!
//! Currency and date output follows the en-US conventions the backend's web
//! console uses, so values read the same across both front ends.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Display;
use std::str::FromStr;

/// Rendered when a timestamp cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Format an amount as US dollars, e.g. `$1,234.50` or `-$12.00`.
///
/// Rounds the shortest decimal form of `amount` to cents, half away from
/// zero, so `1.005` becomes `$1.01` even though the nearest `f64` is
/// slightly below it.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "$∞" } else { "-$∞" }.to_string();
    }

    let (whole, cents) = split_cents(amount.abs());
    let is_zero = whole.bytes().all(|b| b == b'0') && cents == "00";
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    format!("{}${}.{}", sign, group_thousands(&whole), cents)
}

/// Whole-dollar digits and two cent digits of a non-negative finite amount
fn split_cents(amount: f64) -> (String, String) {
    let shortest = amount.to_string();

    match Decimal::from_str(&shortest) {
        Ok(value) => {
            let rounded = value
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .to_string();
            let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
            (whole.to_string(), format!("{:0<2}", frac))
        }
        // Beyond `Decimal`'s range. Such values are whole numbers when large
        // and round to zero when tiny.
        Err(_) if shortest.contains('.') => ("0".to_string(), "00".to_string()),
        Err(_) => (shortest, "00".to_string()),
    }
}

/// Insert comma separators every three digits
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a backend timestamp in the local time zone, e.g. `Jan 5, 2024, 03:04 PM`.
pub fn format_date(timestamp: &str) -> String {
    format_date_in(timestamp, &Local)
}

/// Format a backend timestamp in the given time zone.
///
/// Accepts RFC 3339 and other ISO 8601 date-times (space separator, no
/// seconds, `+hhmm` offsets), naive `YYYY-MM-DDTHH:MM:SS` (read as wall time
/// in `tz`) and bare `YYYY-MM-DD` dates (midnight UTC). Anything else yields
/// [`INVALID_DATE`].
pub fn format_date_in<Tz>(timestamp: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(timestamp.trim(), tz) {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Offset-carrying ISO 8601 forms RFC 3339 parsing rejects
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];

fn parse_timestamp<Tz: TimeZone>(s: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let s = normalize_timestamp(s);
    let s = s.as_str();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(tz));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(tz));
        }
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive).with_timezone(tz))
}

/// Use `T` between date and time, and `+00:00` for a trailing `Z`
fn normalize_timestamp(s: &str) -> String {
    let mut out = s.to_string();
    if out.len() > 10 && out.as_bytes()[10] == b' ' {
        out.replace_range(10..11, "T");
    }
    if out.len() > 10 && (out.ends_with('Z') || out.ends_with('z')) {
        out.pop();
        out.push_str("+00:00");
    }
    out
}

/// Visual weight of a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Healthy (green)
    Positive,
    /// Needs attention (yellow)
    Warning,
    /// Problem (red)
    Danger,
    /// Informational (blue)
    Info,
    /// Closed or unknown (gray)
    Muted,
}

impl StatusTone {
    /// Badge class pair used by the web console
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Positive => "text-green-600 bg-green-50",
            Self::Warning => "text-yellow-600 bg-yellow-50",
            Self::Danger => "text-red-600 bg-red-50",
            Self::Info => "text-blue-600 bg-blue-50",
            Self::Muted => "text-gray-600 bg-gray-50",
        }
    }
}

/// Map a user or fraud-flag status string to a badge tone (case-insensitive).
pub fn status_tone(status: &str) -> StatusTone {
    match status.to_lowercase().as_str() {
        "active" => StatusTone::Positive,
        "pending" => StatusTone::Warning,
        "flagged" | "suspended" => StatusTone::Danger,
        "resolved" => StatusTone::Info,
        _ => StatusTone::Muted,
    }
}

//! Expiration policy presets and custom timestamp parsing.
//!
//! The shortening API accepts either a relative expiration token from a fixed
//! set or an absolute `expires_at` timestamp. This module owns the token set
//! and the conversion of user-entered date-times into UTC.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Relative expiration presets understood by the shortening API.
///
/// Serializes to the wire token (`"10min"`, `"1hour"`, ...). The default is
/// the shortest-lived preset, matching the initial form selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpirationPreset {
    #[default]
    #[serde(rename = "10min")]
    TenMinutes,

    #[serde(rename = "1hour")]
    OneHour,

    #[serde(rename = "1day")]
    OneDay,

    #[serde(rename = "1week")]
    OneWeek,
}

impl ExpirationPreset {
    /// Token sent when the form has neither a preset nor a custom date-time.
    pub const FALLBACK: Self = Self::OneDay;

    /// All presets, in menu order.
    pub const ALL: [Self; 4] = [
        Self::TenMinutes,
        Self::OneHour,
        Self::OneDay,
        Self::OneWeek,
    ];

    /// The wire token for this preset.
    pub fn token(self) -> &'static str {
        match self {
            Self::TenMinutes => "10min",
            Self::OneHour => "1hour",
            Self::OneDay => "1day",
            Self::OneWeek => "1week",
        }
    }

    /// Human-readable label shown in menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::TenMinutes => "10 Minutes",
            Self::OneHour => "1 Hour",
            Self::OneDay => "1 Day",
            Self::OneWeek => "1 Week",
        }
    }
}

impl fmt::Display for ExpirationPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ExpirationPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.token() == s)
            .ok_or_else(|| {
                format!("unknown expiration token '{s}' (expected 10min, 1hour, 1day or 1week)")
            })
    }
}

/// Errors from parsing a user-entered expiration date-time.
#[derive(Debug, thiserror::Error)]
pub enum ExpiresAtError {
    #[error("Unrecognized date-time '{0}' (expected RFC 3339 or YYYY-MM-DDTHH:MM)")]
    Unrecognized(String),

    #[error("'{0}' is not a valid local time")]
    InvalidLocalTime(String),
}

/// Accepted layouts for timezone-less input, interpreted as local time.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a custom expiration date-time into UTC.
///
/// Accepts RFC 3339 (`2026-03-01T12:00:00+02:00`) as well as the plain
/// `datetime-local` shapes (`2026-03-01T12:00`, seconds optional, `T` or
/// space). Timezone-less input is read as local time and converted.
///
/// # Errors
///
/// Returns [`ExpiresAtError::Unrecognized`] when no layout matches, and
/// [`ExpiresAtError::InvalidLocalTime`] for wall-clock times skipped by a
/// DST transition.
pub fn parse_expires_at(input: &str) -> Result<DateTime<Utc>, ExpiresAtError> {
    let trimmed = input.trim();

    if let Ok(absolute) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(absolute.with_timezone(&Utc));
    }

    for format in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return naive
                .and_local_timezone(Local)
                .earliest()
                .map(|local| local.with_timezone(&Utc))
                .ok_or_else(|| ExpiresAtError::InvalidLocalTime(trimmed.to_string()));
        }
    }

    Err(ExpiresAtError::Unrecognized(trimmed.to_string()))
}

//! Slack export record types and field conversions.
//!
//! A channel export directory holds `users.json` (an array of [`RawUser`]) and
//! one file per day, each an array of [`RawMessage`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Timestamp layout used in transcript lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S (UTC)";

/// One entry of `users.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    /// Slack user id, e.g. `U024BE7LH`
    pub id: String,
    /// Account handle
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    /// Full name from the profile
    #[serde(default, deserialize_with = "string_or_none")]
    pub real_name: Option<String>,
}

impl RawUser {
    /// Picks the display name: `name`, then `real_name`, then the id itself.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.real_name.as_deref())
            .unwrap_or(&self.id)
    }
}

/// One message record of a daily export file.
///
/// Every other field Slack writes (`type`, `subtype`, `reactions`, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMessage {
    /// Posix seconds, as a number or a string such as `"1705314600.000200"`
    pub ts: Option<RawTimestamp>,
    /// Sender user id
    pub user: Option<String>,
    /// Message body with Slack markup
    pub text: Option<String>,
}

/// The `ts` field, which exports write as a string but may also be a number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Number(f64),
    Text(String),
}

impl RawTimestamp {
    /// Returns the seconds value, or `None` for an empty string.
    pub fn seconds(&self) -> Result<Option<f64>, InvalidTimestamp> {
        match self {
            RawTimestamp::Number(n) => Ok(Some(*n)),
            RawTimestamp::Text(s) => {
                let s = s.trim();
                if s.is_empty() {
                    return Ok(None);
                }
                s.parse::<f64>()
                    .map(Some)
                    .map_err(|_| InvalidTimestamp(s.to_string()))
            }
        }
    }
}

/// A `ts` value that is not a usable posix time.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid timestamp '{0}'")]
pub struct InvalidTimestamp(pub String);

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Converts posix seconds to a UTC time, dropping the fractional part.
///
/// Zero means "no timestamp" and yields `Ok(None)`; a real epoch-zero message
/// is indistinguishable from a missing one.
#[allow(clippy::float_cmp)]
pub fn ts_to_utc(seconds: f64) -> Result<Option<DateTime<Utc>>, InvalidTimestamp> {
    if seconds == 0.0 {
        return Ok(None);
    }
    if !seconds.is_finite() {
        return Err(InvalidTimestamp(seconds.to_string()));
    }

    DateTime::from_timestamp(seconds.floor() as i64, 0)
        .map(Some)
        .ok_or_else(|| InvalidTimestamp(seconds.to_string()))
}

/// Resolves a raw `ts` field into a UTC time.
pub fn parse_timestamp(
    raw: Option<&RawTimestamp>,
) -> Result<Option<DateTime<Utc>>, InvalidTimestamp> {
    match raw.map(RawTimestamp::seconds).transpose()?.flatten() {
        Some(seconds) => ts_to_utc(seconds),
        None => Ok(None),
    }
}

/// Formats a time as `YYYY-MM-DD HH:MM:SS (UTC)`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Drops every non-ASCII character, then trailing whitespace.
///
/// Characters are discarded, not transliterated: `"café ☕\n"` becomes `"caf"`.
pub fn clean_text(raw: &str) -> String {
    let mut text: String = raw.chars().filter(char::is_ascii).collect();
    let trimmed_len = text
        .trim_end_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B')
        .len();
    text.truncate(trimmed_len);
    text
}

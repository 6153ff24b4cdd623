//! A resolved chat message and its transcript line.
//!
//! [`Message`] is what the merger produces for every export record: the
//! sender id already replaced by a display name and the text already cleaned
//! and normalized.
//!
//! # Examples
//!
//! ```
//! use slackmerge::Message;
//! use chrono::{TimeZone, Utc};
//!
//! let msg = Message::new("alice", "standup in 5")
//!     .with_timestamp(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
//!
//! assert_eq!(
//!     msg.to_line(20),
//!     "2024-01-15 10:30:00 (UTC) alice:               standup in 5"
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parsing::format_timestamp;

/// One message of the merged channel log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, if the record had a timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,

    /// Display name of the author.
    pub sender: String,

    /// Cleaned, normalized message text. May contain newlines.
    pub text: String,
}

impl Message {
    /// Creates a message without a timestamp.
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            sender: sender.into(),
            text: text.into(),
        }
    }

    /// Sets the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, ts: DateTime<Utc>) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Sets the timestamp from an optional value.
    #[must_use]
    pub fn with_timestamp_opt(mut self, ts: Option<DateTime<Utc>>) -> Self {
        self.timestamp = ts;
        self
    }

    /// Returns the sender display name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the timestamp, if any.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// Renders the transcript line `"<timestamp> <sender:> <text>"`.
    ///
    /// `sender:` is left-justified and padded to `sender_width` characters;
    /// longer names are not truncated. Without a timestamp the line starts
    /// at the sender column.
    pub fn to_line(&self, sender_width: usize) -> String {
        let sender = format!("{}:", self.sender);
        match &self.timestamp {
            Some(ts) => format!(
                "{} {:<width$} {}",
                format_timestamp(ts),
                sender,
                self.text,
                width = sender_width
            ),
            None => format!("{:<width$} {}", sender, self.text, width = sender_width),
        }
    }
}

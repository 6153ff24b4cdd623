//! Parsing utilities for Slack export files.
//!
//! This module contains the serde record types and the field conversions
//! (timestamps, text cleanup) used by the merger.

pub mod slack;

pub use slack::{
    InvalidTimestamp, RawMessage, RawTimestamp, RawUser, TIMESTAMP_FORMAT, clean_text,
    format_timestamp, parse_timestamp, ts_to_utc,
};

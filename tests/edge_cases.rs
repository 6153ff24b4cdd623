//! Edge case tests for slackmerge
//!
//! These tests cover boundary conditions of line formatting, timestamps and
//! text cleanup that regular unit tests don't reach.

use chrono::{TimeZone, Utc};
use slackmerge::Message;
use slackmerge::core::{Transcript, UserDirectory, normalize_text};
use slackmerge::parsing::{RawTimestamp, clean_text, format_timestamp, parse_timestamp, ts_to_utc};

// =========================================================================
// Sender column
// =========================================================================

#[test]
fn test_unicode_sender_padded_by_characters() {
    // Display names are not ASCII-stripped, only message text is
    let line = Message::new("Иван", "hi").to_line(10);
    assert_eq!(line, "Иван:      hi");
}

#[test]
fn test_sender_exactly_at_width() {
    let sender = "a".repeat(19);
    let line = Message::new(sender.clone(), "hi").to_line(20);
    assert_eq!(line, format!("{sender}: hi"));
}

#[test]
fn test_zero_width_column() {
    assert_eq!(Message::new("bob", "hi").to_line(0), "bob: hi");
}

#[test]
fn test_transcript_uses_its_width() {
    let mut narrow = Transcript::new(5);
    let mut wide = Transcript::new(30);
    let msg = Message::new("bob", "hi");
    narrow.push(&msg);
    wide.push(&msg);
    assert!(narrow.lines()[0].len() < wide.lines()[0].len());
}

// =========================================================================
// Timestamps
// =========================================================================

#[test]
fn test_fraction_is_truncated_not_rounded() {
    let ts = ts_to_utc(1705314659.999).unwrap().unwrap();
    assert_eq!(format_timestamp(&ts), "2024-01-15 10:30:59 (UTC)");
}

#[test]
fn test_negative_timestamp_floors() {
    let ts = ts_to_utc(-1.5).unwrap().unwrap();
    assert_eq!(ts, Utc.with_ymd_and_hms(1969, 12, 31, 23, 59, 58).unwrap());
}

#[test]
fn test_small_fraction_is_still_a_timestamp() {
    let ts = ts_to_utc(0.5).unwrap().unwrap();
    assert_eq!(format_timestamp(&ts), "1970-01-01 00:00:00 (UTC)");
}

#[test]
fn test_slack_style_string_timestamp() {
    let ts = parse_timestamp(Some(&RawTimestamp::Text("1705314600.123456".into())))
        .unwrap()
        .unwrap();
    assert_eq!(ts.timestamp(), 1705314600);
}

#[test]
fn test_far_future_timestamp() {
    let ts = ts_to_utc(253402300799.0).unwrap().unwrap();
    assert_eq!(format_timestamp(&ts), "9999-12-31 23:59:59 (UTC)");
}

// =========================================================================
// Text cleanup and normalization
// =========================================================================

#[test]
fn test_text_of_only_emoji_becomes_empty() {
    assert_eq!(clean_text("🎉🔥💀"), "");
    assert_eq!(Message::new("bob", clean_text("🎉")).to_line(4), "bob: ");
}

#[test]
fn test_leading_whitespace_kept() {
    assert_eq!(clean_text("\n  indented"), "\n  indented");
}

#[test]
fn test_very_long_text() {
    let text = "x".repeat(1024 * 1024);
    assert_eq!(clean_text(&text).len(), text.len());
}

#[test]
fn test_cleanup_can_form_a_token() {
    // Characters dropped by cleanup can join a mention together
    let users: UserDirectory = [("U1".to_string(), "alice".to_string())]
        .into_iter()
        .collect();
    let cleaned = clean_text("<@U\u{200B}1>");
    assert_eq!(normalize_text(&cleaned, &users), "@alice");
}

#[test]
fn test_display_name_with_markup_is_not_renormalized() {
    let users: UserDirectory = [
        ("U1".to_string(), "<!here>".to_string()),
        ("U2".to_string(), "bob".to_string()),
    ]
    .into_iter()
    .collect();
    assert_eq!(normalize_text("<@U1>", &users), "@<!here>");
}

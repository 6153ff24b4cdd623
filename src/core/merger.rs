//! Merges daily export files into one transcript.
//!
//! Files are visited in plain lexical name order and records in file order.
//! Message timestamps play no part in ordering: `a.json` always comes before
//! `b.json`, even if its messages are newer.

use std::path::Path;

use serde_json::Value;

use crate::Message;
use crate::cancel::CancelToken;
use crate::error::{Result, SlackmergeError};
use crate::loader::{FileIndex, read_json};
use crate::parsing::{RawMessage, clean_text, parse_timestamp};

use super::directory::UserDirectory;
use super::models::Transcript;
use super::normalizer::normalize_text;

/// Merges every file of `files` into a transcript.
///
/// `files` must no longer contain the users file. The token is checked before
/// each file and each record; once cancelled, [`SlackmergeError::Aborted`] is
/// returned and the partial transcript is dropped.
pub fn merge_logs(
    files: &FileIndex,
    users: &UserDirectory,
    sender_width: usize,
    cancel: &CancelToken,
) -> Result<Transcript> {
    let mut transcript = Transcript::new(sender_width);

    for (name, path) in files.iter() {
        if cancel.is_cancelled() {
            return Err(SlackmergeError::Aborted);
        }

        let records = parse_export(read_json(path)?, path)?;
        log::debug!("Merging {} ({} records)", name, records.len());

        for (index, raw) in records.into_iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(SlackmergeError::Aborted);
            }
            let message = resolve_message(raw, users, path, index)?;
            transcript.push(&message);
        }
    }

    Ok(transcript)
}

/// Interprets a loaded export file as its array of records.
pub fn parse_export(value: Value, path: &Path) -> Result<Vec<RawMessage>> {
    let Value::Array(entries) = value else {
        return Err(SlackmergeError::wrong_format(
            path,
            "expected a JSON array of messages",
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            serde_json::from_value(entry).map_err(|e| {
                SlackmergeError::wrong_format(path, format!("message #{i}: {e}"))
            })
        })
        .collect()
}

/// Turns one export record into a [`Message`].
///
/// The sender id must be in `users`; the text is stripped to ASCII, trimmed
/// at the end and normalized.
pub fn resolve_message(
    raw: RawMessage,
    users: &UserDirectory,
    path: &Path,
    index: usize,
) -> Result<Message> {
    let timestamp = parse_timestamp(raw.ts.as_ref())
        .map_err(|e| SlackmergeError::wrong_format(path, format!("message #{index}: {e}")))?;

    let Some(user) = raw.user else {
        return Err(SlackmergeError::wrong_format(
            path,
            format!("message #{index}: missing field `user`"),
        ));
    };
    let Some(sender) = users.get(&user) else {
        return Err(SlackmergeError::UnknownUser {
            user,
            path: path.to_path_buf(),
            index,
        });
    };

    let Some(text) = raw.text else {
        return Err(SlackmergeError::wrong_format(
            path,
            format!("message #{index}: missing field `text`"),
        ));
    };
    let text = clean_text(&text);
    let text = normalize_text(&text, users).into_owned();

    Ok(Message::new(sender, text).with_timestamp_opt(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    fn users() -> UserDirectory {
        [("U1", "alice"), ("U2", "bob")]
            .into_iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect()
    }

    fn raw(value: serde_json::Value) -> RawMessage {
        serde_json::from_value(value).unwrap()
    }

    fn write_export(dir: &TempDir, name: &str, body: &serde_json::Value) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body.to_string()).unwrap();
        path
    }

    fn index_of(dir: &TempDir) -> FileIndex {
        crate::loader::list_directory(dir.path()).unwrap()
    }

    #[test]
    fn test_resolve_message() {
        let msg = resolve_message(
            raw(json!({"ts": "1705314600.000200", "user": "U1", "text": "hi <@U2>\n"})),
            &users(),
            Path::new("a.json"),
            0,
        )
        .unwrap();

        assert_eq!(msg.sender, "alice");
        assert_eq!(msg.text, "hi @bob");
        assert_eq!(msg.timestamp.unwrap().timestamp(), 1705314600);
    }

    #[test]
    fn test_resolve_unknown_user() {
        let err = resolve_message(
            raw(json!({"ts": "1", "user": "U404", "text": "hi"})),
            &users(),
            Path::new("a.json"),
            7,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            SlackmergeError::UnknownUser { ref user, index: 7, .. } if user == "U404"
        ));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_resolve_missing_user_or_text() {
        let err = resolve_message(
            raw(json!({"ts": "1", "text": "bot says hi"})),
            &users(),
            Path::new("a.json"),
            0,
        )
        .unwrap_err();
        assert!(err.to_string().contains("`user`"));

        let err = resolve_message(
            raw(json!({"ts": "1", "user": "U1"})),
            &users(),
            Path::new("a.json"),
            0,
        )
        .unwrap_err();
        assert!(err.to_string().contains("`text`"));
    }

    #[test]
    fn test_resolve_zero_ts_has_no_timestamp() {
        let msg = resolve_message(
            raw(json!({"ts": 0, "user": "U2", "text": "hello"})),
            &users(),
            Path::new("a.json"),
            0,
        )
        .unwrap();
        assert!(msg.timestamp.is_none());
        assert_eq!(msg.to_line(20), "bob:                 hello");
    }

    #[test]
    fn test_resolve_bad_ts() {
        let err = resolve_message(
            raw(json!({"ts": "noon", "user": "U2", "text": "hello"})),
            &users(),
            Path::new("a.json"),
            0,
        )
        .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_parse_export_rejects_non_array() {
        let err = parse_export(json!({"messages": []}), Path::new("a.json")).unwrap_err();
        assert!(err.is_format());

        let err = parse_export(json!([1, 2]), Path::new("a.json")).unwrap_err();
        assert!(err.to_string().contains("message #0"));
    }

    #[test]
    fn test_merge_orders_by_file_name_not_timestamp() {
        let dir = tempdir().unwrap();
        write_export(
            &dir,
            "b.json",
            &json!([{"ts": "1000000000", "user": "U2", "text": "older"}]),
        );
        write_export(
            &dir,
            "a.json",
            &json!([{"ts": "1700000000", "user": "U1", "text": "newer"}]),
        );

        let transcript = merge_logs(&index_of(&dir), &users(), 20, &CancelToken::new()).unwrap();
        assert_eq!(transcript.len(), 2);
        assert!(transcript.lines()[0].ends_with("newer"));
        assert!(transcript.lines()[1].ends_with("older"));
    }

    #[test]
    fn test_merge_keeps_record_order() {
        let dir = tempdir().unwrap();
        write_export(
            &dir,
            "2024-01-01.json",
            &json!([
                {"ts": "1704103200", "user": "U1", "text": "third"},
                {"ts": "1704099600", "user": "U2", "text": "first"},
            ]),
        );

        let transcript = merge_logs(&index_of(&dir), &users(), 20, &CancelToken::new()).unwrap();
        assert_eq!(
            transcript.lines(),
            [
                "2024-01-01 10:00:00 (UTC) alice:               third",
                "2024-01-01 09:00:00 (UTC) bob:                 first",
            ]
        );
    }

    #[test]
    fn test_merge_empty_index() {
        let transcript =
            merge_logs(&FileIndex::new(), &users(), 20, &CancelToken::new()).unwrap();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_merge_aborts_when_cancelled() {
        let dir = tempdir().unwrap();
        write_export(
            &dir,
            "a.json",
            &json!([{"ts": "1", "user": "U1", "text": "hi"}]),
        );

        let cancel = CancelToken::new();
        cancel.cancel();
        let err = merge_logs(&index_of(&dir), &users(), 20, &cancel).unwrap_err();
        assert!(err.is_aborted());
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn test_merge_fails_on_non_json_entry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "not json").unwrap();

        let err = merge_logs(&index_of(&dir), &users(), 20, &CancelToken::new()).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("notes.txt.json"));
    }
}

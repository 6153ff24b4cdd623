//! User id to display name resolution.
//!
//! Built once from `users.json` and read-only afterwards.
//!
//! ```
//! use slackmerge::core::UserDirectory;
//! use slackmerge::parsing::RawUser;
//! use serde_json::json;
//!
//! let users: Vec<RawUser> = serde_json::from_value(json!([
//!     {"id": "U1", "name": "alice", "real_name": "Alice Liddell"},
//!     {"id": "U2", "real_name": "Bob Builder"},
//!     {"id": "U3"},
//! ]))?;
//!
//! let directory = UserDirectory::from_users(users);
//! assert_eq!(directory.get("U1"), Some("alice"));
//! assert_eq!(directory.get("U2"), Some("Bob Builder"));
//! assert_eq!(directory.get("U3"), Some("U3"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SlackmergeError};
use crate::loader::read_json;
use crate::parsing::RawUser;

/// Mapping from Slack user id to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    names: HashMap<String, String>,
}

impl UserDirectory {
    /// Builds the directory from parsed users, in order.
    ///
    /// A repeated id keeps the display name of its last entry.
    pub fn from_users(users: impl IntoIterator<Item = RawUser>) -> Self {
        let names = users
            .into_iter()
            .map(|user| {
                let name = user.display_name().to_string();
                (user.id, name)
            })
            .collect();
        Self { names }
    }

    /// Builds the directory from the JSON content of a users file.
    ///
    /// The document must be an array of objects with a string `id`. An array
    /// that yields no users is rejected as [`SlackmergeError::EmptyUserDirectory`].
    pub fn from_json(value: Value, path: &Path) -> Result<Self> {
        let Value::Array(entries) = value else {
            return Err(SlackmergeError::wrong_format(
                path,
                "expected a JSON array of users",
            ));
        };

        let users = entries
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_json::from_value::<RawUser>(entry).map_err(|e| {
                    SlackmergeError::wrong_format(path, format!("user #{i}: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let directory = Self::from_users(users);
        if directory.is_empty() {
            return Err(SlackmergeError::EmptyUserDirectory {
                path: path.to_path_buf(),
            });
        }
        Ok(directory)
    }

    /// Loads and resolves a users file.
    pub fn load(path: &Path) -> Result<Self> {
        let value = read_json(path)?;
        let directory = Self::from_json(value, path)?;
        log::debug!("Resolved {} users from {}", directory.len(), path.display());
        Ok(directory)
    }

    /// Returns the display name for a user id.
    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Returns `true` if the id is known.
    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Number of known users.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no users are known.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(id, display name)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }
}

impl FromIterator<(String, String)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

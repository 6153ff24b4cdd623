//! Directory listing and JSON loading.
//!
//! - [`list_directory`] builds a [`FileIndex`] of one directory level
//! - [`read_json`] loads a whole file as one JSON document
//!
//! # Example
//!
//! ```rust,no_run
//! use slackmerge::loader::{list_directory, read_json};
//! use std::path::Path;
//!
//! # fn main() -> slackmerge::Result<()> {
//! let mut files = list_directory(Path::new("exports/general"))?;
//! if let Some(users) = files.remove("users.json") {
//!     let value = read_json(&users)?;
//!     println!("{} users", value.as_array().map_or(0, Vec::len));
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Result, SlackmergeError};

/// Entries of a data directory, keyed by file name.
///
/// Iteration is in plain byte order of the names, so `2024-01-10.json`
/// sorts before `2024-01-9.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileIndex {
    entries: BTreeMap<String, PathBuf>,
}

impl FileIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous path for the same name.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        self.entries.insert(name.into(), path.into());
    }

    /// Returns the path for a file name.
    pub fn get(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Returns `true` if the index has an entry with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Takes an entry out of the index.
    pub fn remove(&mut self, name: &str) -> Option<PathBuf> {
        self.entries.remove(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the directory had no entries left.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, path)` pairs in lexical name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
    }
}

impl FromIterator<(String, PathBuf)> for FileIndex {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Lists one level of `dir`, mapping each entry name to its joined path.
///
/// Nothing is filtered: subdirectories and hidden files are indexed too.
pub fn list_directory(dir: &Path) -> Result<FileIndex> {
    let read_dir = fs::read_dir(dir).map_err(|e| SlackmergeError::io(dir, e))?;

    let mut index = FileIndex::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| SlackmergeError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        index.insert(name, dir.join(entry.file_name()));
    }

    log::debug!("Indexed {} entries in {}", index.len(), dir.display());
    Ok(index)
}

/// Appends `.json` unless the path already ends with it.
pub fn with_json_suffix(path: &Path) -> PathBuf {
    if path.as_os_str().to_string_lossy().ends_with(".json") {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".json");
    PathBuf::from(raw)
}

/// Reads and parses a whole file as a single JSON document.
///
/// A missing `.json` suffix is added before opening. Failures are logged with
/// the file name and returned; any successfully parsed value, including
/// `false`, `0` or `[]`, comes back as `Ok`.
pub fn read_json(path: &Path) -> Result<Value> {
    let path = with_json_suffix(path);

    let content = fs::read_to_string(&path).map_err(|e| {
        log::error!("Cannot read {}: {}", path.display(), e);
        SlackmergeError::io(&path, e)
    })?;

    serde_json::from_str(&content).map_err(|e| {
        log::error!("JSON format error in {}: {}", path.display(), e);
        SlackmergeError::parse(&path, e)
    })
}

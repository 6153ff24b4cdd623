//! Configuration for a merge run.
//!
//! [`MergeConfig`] holds the few knobs the pipeline has. The defaults match the
//! layout of a Slack channel export and the classic transcript look.
//!
//! # Example
//!
//! ```rust
//! use slackmerge::config::MergeConfig;
//!
//! let config = MergeConfig::new().with_sender_width(24);
//! assert_eq!(config.users_file, "users.json");
//! assert_eq!(config.sender_width, 24);
//! ```

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings for building and writing a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Name of the user directory file inside the data directory (default: `users.json`)
    pub users_file: String,

    /// Minimum width of the `sender:` column (default: 20)
    pub sender_width: usize,

    /// Extension appended to the data directory name for the output file (default: `txt`)
    pub output_extension: String,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            users_file: "users.json".to_string(),
            sender_width: 20,
            output_extension: "txt".to_string(),
        }
    }
}

impl MergeConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the users file name.
    #[must_use]
    pub fn with_users_file(mut self, name: impl Into<String>) -> Self {
        self.users_file = name.into();
        self
    }

    /// Sets the minimum sender column width.
    #[must_use]
    pub fn with_sender_width(mut self, width: usize) -> Self {
        self.sender_width = width;
        self
    }

    /// Sets the output file extension (without dot).
    #[must_use]
    pub fn with_output_extension(mut self, ext: impl Into<String>) -> Self {
        self.output_extension = ext.into();
        self
    }

    /// Returns the transcript path for a data directory.
    ///
    /// The transcript is a sibling of the directory: `exports/general` becomes
    /// `exports/general.txt`. Returns `None` when the path has no final name
    /// (`/`, `.`, `..`), meaning the transcript goes to standard output.
    ///
    /// ```rust
    /// use slackmerge::config::MergeConfig;
    /// use std::path::Path;
    ///
    /// let config = MergeConfig::new();
    /// assert_eq!(
    ///     config.output_path(Path::new("exports/general/")),
    ///     Some("exports/general.txt".into())
    /// );
    /// assert_eq!(config.output_path(Path::new("/")), None);
    /// ```
    pub fn output_path(&self, data_dir: &Path) -> Option<PathBuf> {
        let Some(Component::Normal(name)) = data_dir.components().next_back() else {
            return None;
        };

        let mut file_name = name.to_os_string();
        file_name.push(".");
        file_name.push(&self.output_extension);
        Some(data_dir.with_file_name(file_name))
    }
}

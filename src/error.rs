//! Unified error types for slackmerge.
//!
//! Every failure is terminal for a run. The binary turns each error class into
//! one process exit code via [`SlackmergeError::exit_code`]:
//!
//! | Class | Variants | Exit code |
//! |-------|----------|-----------|
//! | Usage | [`Usage`](SlackmergeError::Usage) | 1 |
//! | Missing users file | [`UsersFileMissing`](SlackmergeError::UsersFileMissing) | 2 |
//! | Format | [`Parse`](SlackmergeError::Parse), [`WrongFormat`](SlackmergeError::WrongFormat), [`EmptyUserDirectory`](SlackmergeError::EmptyUserDirectory) | 3 |
//! | Interrupt | [`Aborted`](SlackmergeError::Aborted) | 4 |
//! | Lookup | [`UnknownUser`](SlackmergeError::UnknownUser) | 5 |
//! | I/O | [`Io`](SlackmergeError::Io) | 6 |

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// A specialized [`Result`] type for slackmerge operations.
///
/// # Example
///
/// ```rust
/// use slackmerge::error::Result;
///
/// fn count_lines() -> Result<usize> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, SlackmergeError>;

/// The error type for all slackmerge operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SlackmergeError {
    /// The command line was incomplete, e.g. no data directory was given.
    #[error("{0}")]
    Usage(String),

    /// The data directory has no users file.
    #[error("users file missing: {}", path.display())]
    UsersFileMissing {
        /// Where the users file was expected
        path: PathBuf,
    },

    /// Reading or writing a file failed.
    ///
    /// This covers a missing data directory, a missing export file and
    /// failures while writing the transcript.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file or directory involved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A file is not valid JSON.
    #[error("JSON format error in {}: {source}", path.display())]
    Parse {
        /// The file that failed to parse
        path: PathBuf,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A file is valid JSON but does not have the expected structure.
    #[error("wrong file format in {}: {message}", path.display())]
    WrongFormat {
        /// The offending file
        path: PathBuf,
        /// Description of what's wrong
        message: String,
    },

    /// The users file resolved to no users at all.
    #[error("wrong file format: no users in {}", path.display())]
    EmptyUserDirectory {
        /// The users file
        path: PathBuf,
    },

    /// A message references a user id that is not in the users file.
    #[error("unknown user '{user}' in {} (message #{index})", path.display())]
    UnknownUser {
        /// The unresolved user id
        user: String,
        /// The export file containing the message
        path: PathBuf,
        /// Position of the message within its file
        index: usize,
    },

    /// The run was interrupted before the transcript was complete.
    #[error("aborted")]
    Aborted,
}

impl SlackmergeError {
    /// Creates an I/O error tied to a path.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SlackmergeError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a JSON parse error tied to a path.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        SlackmergeError::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates a structural format error.
    pub fn wrong_format(path: &Path, message: impl Into<String>) -> Self {
        SlackmergeError::WrongFormat {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Returns the process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            SlackmergeError::Usage(_) => 1,
            SlackmergeError::UsersFileMissing { .. } => 2,
            SlackmergeError::Parse { .. }
            | SlackmergeError::WrongFormat { .. }
            | SlackmergeError::EmptyUserDirectory { .. } => 3,
            SlackmergeError::Aborted => 4,
            SlackmergeError::UnknownUser { .. } => 5,
            SlackmergeError::Io { .. } => 6,
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, SlackmergeError::Io { .. })
    }

    /// Returns `true` if the input files are malformed.
    pub fn is_format(&self) -> bool {
        self.exit_code() == 3
    }

    /// Returns `true` if the run was interrupted.
    pub fn is_aborted(&self) -> bool {
        matches!(self, SlackmergeError::Aborted)
    }
}

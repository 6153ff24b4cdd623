//! # Slackmerge
//!
//! Merge a Slack channel export into one human-readable channel log.
//!
//! ## Overview
//!
//! A Slack export stores each channel as a directory holding `users.json` and one
//! JSON file per day. Slackmerge reads that directory and writes a single text
//! file next to it, one line per message:
//!
//! ```text
//! 2024-01-15 10:30:00 (UTC) alice:               @here standup in 5, ping @bob
//! ```
//!
//! Along the way it:
//! - resolves user ids to display names (`name`, then `real_name`, then the id)
//! - formats timestamps as UTC with second precision
//! - rewrites `<!here>` and `<@USERID>` markup to `@here` and `@name`
//!
//! Files are merged in lexical file name order; records keep their order
//! within a file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slackmerge::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let summary = run(Path::new("exports/general"), &MergeConfig::new(), &CancelToken::new())?;
//!     println!("wrote {} lines", summary.lines);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`loader`]: directory listing ([`FileIndex`](loader::FileIndex)) and JSON loading
//! - [`parsing`]: Slack record types, timestamp and text conversions
//! - [`core`]: user directory, normalizer, merger, writer and the [`run`](core::run) pipeline
//! - [`config`]: [`MergeConfig`](config::MergeConfig)
//! - [`cancel`]: [`CancelToken`](cancel::CancelToken) for Ctrl-C handling
//! - [`error`]: [`SlackmergeError`] and exit codes
//! - [`cli`]: clap arguments (requires the `cli` feature)

pub mod cancel;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod message;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{Result, SlackmergeError};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use slackmerge::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{Result, SlackmergeError};

    pub use crate::cancel::CancelToken;
    pub use crate::config::MergeConfig;

    pub use crate::loader::{FileIndex, list_directory, read_json};

    pub use crate::core::{
        RunSummary, Transcript, UserDirectory, build_transcript, merge_logs, normalize_text,
        run, write_transcript,
    };
}

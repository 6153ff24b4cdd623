//! Core processing logic for slackmerge.
//!
//! This module contains:
//! - [`directory`] - User id to display name resolution
//! - [`normalizer`] - Slack markup to plain text
//! - [`merger`] - Merging export files into a transcript
//! - [`models`] - The [`Transcript`] type
//! - [`output`] - Transcript writer
//! - [`processor`] - The end-to-end pipeline
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slackmerge::cancel::CancelToken;
//! use slackmerge::config::MergeConfig;
//! use slackmerge::core::run;
//! use std::path::Path;
//!
//! # fn main() -> slackmerge::Result<()> {
//! let summary = run(Path::new("exports/general"), &MergeConfig::new(), &CancelToken::new())?;
//! println!("{} lines", summary.lines);
//! # Ok(())
//! # }
//! ```

pub mod directory;
pub mod merger;
pub mod models;
pub mod normalizer;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use directory::UserDirectory;
pub use merger::{merge_logs, parse_export, resolve_message};
pub use models::Transcript;
pub use normalizer::normalize_text;
pub use output::{write_lines, write_transcript};
pub use processor::{MergeResult, RunSummary, build_transcript, run};

// Re-export Message from the crate root
pub use crate::Message;

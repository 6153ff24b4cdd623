//! The full pipeline: list, resolve users, merge, write.

use std::path::{Path, PathBuf};

use crate::cancel::CancelToken;
use crate::config::MergeConfig;
use crate::error::{Result, SlackmergeError};
use crate::loader::list_directory;

use super::directory::UserDirectory;
use super::merger::merge_logs;
use super::models::Transcript;
use super::output::write_transcript;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Export files merged (the users file not counted)
    pub files: usize,
    /// Users resolved from the users file
    pub users: usize,
    /// Lines in the transcript
    pub lines: usize,
    /// Where the transcript went; `None` means standard output
    pub output: Option<PathBuf>,
}

impl RunSummary {
    /// Returns `true` if a transcript was actually written.
    pub fn wrote_output(&self) -> bool {
        self.lines > 0
    }
}

/// A merged transcript plus the counts that went into it.
#[derive(Debug, Clone)]
pub struct MergeResult {
    pub transcript: Transcript,
    pub files: usize,
    pub users: usize,
}

/// Builds the transcript for a data directory without writing it.
///
/// Fails with [`SlackmergeError::UsersFileMissing`] when the directory has no
/// users file.
pub fn build_transcript(
    data_dir: &Path,
    config: &MergeConfig,
    cancel: &CancelToken,
) -> Result<MergeResult> {
    let mut files = list_directory(data_dir)?;

    let Some(users_path) = files.remove(&config.users_file) else {
        return Err(SlackmergeError::UsersFileMissing {
            path: data_dir.join(&config.users_file),
        });
    };
    let users = UserDirectory::load(&users_path)?;
    log::info!("Resolved {} users", users.len());

    let transcript = merge_logs(&files, &users, config.sender_width, cancel)?;
    log::info!(
        "Merged {} lines from {} files",
        transcript.len(),
        files.len()
    );

    Ok(MergeResult {
        transcript,
        files: files.len(),
        users: users.len(),
    })
}

/// Runs the whole pipeline and writes `<data_dir>.<ext>`.
pub fn run(data_dir: &Path, config: &MergeConfig, cancel: &CancelToken) -> Result<RunSummary> {
    log::info!("data source: {}", data_dir.display());
    let merged = build_transcript(data_dir, config, cancel)?;

    let output = config.output_path(data_dir);
    match &output {
        Some(path) => log::info!("Writing to {}", path.display()),
        None => log::info!("Writing to standard output"),
    }
    write_transcript(output.as_deref(), &merged.transcript)?;

    Ok(RunSummary {
        files: merged.files,
        users: merged.users,
        lines: merged.transcript.len(),
        output,
    })
}

//! Plain text output writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::core::models::Transcript;
use crate::error::{Result, SlackmergeError};

/// Writes each line followed by `\n`, then flushes.
pub fn write_lines<W: Write>(mut writer: W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Writes a transcript as UTF-8 text.
///
/// With `Some(path)` the file is created or truncated; with `None` the lines
/// go to standard output. Nothing is opened for an empty transcript. A failed
/// write leaves whatever was already written in place.
pub fn write_transcript(path: Option<&Path>, transcript: &Transcript) -> Result<()> {
    if transcript.is_empty() {
        log::debug!("Nothing to write");
        return Ok(());
    }

    match path {
        Some(path) => {
            let result = File::create(path)
                .and_then(|file| write_lines(BufWriter::new(file), transcript.lines()));
            result.map_err(|e| {
                log::error!("Couldn't write file {}: {}", path.display(), e);
                SlackmergeError::io(path, e)
            })
        }
        None => write_lines(io::stdout().lock(), transcript.lines()).map_err(|e| {
            log::error!("Couldn't write to standard output: {}", e);
            SlackmergeError::io("<stdout>", e)
        }),
    }
}

//! Transcript writers.
//!
//! - [`write_transcript`] writes to a file, or to standard output when no path is given
//! - [`write_lines`] writes lines to any [`std::io::Write`]
//!
//! An empty transcript is a successful no-op: no file is created.

mod text_writer;

pub use text_writer::{write_lines, write_transcript};

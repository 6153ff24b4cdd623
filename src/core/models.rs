//! Core data models for the merged log.

use crate::Message;

/// The ordered lines of a merged channel log.
///
/// Lines are appended in merge order (file name order, then record order)
/// and never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
    sender_width: usize,
}

impl Transcript {
    /// Creates an empty transcript whose sender column is `sender_width` wide.
    pub fn new(sender_width: usize) -> Self {
        Self {
            lines: Vec::new(),
            sender_width,
        }
    }

    /// Appends a message as its rendered line.
    pub fn push(&mut self, message: &Message) {
        self.lines.push(message.to_line(self.sender_width));
    }

    /// Appends an already rendered line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Returns the rendered lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Renders the whole transcript, each line terminated by `\n`.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

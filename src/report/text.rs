//! Plain-text per-file report writer.
//!
//! Layout per accepted span:
//!
//! ```text
//! Result 1:
//! Sequence length: 406
//! Sequence:
//! AAAX...XBBB
//!
//! ```
//!
//! A file without accepted spans gets a single placeholder line.

use crate::matcher::SequenceMatch;
use std::io::{self, BufWriter, Write};

/// Placeholder written when a file has no accepted spans.
pub const NO_MATCH_LINE: &str = "No qualifying sequence found.";

/// Buffered text report writer using itoa for integer formatting.
pub struct ReportWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(output: W) -> Self {
        Self {
            writer: BufWriter::new(output),
            itoa_buf: itoa::Buffer::new(),
        }
    }

    /// Write one numbered entry (1-based `index`).
    pub fn write_match(&mut self, index: usize, m: &SequenceMatch) -> io::Result<()> {
        self.writer.write_all(b"Result ")?;
        self.writer
            .write_all(self.itoa_buf.format(index).as_bytes())?;
        self.writer.write_all(b":\nSequence length: ")?;
        self.writer
            .write_all(self.itoa_buf.format(m.length).as_bytes())?;
        self.writer.write_all(b"\nSequence:\n")?;
        self.writer.write_all(m.sequence.as_bytes())?;
        self.writer.write_all(b"\n\n")
    }

    /// Write the placeholder line for a file without matches.
    pub fn write_no_match(&mut self) -> io::Result<()> {
        self.writer.write_all(NO_MATCH_LINE.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// Write a full report for `matches`.
    pub fn write_report(&mut self, matches: &[SequenceMatch]) -> io::Result<()> {
        if matches.is_empty() {
            return self.write_no_match();
        }
        for (i, m) in matches.iter().enumerate() {
            self.write_match(i + 1, m)?;
        }
        Ok(())
    }

    /// Flush buffered output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

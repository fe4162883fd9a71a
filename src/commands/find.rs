//! Single-file scan printing the text report.

use crate::matcher::{Matcher, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::report::FileReport;
use crate::sequence::{display_name, read_sequence, read_sequence_from, Result};
use std::io::{self, Write};
use std::path::Path;

/// Find command configuration.
#[derive(Debug, Clone)]
pub struct FindCommand {
    pub start_marker: String,
    pub stop_marker: String,
    pub min_length: usize,
    pub max_length: usize,
}

impl FindCommand {
    pub fn new(start_marker: &str, stop_marker: &str) -> Self {
        Self {
            start_marker: start_marker.to_string(),
            stop_marker: stop_marker.to_string(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Set the accepted span length range.
    pub fn with_length_range(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Scan one file and write its text report to `output`.
    pub fn run<P: AsRef<Path>, W: Write>(&self, path: P, output: &mut W) -> Result<FileReport> {
        let path = path.as_ref();
        let buffer = read_sequence(path)?;
        self.report(display_name(path), &buffer, output)
    }

    /// Scan stdin and write its text report to `output`.
    pub fn run_stdin<W: Write>(&self, output: &mut W) -> Result<FileReport> {
        let buffer = read_sequence_from(io::stdin().lock())?;
        self.report("-".to_string(), &buffer, output)
    }

    /// Scan an already loaded buffer.
    pub fn report<W: Write>(
        &self,
        name: String,
        buffer: &str,
        output: &mut W,
    ) -> Result<FileReport> {
        let matches = Matcher::new(&self.start_marker, &self.stop_marker)
            .with_length_range(self.min_length, self.max_length)
            .find_all(buffer);
        let report = FileReport::new(name, matches);
        report.write_text(&mut *output)?;
        Ok(report)
    }
}

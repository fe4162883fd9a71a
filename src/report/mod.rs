//! Per-file results and their rendering.

pub mod document;
pub mod text;

pub use document::{Block, Document, DocumentFormat, ReportSink};
pub use text::{ReportWriter, NO_MATCH_LINE};

use crate::matcher::SequenceMatch;
use std::io::{self, Write};

/// Title heading of the consolidated document.
pub const DOCUMENT_TITLE: &str = "DNA Analysis Results";

/// One input file's name and its accepted spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file_name: String,
    pub matches: Vec<SequenceMatch>,
}

impl FileReport {
    pub fn new(file_name: impl Into<String>, matches: Vec<SequenceMatch>) -> Self {
        Self {
            file_name: file_name.into(),
            matches,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Write the plain-text report.
    pub fn write_text<W: Write>(&self, output: W) -> io::Result<()> {
        let mut writer = ReportWriter::new(output);
        writer.write_report(&self.matches)?;
        writer.flush()
    }

    /// Append this file's section to a consolidated document.
    pub fn append_to<S: ReportSink + ?Sized>(&self, sink: &mut S) {
        sink.add_heading(&format!("File: {}", self.file_name), 2);
        if self.matches.is_empty() {
            sink.add_paragraph(NO_MATCH_LINE);
            return;
        }
        for (i, m) in self.matches.iter().enumerate() {
            sink.add_paragraph(&format!("Result {}:", i + 1));
            sink.add_paragraph(&format!("Sequence length: {}", m.length));
            sink.add_paragraph(&format!("Sequence: {}", m.sequence));
        }
    }
}

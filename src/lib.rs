//! dnascan: marker-delimited sequence scanner
//!
//! Finds non-overlapping substrings that begin with a start marker and end
//! with the next stop marker, keeps those whose length falls in an inclusive
//! range, and reports them per file and in one consolidated document.
//!
//! # Example
//!
//! ```rust,no_run
//! use dnascan::{find_matches, ScanCommand, ScanConfig};
//!
//! let matches = find_matches("AAAXXXBBB", "AAA", "BBB", 0, 100);
//! assert_eq!(matches[0].length, 9);
//!
//! let config = ScanConfig::new("input_dna", "output_results", "ATG", "TAA");
//! let stats = ScanCommand::new(config).run().unwrap();
//! println!("{}", stats);
//! ```

pub mod commands;
pub mod config;
pub mod matcher;
pub mod report;
pub mod sequence;

// Re-export commonly used types
pub use commands::{process_folder, ScanCommand, ScanStats};
pub use config::ScanConfig;
pub use matcher::{find_matches, Matcher, SequenceMatch};
pub use sequence::{Result, ScanError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{FindCommand, GenerateCommand, ScanCommand};
    pub use crate::config::ScanConfig;
    pub use crate::matcher::{find_matches, Matcher, SequenceMatch};
    pub use crate::report::{Document, DocumentFormat, FileReport, ReportSink};
    pub use crate::sequence::{read_sequence, ScanError};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::matcher::Matcher;
        use crate::sequence::normalize_sequence;

        let buffer = normalize_sequence("AAA XXX\nBBB\nAAA YY BBB\n");
        let matches = Matcher::new("AAA", "BBB")
            .with_length_range(0, 8)
            .find_all(&buffer);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].sequence, "AAAYYBBB");
    }

    #[test]
    fn test_report_workflow() {
        use crate::matcher::find_matches;
        use crate::report::{Document, DocumentFormat, FileReport};

        let matches = find_matches("AAABBB", "AAA", "BBB", 0, 10);
        let report = FileReport::new("x.txt", matches);
        let mut doc = Document::new(DocumentFormat::Markdown);
        report.append_to(&mut doc);

        assert!(doc.render_markdown().contains("Sequence: AAABBB"));
    }
}

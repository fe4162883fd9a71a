//! Run configuration for batch scans.
//!
//! Every setting is carried explicitly in a [`ScanConfig`] handed to the
//! scan entry point. Defaults reproduce the reference batch run.

use crate::matcher::{Matcher, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use crate::report::DocumentFormat;
use crate::sequence::DEFAULT_EXTENSION;
use std::path::PathBuf;

/// Default input directory.
pub const DEFAULT_INPUT_DIR: &str = "input_dna";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output_results";

/// Prefix for per-file report names (`result_<file name>`).
pub const DEFAULT_REPORT_PREFIX: &str = "result_";

/// File stem of the consolidated document.
pub const DEFAULT_DOCUMENT_STEM: &str = "DNA_Analysis_Results";

/// Configuration for a batch scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub start_marker: String,
    pub stop_marker: String,
    /// Minimum accepted span length (inclusive)
    pub min_length: usize,
    /// Maximum accepted span length (inclusive)
    pub max_length: usize,
    /// File name suffix selecting input files
    pub extension: String,
    pub report_prefix: String,
    pub document_stem: String,
    pub document_format: DocumentFormat,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            start_marker: String::new(),
            stop_marker: String::new(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            extension: DEFAULT_EXTENSION.to_string(),
            report_prefix: DEFAULT_REPORT_PREFIX.to_string(),
            document_stem: DEFAULT_DOCUMENT_STEM.to_string(),
            document_format: DocumentFormat::Html,
        }
    }
}

impl ScanConfig {
    /// Create a config for the given directories and markers, other settings default.
    pub fn new<I, O>(input_dir: I, output_dir: O, start_marker: &str, stop_marker: &str) -> Self
    where
        I: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            start_marker: start_marker.to_string(),
            stop_marker: stop_marker.to_string(),
            ..Self::default()
        }
    }

    /// Set the accepted span length range.
    pub fn with_length_range(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Set the input file extension. A missing leading dot is added.
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = if extension.is_empty() || extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };
        self
    }

    /// Set the consolidated document format.
    pub fn with_document_format(mut self, format: DocumentFormat) -> Self {
        self.document_format = format;
        self
    }

    /// Build the matcher described by this config.
    pub fn matcher(&self) -> Matcher {
        Matcher::new(&self.start_marker, &self.stop_marker)
            .with_length_range(self.min_length, self.max_length)
    }

    /// Path of the per-file report for the input named `file_name`.
    pub fn report_path(&self, file_name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}{}", self.report_prefix, file_name))
    }

    /// Path of the consolidated document.
    pub fn document_path(&self) -> PathBuf {
        self.output_dir.join(format!(
            "{}.{}",
            self.document_stem,
            self.document_format.extension()
        ))
    }
}

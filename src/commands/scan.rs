//! Batch scan: one text report per input file plus a consolidated document.

use crate::config::ScanConfig;
use crate::matcher::Matcher;
use crate::report::{Document, FileReport, ReportSink, DOCUMENT_TITLE};
use crate::sequence::{display_name, list_sequence_files, read_sequence, Result, ScanError};
use log::{debug, info, warn};
use std::fs::{self, File};
use std::path::Path;
use std::time::Instant;

/// Statistics from a batch scan.
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_with_matches: usize,
    pub total_matches: usize,
    /// Characters of normalized sequence scanned
    pub bases_scanned: u64,
    pub elapsed_secs: f64,
}

impl std::fmt::Display for ScanStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Files: {}, With matches: {}, Matches: {}, Bases: {} ({:.2}s)",
            self.files_scanned,
            self.files_with_matches,
            self.total_matches,
            self.bases_scanned,
            self.elapsed_secs
        )
    }
}

/// Batch scan command.
#[derive(Debug, Clone)]
pub struct ScanCommand {
    pub config: ScanConfig,
}

impl ScanCommand {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan every input file, write its report, then save the consolidated document.
    ///
    /// The first I/O failure aborts the run.
    pub fn run(&self) -> Result<ScanStats> {
        let start = Instant::now();
        let config = &self.config;
        let mut stats = ScanStats::default();

        fs::create_dir_all(&config.output_dir).map_err(|source| ScanError::Write {
            path: config.output_dir.clone(),
            source,
        })?;

        let files = list_sequence_files(&config.input_dir, &config.extension)?;
        info!(
            "Scanning {} file(s) in {}",
            files.len(),
            config.input_dir.display()
        );

        let matcher = config.matcher();
        if matcher.is_degenerate() {
            warn!("Start and stop markers are both empty; every position yields an empty span");
        }

        let mut document = Document::new(config.document_format);
        document.add_heading(DOCUMENT_TITLE, 1);

        for path in &files {
            let report = self.scan_file(path, &matcher, &mut stats)?;
            self.write_report(&report)?;
            report.append_to(&mut document);
        }

        let document_path = config.document_path();
        document.save(&document_path)?;
        info!("Saved {}", document_path.display());

        stats.elapsed_secs = start.elapsed().as_secs_f64();
        Ok(stats)
    }

    fn scan_file(
        &self,
        path: &Path,
        matcher: &Matcher,
        stats: &mut ScanStats,
    ) -> Result<FileReport> {
        let buffer = read_sequence(path)?;
        let matches = matcher.find_all(&buffer);
        let file_name = display_name(path);

        debug!(
            "{}: {} characters, {} match(es)",
            file_name,
            buffer.len(),
            matches.len()
        );

        stats.files_scanned += 1;
        stats.bases_scanned += buffer.chars().count() as u64;
        stats.total_matches += matches.len();
        if !matches.is_empty() {
            stats.files_with_matches += 1;
        }

        Ok(FileReport::new(file_name, matches))
    }

    fn write_report(&self, report: &FileReport) -> Result<()> {
        let path = self.config.report_path(&report.file_name);
        let write_err = |source: std::io::Error| ScanError::Write {
            path: path.clone(),
            source,
        };

        let file = File::create(&path).map_err(write_err)?;
        report.write_text(file).map_err(write_err)?;
        info!(
            "{}: {} match(es) -> {}",
            report.file_name,
            report.matches.len(),
            path.display()
        );
        Ok(())
    }
}

/// Scan `input_dir` with the default 400..=500 length range and write all
/// reports into `output_dir`.
pub fn process_folder<I, O>(
    input_dir: I,
    output_dir: O,
    start_marker: &str,
    stop_marker: &str,
) -> Result<()>
where
    I: AsRef<Path>,
    O: AsRef<Path>,
{
    let config = ScanConfig::new(
        input_dir.as_ref(),
        output_dir.as_ref(),
        start_marker,
        stop_marker,
    );
    ScanCommand::new(config).run().map(|_| ())
}

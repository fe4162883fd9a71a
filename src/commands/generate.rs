//! Generate synthetic sequence files for trying out the scanner.
//!
//! Each file is a random `ACGT` background with planted segments that start
//! with the start marker and end with the stop marker. Output is wrapped at a
//! fixed line width, like FASTA bodies, so the loader's whitespace stripping
//! is exercised. Runs are reproducible for a given seed.

use crate::sequence::{Result, ScanError};
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const BASES: [u8; 4] = *b"ACGT";

/// Configuration for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub output_dir: PathBuf,
    /// Number of files to write
    pub files: usize,
    /// Background length per file, excluding planted segments
    pub length: usize,
    /// Planted segments per file
    pub planted: usize,
    pub start_marker: String,
    pub stop_marker: String,
    /// Minimum planted segment length, markers included
    pub segment_min: usize,
    /// Maximum planted segment length, markers included
    pub segment_max: usize,
    /// Characters per line; 0 writes a single line
    pub line_width: usize,
    pub seed: u64,
    pub force: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("input_dna"),
            files: 3,
            length: 5_000,
            planted: 2,
            start_marker: "ATG".to_string(),
            stop_marker: "TAA".to_string(),
            segment_min: 400,
            segment_max: 500,
            line_width: 60,
            seed: 42,
            force: false,
        }
    }
}

/// Statistics from generate operation.
#[derive(Debug, Default, Clone)]
pub struct GenerateStats {
    pub total_files: usize,
    pub skipped_files: usize,
    pub total_bases: u64,
    pub elapsed_secs: f64,
}

impl std::fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} bases in {} files, {} skipped ({:.1}s)",
            self.total_bases, self.total_files, self.skipped_files, self.elapsed_secs
        )
    }
}

/// Generate command.
pub struct GenerateCommand {
    config: GenerateConfig,
}

impl GenerateCommand {
    /// Create a new generate command with the given config.
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    fn validate(&self) -> Result<()> {
        let c = &self.config;
        if c.segment_min > c.segment_max {
            return Err(ScanError::InvalidArgument(format!(
                "segment min ({}) > segment max ({})",
                c.segment_min, c.segment_max
            )));
        }
        let markers = c.start_marker.len() + c.stop_marker.len();
        if c.planted > 0 && c.segment_max < markers {
            return Err(ScanError::InvalidArgument(format!(
                "segment max ({}) is shorter than the markers ({})",
                c.segment_max, markers
            )));
        }
        Ok(())
    }

    /// Run the generation.
    pub fn run(&self) -> Result<GenerateStats> {
        self.validate()?;
        let start = Instant::now();
        let mut stats = GenerateStats::default();

        fs::create_dir_all(&self.config.output_dir).map_err(|source| ScanError::Write {
            path: self.config.output_dir.clone(),
            source,
        })?;

        let width = self.config.files.to_string().len().max(3);
        for index in 1..=self.config.files {
            let path = self
                .config
                .output_dir
                .join(format!("sequence_{:0width$}.txt", index, width = width));

            if !self.config.force && path.exists() {
                info!("Skipping {} (exists, use --force to overwrite)", path.display());
                stats.skipped_files += 1;
                continue;
            }

            // Seeded per file index
            let mut rng = SmallRng::seed_from_u64(self.config.seed.wrapping_add(index as u64));
            let sequence = self.generate_sequence(&mut rng);
            self.write_file(&path, &sequence)?;

            info!("Saved {} ({} bases)", path.display(), sequence.len());
            stats.total_files += 1;
            stats.total_bases += sequence.len() as u64;
        }

        stats.elapsed_secs = start.elapsed().as_secs_f64();
        Ok(stats)
    }

    /// Build one sequence: background split into gaps around planted segments.
    pub fn generate_sequence(&self, rng: &mut SmallRng) -> Vec<u8> {
        let c = &self.config;

        let segments: Vec<Vec<u8>> = (0..c.planted).map(|_| self.planted_segment(rng)).collect();

        let mut cuts: Vec<usize> = (0..c.planted).map(|_| rng.gen_range(0..=c.length)).collect();
        cuts.sort_unstable();

        let total = c.length + segments.iter().map(Vec::len).sum::<usize>();
        let mut sequence = Vec::with_capacity(total);
        let mut previous = 0;
        for (cut, segment) in cuts.iter().zip(&segments) {
            random_bases(rng, cut - previous, &mut sequence);
            sequence.extend_from_slice(segment);
            previous = *cut;
        }
        random_bases(rng, c.length - previous, &mut sequence);

        sequence
    }

    fn planted_segment(&self, rng: &mut SmallRng) -> Vec<u8> {
        let c = &self.config;
        let markers = c.start_marker.len() + c.stop_marker.len();
        let length = rng.gen_range(c.segment_min.max(markers)..=c.segment_max);

        let mut segment = Vec::with_capacity(length);
        segment.extend_from_slice(c.start_marker.as_bytes());
        random_bases(rng, length - markers, &mut segment);
        segment.extend_from_slice(c.stop_marker.as_bytes());
        segment
    }

    fn write_file(&self, path: &Path, sequence: &[u8]) -> Result<()> {
        let write_err = |source: std::io::Error| ScanError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
        if self.config.line_width == 0 {
            writer.write_all(sequence).map_err(write_err)?;
            writer.write_all(b"\n").map_err(write_err)?;
        } else {
            for line in sequence.chunks(self.config.line_width) {
                writer.write_all(line).map_err(write_err)?;
                writer.write_all(b"\n").map_err(write_err)?;
            }
        }
        writer.flush().map_err(write_err)
    }
}

#[inline]
fn random_bases(rng: &mut SmallRng, count: usize, out: &mut Vec<u8>) {
    out.extend((0..count).map(|_| BASES[rng.gen_range(0..BASES.len())]));
}

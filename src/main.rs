//! dnascan: marker-delimited sequence scanner
//!
//! Usage: dnascan <COMMAND> [OPTIONS]

use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use dnascan::commands::{FindCommand, GenerateCommand, GenerateConfig, ScanCommand};
use dnascan::config::{ScanConfig, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use dnascan::report::DocumentFormat;
use dnascan::ScanError;

#[derive(Parser)]
#[command(name = "dnascan")]
#[command(version)]
#[command(about = "dnascan: find marker-delimited spans in sequence files and report them", long_about = None)]
struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan every sequence file in a directory and write reports
    Scan {
        /// Directory of input sequence files
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
        input: PathBuf,

        /// Directory for per-file reports and the consolidated document
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Start marker (span begins with it)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        start: String,

        /// Stop marker (span ends with it)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        stop: String,

        /// Minimum span length, inclusive
        #[arg(long, default_value = "400")]
        min_length: usize,

        /// Maximum span length, inclusive
        #[arg(long, default_value = "500")]
        max_length: usize,

        /// Input file extension
        #[arg(long, default_value = ".txt")]
        extension: String,

        /// Consolidated document format (html, markdown)
        #[arg(long, default_value = "html")]
        format: String,

        /// Print scan statistics to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Scan a single sequence file and print its report
    Find {
        /// Input sequence file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Start marker (span begins with it)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        start: String,

        /// Stop marker (span ends with it)
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        stop: String,

        /// Minimum span length, inclusive
        #[arg(long, default_value = "400")]
        min_length: usize,

        /// Maximum span length, inclusive
        #[arg(long, default_value = "500")]
        max_length: usize,
    },

    /// Generate synthetic sequence files
    Generate {
        /// Output directory
        #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
        output: PathBuf,

        /// Number of files
        #[arg(short = 'n', long, default_value = "3")]
        files: usize,

        /// Background bases per file
        #[arg(short, long, default_value = "5000")]
        length: usize,

        /// Planted segments per file
        #[arg(long, default_value = "2")]
        planted: usize,

        /// Start marker of planted segments
        #[arg(long, default_value = "ATG")]
        start: String,

        /// Stop marker of planted segments
        #[arg(long, default_value = "TAA")]
        stop: String,

        /// Minimum planted segment length
        #[arg(long, default_value = "400")]
        segment_min: usize,

        /// Maximum planted segment length
        #[arg(long, default_value = "500")]
        segment_max: usize,

        /// Characters per line (0 for a single line)
        #[arg(long, default_value = "60")]
        line_width: usize,

        /// Random seed for reproducibility
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn setup_logging(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.format(|buf, record| {
        use chrono::Local;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });
    builder.target(env_logger::Target::Stderr);
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.log_level);

    let result = match cli.command {
        Commands::Scan {
            input,
            output,
            start,
            stop,
            min_length,
            max_length,
            extension,
            format,
            stats,
        } => run_scan(
            input, output, start, stop, min_length, max_length, extension, format, stats,
        ),

        Commands::Find {
            input,
            start,
            stop,
            min_length,
            max_length,
        } => run_find(input, start, stop, min_length, max_length),

        Commands::Generate {
            output,
            files,
            length,
            planted,
            start,
            stop,
            segment_min,
            segment_max,
            line_width,
            seed,
            force,
        } => run_generate(GenerateConfig {
            output_dir: output,
            files,
            length,
            planted,
            start_marker: start,
            stop_marker: stop,
            segment_min,
            segment_max,
            line_width,
            seed,
            force,
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn run_scan(
    input: PathBuf,
    output: PathBuf,
    start: String,
    stop: String,
    min_length: usize,
    max_length: usize,
    extension: String,
    format: String,
    stats: bool,
) -> Result<(), ScanError> {
    let format = DocumentFormat::parse(&format).ok_or_else(|| {
        ScanError::InvalidArgument(format!(
            "Invalid format '{}'. Use: html, markdown",
            format
        ))
    })?;

    let config = ScanConfig::new(input, output, &start, &stop)
        .with_length_range(min_length, max_length)
        .with_extension(&extension)
        .with_document_format(format);

    let result = ScanCommand::new(config).run()?;

    if stats {
        eprintln!("Scan stats: {}", result);
    }

    Ok(())
}

fn run_find(
    input: Option<PathBuf>,
    start: String,
    stop: String,
    min_length: usize,
    max_length: usize,
) -> Result<(), ScanError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let cmd = FindCommand::new(&start, &stop).with_length_range(min_length, max_length);
    match input {
        Some(path) if path.as_os_str() != "-" => cmd.run(&path, &mut handle)?,
        _ => cmd.run_stdin(&mut handle)?,
    };

    Ok(())
}

fn run_generate(config: GenerateConfig) -> Result<(), ScanError> {
    let stats = GenerateCommand::new(config).run()?;
    eprintln!("Complete: {}", stats);
    Ok(())
}

//! Batch scan integration tests.
//!
//! Each test builds an input directory under a TempDir, runs the scan through
//! the library entry points and inspects the written artifacts.

use dnascan::commands::{process_folder, ScanCommand};
use dnascan::config::ScanConfig;
use dnascan::report::DocumentFormat;
use dnascan::ScanError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Helper functions
// =============================================================================

fn write_input(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// 406-character span wrapped over several lines, followed by unused bases.
fn wrapped_match_file() -> String {
    let span = format!("AAA{}BBB", "X".repeat(400));
    let mut out = String::new();
    for chunk in span.as_bytes().chunks(60) {
        out.push_str(std::str::from_utf8(chunk).unwrap());
        out.push('\n');
    }
    out.push_str("ZZZ\n");
    out
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn test_file_without_start_marker_gets_placeholder() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(input.path(), "plain.txt", "CCCCGGGGTTTT\n");

    let config = ScanConfig::new(input.path(), output.path(), "AAA", "BBB")
        .with_document_format(DocumentFormat::Markdown);
    ScanCommand::new(config).run().unwrap();

    assert_eq!(
        read(&output.path().join("result_plain.txt")),
        "No qualifying sequence found.\n"
    );
    assert_eq!(
        read(&output.path().join("DNA_Analysis_Results.md")),
        "# DNA Analysis Results\n\n## File: plain.txt\n\nNo qualifying sequence found.\n\n"
    );
}

#[test]
fn test_wrapped_sequence_matches_with_default_bounds() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(input.path(), "sample.txt", &wrapped_match_file());

    process_folder(input.path(), output.path(), "AAA", "BBB").unwrap();

    let report = read(&output.path().join("result_sample.txt"));
    let expected = format!(
        "Result 1:\nSequence length: 406\nSequence:\nAAA{}BBB\n\n",
        "X".repeat(400)
    );
    assert_eq!(report, expected);

    let html = read(&output.path().join("DNA_Analysis_Results.html"));
    assert!(html.contains("<h1>DNA Analysis Results</h1>"));
    assert!(html.contains("<h2>File: sample.txt</h2>"));
    assert!(html.contains("<p>Result 1:</p>"));
    assert!(html.contains("<p>Sequence length: 406</p>"));
    assert!(html.contains(&format!("<p>Sequence: AAA{}BBB</p>", "X".repeat(400))));
}

#[test]
fn test_markdown_document_lists_every_match() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(input.path(), "pair.txt", "AAABBB AAABBB\n");

    let config = ScanConfig::new(input.path(), output.path(), "AAA", "BBB")
        .with_length_range(0, 10)
        .with_document_format(DocumentFormat::Markdown);
    let stats = ScanCommand::new(config).run().unwrap();
    assert_eq!(stats.total_matches, 2);

    let doc = read(&output.path().join("DNA_Analysis_Results.md"));
    assert_eq!(
        doc,
        "# DNA Analysis Results\n\n## File: pair.txt\n\n\
         Result 1:\n\nSequence length: 6\n\nSequence: AAABBB\n\n\
         Result 2:\n\nSequence length: 6\n\nSequence: AAABBB\n\n"
    );
}

// =============================================================================
// Discovery and ordering
// =============================================================================

#[test]
fn test_sections_follow_sorted_file_names() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    for name in ["c.txt", "a.txt", "b.txt"] {
        write_input(input.path(), name, "ACGT");
    }

    let config = ScanConfig::new(input.path(), output.path(), "AAA", "BBB")
        .with_document_format(DocumentFormat::Markdown);
    ScanCommand::new(config).run().unwrap();

    let doc = read(&output.path().join("DNA_Analysis_Results.md"));
    let a = doc.find("## File: a.txt").unwrap();
    let b = doc.find("## File: b.txt").unwrap();
    let c = doc.find("## File: c.txt").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn test_only_matching_extension_is_scanned() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(input.path(), "keep.txt", "AAABBB");
    write_input(input.path(), "skip.fa", "AAABBB");

    let config = ScanConfig::new(input.path(), output.path(), "AAA", "BBB")
        .with_length_range(0, 10);
    let stats = ScanCommand::new(config).run().unwrap();

    assert_eq!(stats.files_scanned, 1);
    assert!(output.path().join("result_keep.txt").exists());
    assert!(!output.path().join("result_skip.fa").exists());
}

#[test]
fn test_custom_extension() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(input.path(), "reads.seq", "AAABBB");

    let config = ScanConfig::new(input.path(), output.path(), "AAA", "BBB")
        .with_length_range(0, 10)
        .with_extension("seq");
    let stats = ScanCommand::new(config).run().unwrap();

    assert_eq!(stats.files_scanned, 1);
    assert!(output.path().join("result_reads.seq").exists());
}

#[test]
fn test_empty_input_dir_still_writes_document() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let config = ScanConfig::new(input.path(), output.path(), "AAA", "BBB")
        .with_document_format(DocumentFormat::Markdown);
    let stats = ScanCommand::new(config).run().unwrap();

    assert_eq!(stats.files_scanned, 0);
    assert_eq!(
        read(&output.path().join("DNA_Analysis_Results.md")),
        "# DNA Analysis Results\n\n"
    );
}

// =============================================================================
// Output directory handling
// =============================================================================

#[test]
fn test_nested_output_dir_is_created() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    let nested = output.path().join("runs").join("today");
    write_input(input.path(), "a.txt", "ACGT");

    process_folder(input.path(), &nested, "AAA", "BBB").unwrap();

    assert!(nested.join("result_a.txt").exists());
    assert!(nested.join("DNA_Analysis_Results.html").exists());
}

#[test]
fn test_rerun_overwrites_outputs() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(input.path(), "a.txt", "AAABBB");

    let config = ScanConfig::new(input.path(), output.path(), "AAA", "BBB")
        .with_length_range(0, 10);
    ScanCommand::new(config.clone()).run().unwrap();

    write_input(input.path(), "a.txt", "CCCC");
    ScanCommand::new(config).run().unwrap();

    assert_eq!(
        read(&output.path().join("result_a.txt")),
        "No qualifying sequence found.\n"
    );
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_missing_input_dir_fails() {
    let root = TempDir::new().unwrap();
    let err = process_folder(root.path().join("absent"), root.path().join("out"), "A", "B")
        .unwrap_err();
    assert!(matches!(err, ScanError::MissingInput(_)));
}

#[test]
fn test_unreadable_file_aborts_batch() {
    let input = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_input(input.path(), "a.txt", "AAABBB");
    fs::write(input.path().join("b.txt"), [0xff, 0xfe, 0x00]).unwrap();

    let config = ScanConfig::new(input.path(), output.path(), "AAA", "BBB");
    let err = ScanCommand::new(config).run().unwrap_err();

    match err {
        ScanError::Read { path, .. } => assert!(path.ends_with("b.txt")),
        other => panic!("unexpected error: {other}"),
    }
    // No consolidated document after an aborted run
    assert!(!output.path().join("DNA_Analysis_Results.html").exists());
}

#[test]
fn test_output_path_is_a_file_fails() {
    let input = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    let blocker = root.path().join("out");
    fs::write(&blocker, "not a directory").unwrap();

    let err = process_folder(input.path(), &blocker, "AAA", "BBB").unwrap_err();
    assert!(matches!(err, ScanError::Write { .. }));
}

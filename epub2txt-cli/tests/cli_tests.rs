//! Integration tests for the epub2txt CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

const CONTAINER: &str = r#"<container><rootfiles><rootfile full-path="OEBPS/content.opf"/></rootfiles></container>"#;

const PACKAGE: &str = r#"<package>
  <manifest>
    <item id="ch1" href="chap1.xhtml" media-type="application/xhtml+xml"/>
    <item id="ch2" href="chap2.xhtml" media-type="application/xhtml+xml"/>
  </manifest>
  <spine><itemref idref="ch1"/><itemref idref="ch2"/></spine>
</package>"#;

/// Create an EPUB file for testing
fn create_test_epub(dir: &TempDir, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join(name);
    let mut writer = zip::ZipWriter::new(fs::File::create(&path).expect("Failed to create test file"));
    for (entry, content) in entries {
        writer.start_file(*entry, SimpleFileOptions::default()).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

fn hello_world_epub(dir: &TempDir) -> PathBuf {
    create_test_epub(
        dir,
        "hello.epub",
        &[
            ("META-INF/container.xml", CONTAINER),
            ("OEBPS/content.opf", PACKAGE),
            ("OEBPS/chap1.xhtml", "<p>Hello</p>"),
            ("OEBPS/chap2.xhtml", "<p>World</p>"),
        ],
    )
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--input"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("epub2txt"));
}

#[test]
fn test_missing_input_prints_usage() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.current_dir(temp_dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: input file is required"))
        .stdout(predicate::str::contains("Usage:"));

    // Nothing was written
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_convert_with_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = hello_world_epub(&temp_dir);
    let output = temp_dir.path().join("result.txt");

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.args([
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Converting"))
    .stdout(predicate::str::contains("Conversion completed successfully"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "Hello\n\nWorld");
}

#[test]
fn test_convert_default_output_in_current_dir() {
    let temp_dir = TempDir::new().unwrap();
    let input = hello_world_epub(&temp_dir);
    let work_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.current_dir(work_dir.path())
        .args(["-i", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello.txt"));

    let output = work_dir.path().join("hello.txt");
    assert_eq!(fs::read_to_string(output).unwrap(), "Hello\n\nWorld");
}

#[test]
fn test_missing_chapter_warns_but_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_epub(
        &temp_dir,
        "partial.epub",
        &[
            ("META-INF/container.xml", CONTAINER),
            ("OEBPS/content.opf", PACKAGE),
            ("OEBPS/chap2.xhtml", "<p>World</p>"),
        ],
    );
    let output = temp_dir.path().join("partial.txt");

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: content file not found: OEBPS/chap1.xhtml",
        ));

    assert_eq!(fs::read_to_string(&output).unwrap(), "World");
}

#[test]
fn test_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.args([
        "--input",
        "/nonexistent/file.epub",
        "--output",
        output.to_str().unwrap(),
    ])
    .assert()
    .code(1)
    .stdout(predicate::str::contains("Error:"));

    assert!(!output.exists());
}

#[test]
fn test_missing_container_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_epub(&temp_dir, "broken.epub", &[("OEBPS/content.opf", PACKAGE)]);
    let output = temp_dir.path().join("broken.txt");

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("container.xml"));

    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = hello_world_epub(&temp_dir);
    let output = temp_dir.path().join("no-such-dir").join("out.txt");

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("failed to write output file"));
}

#[test]
fn test_warnings_print_before_output_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_epub(
        &temp_dir,
        "partial.epub",
        &[
            ("META-INF/container.xml", CONTAINER),
            ("OEBPS/content.opf", PACKAGE),
            ("OEBPS/chap2.xhtml", "<p>World</p>"),
        ],
    );
    let output = temp_dir.path().join("no-such-dir").join("out.txt");

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    let assert = cmd
        .args(["-i", input.to_str().unwrap(), "-o", output.to_str().unwrap()])
        .assert()
        .code(1);

    // The warning is emitted during extraction, so it appears even though the write fails
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let warning = stdout
        .find("Warning: content file not found: OEBPS/chap1.xhtml")
        .expect("warning line");
    let error = stdout.find("failed to write output file").expect("error line");
    assert!(warning < error);
}

#[test]
fn test_verbose_flag() {
    let temp_dir = TempDir::new().unwrap();
    let input = hello_world_epub(&temp_dir);
    let output = temp_dir.path().join("verbose.txt");

    let mut cmd = Command::cargo_bin("epub2txt-cli").unwrap();
    cmd.args([
        "--verbose",
        "-i",
        input.to_str().unwrap(),
        "-o",
        output.to_str().unwrap(),
    ])
    .assert()
    .success();
}

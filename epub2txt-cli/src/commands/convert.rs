//! Convert command implementation

use anyhow::{Context, Result};
use epub2txt_core::Pipeline;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Convert an EPUB file to plain text
pub fn convert(input: &str, output: Option<&str>) -> Result<()> {
    let output_path = match output {
        Some(output) => PathBuf::from(output),
        None => default_output_path(input)?,
    };

    println!("Converting {} to {}", input, output_path.display());

    // Set up spinner; hidden automatically when stderr is not a terminal
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Extracting text...");

    let result = Pipeline::new().convert_file_with(input, &output_path, |skipped| {
        pb.suspend(|| println!("Warning: {}", skipped));
    });
    pb.finish_and_clear();

    let report = result.with_context(|| format!("failed to convert {}", input))?;

    tracing::info!(
        "Wrote {} bytes from {} documents to {}",
        report.output_bytes,
        report.documents,
        output_path.display()
    );

    println!("Conversion completed successfully");

    Ok(())
}

/// Input's base filename with its extension replaced by `.txt`, relative to
/// the current directory
pub fn default_output_path(input: &str) -> Result<PathBuf> {
    let stem = Path::new(input)
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Could not determine output filename from input")?;

    Ok(PathBuf::from(format!("{}.txt", stem)))
}

pub mod output;

pub use output::{create_writer, CompareReport, OutputFormat, ReportWriter, ScoreReport};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

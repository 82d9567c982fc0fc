pub mod output;

pub use output::{
    create_writer, BreakdownReport, DashboardReport, JsonWriter, MarkdownWriter, OutputFormat,
    OutputWriter, ReportRow, TerminalWriter,
};

use anyhow::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Writer for report output: the given file, or stdout when `None`
pub fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(fs::File::create(path)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}

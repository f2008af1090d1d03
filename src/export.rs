//! Output optimization and delivery
//!
//! The renderer produces readable, indented markup; this module shrinks it
//! for the exported artifact and writes it where it needs to go. Export
//! failures never touch the parsed tree or the rendered result, so a failed
//! export is safe to retry.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

/// Errors that can occur while delivering an exported document
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write output: {0}")]
    IoError(#[from] std::io::Error),
}

/// Minify an SVG document by collapsing the whitespace pretty-printing adds.
///
/// Indentation and newlines between tags carry no meaning in SVG; text
/// content never spans lines in our output, so line-trimming is safe.
/// Idempotent: optimizing an already-optimized document is a no-op.
pub fn optimize(svg: &str) -> String {
    svg.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Write an exported document to a file
pub fn write_file(svg: &str, path: &Path) -> Result<(), ExportError> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(svg.as_bytes())?;
    Ok(())
}

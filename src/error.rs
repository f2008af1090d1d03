//! Error types for parsing and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParseError {
    /// The input is not valid JSON, or does not deserialize into the tree
    /// schema (unknown `type` tag, wrong field types, missing `name`).
    #[error("invalid tree JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        span: Span,
        message: String,
    },

    /// The root entry is a file; a tree always hangs off a folder.
    #[error("the root entry must be a folder, found file '{name}'")]
    RootNotFolder { name: String },

    /// An entry has an empty name and would render as a blank row.
    #[error("a {kind} entry has an empty name")]
    EmptyName { kind: &'static str },
}

impl ParseError {
    /// Build a [`ParseError::Json`] from a serde_json error, mapping its
    /// line/column position to a byte span in `source`.
    pub fn from_json(err: &serde_json::Error, source: &str) -> Self {
        let line = err.line();
        let column = err.column();
        let start = byte_offset(source, line, column).min(source.len());
        // Span one character when possible, so the label has something to
        // point at; at end of input this collapses to an empty span.
        let end = source[start..]
            .chars()
            .next()
            .map(|c| start + c.len_utf8())
            .unwrap_or(start);
        ParseError::Json {
            line,
            column,
            span: start..end,
            message: err.to_string(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            ParseError::Json { span, message, .. } => {
                let mut buf = Vec::new();
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message("invalid tree JSON")
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(message)
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
                String::from_utf8(buf).unwrap()
            }
            other => other.to_string(),
        }
    }
}

/// Translate a 1-based line/column position into a byte offset.
///
/// serde_json reports columns in characters; clamp to the line length so a
/// position just past the end of truncated input still yields a valid span.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (index, text) in source.split('\n').enumerate() {
        if index + 1 == line {
            let col = column.saturating_sub(1);
            return offset
                + text
                    .char_indices()
                    .nth(col)
                    .map(|(byte, _)| byte)
                    .unwrap_or(text.len());
        }
        offset += text.len() + 1;
    }
    source.len()
}

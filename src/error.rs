//! Error types for reading resume records

use ariadne::{Color, Label, Report, ReportKind, Source};
use serde_json::error::Category;
use thiserror::Error;

/// Errors raised while turning JSON text into a [`ResumeRecord`](crate::ResumeRecord)
#[derive(Error, Debug)]
pub enum RecordError {
    /// The input is not well-formed JSON (or ends early)
    #[error("malformed JSON at line {line}, column {column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// The JSON is well-formed but does not describe a resume, e.g. `basics.name` is missing
    #[error("invalid resume at line {line}, column {column}: {message}")]
    Invalid {
        line: usize,
        column: usize,
        message: String,
    },

    /// Reading from the underlying reader failed
    #[error("failed to read resume data: {0}")]
    Io(String),
}

impl RecordError {
    /// 1-based line and column of the error, if known
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            RecordError::Syntax { line, column, .. } | RecordError::Invalid { line, column, .. } => {
                Some((*line, *column))
            }
            RecordError::Io(_) => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (line, column) = match self.location() {
            Some(location) => location,
            None => return self.to_string(),
        };
        let message = match self {
            RecordError::Syntax { message, .. } | RecordError::Invalid { message, .. } => message,
            RecordError::Io(message) => message,
        };

        let start = char_offset(source, line, column);
        let end = (start + 1).min(source.chars().count()).max(start);

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        if written.is_err() {
            return self.to_string();
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Classify a `serde_json` error raised while reading `source`
    ///
    /// serde_json counts columns in bytes; the stored column counts characters
    /// so it lines up with the text as displayed.
    pub fn from_json(err: serde_json::Error, source: &str) -> Self {
        let line = err.line();
        let column = char_column(source, line, err.column());
        // serde_json appends " at line X column Y" to its Display output
        let message = strip_location(&err.to_string());

        match err.classify() {
            Category::Syntax | Category::Eof => RecordError::Syntax {
                line,
                column,
                message,
            },
            Category::Data => RecordError::Invalid {
                line,
                column,
                message,
            },
            Category::Io => RecordError::Io(message),
        }
    }
}

fn strip_location(message: &str) -> String {
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message.to_string(),
    }
}

/// Convert a 1-based byte column on `line` into a 1-based character column
fn char_column(source: &str, line: usize, byte_column: usize) -> usize {
    if byte_column == 0 {
        return 0;
    }
    let text = match source.split_inclusive('\n').nth(line.saturating_sub(1)) {
        Some(text) => text,
        None => return byte_column,
    };
    let mut end = (byte_column - 1).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text[..end].chars().count() + 1
}

/// Convert a 1-based line/character column pair into a character offset into `source`
fn char_offset(source: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (idx, text) in source.split_inclusive('\n').enumerate() {
        if idx + 1 == line {
            return offset + text.chars().take(column.saturating_sub(1)).count();
        }
        offset += text.chars().count();
    }
    offset
}

//! Resume Renderer - turn a JSON resume into a static HTML page
//!
//! This library parses a resume record, renders it to HTML with a caller
//! supplied stylesheet embedded verbatim, and writes the result to disk.
//!
//! # Example
//!
//! ```rust
//! use resume_renderer::render;
//!
//! let html = render(r#"{"basics": {"name": "Ada Lovelace"}}"#).unwrap();
//! assert!(html.contains("<h1>Ada Lovelace</h1>"));
//! ```

pub mod date;
pub mod error;
pub mod output;
pub mod record;
pub mod renderer;
pub mod stylesheet;

pub use error::RecordError;
pub use record::{parse, ResumeRecord};
pub use renderer::{
    render_html, render_html_with_config, ContactStyle, EducationDates, HtmlConfig,
};

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

// Re-export Stylesheet for public API
pub use stylesheet::Stylesheet;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The resume data could not be read
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Errors from [`generate`], carrying the file involved
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to read resume data '{}': {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read stylesheet '{}': {source}", path.display())]
    ReadStylesheet {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to render '{}': {source}", path.display())]
    Render {
        path: PathBuf,
        /// The JSON text that failed, kept for diagnostics
        input: String,
        source: RenderError,
    },

    #[error("failed to write '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Human-readable report for stderr; JSON problems include a source excerpt
    pub fn report(&self) -> String {
        match self {
            GenerateError::Render {
                path,
                input,
                source: RenderError::Record(err),
            } => err.format(input, &path.display().to_string()),
            other => format!("Error: {other}"),
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// HTML output configuration
    pub html: HtmlConfig,
    /// Stylesheet embedded in the document
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTML configuration
    pub fn with_html(mut self, config: HtmlConfig) -> Self {
        self.html = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render JSON resume data to HTML with default configuration and no stylesheet
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render JSON resume data to HTML with custom configuration
///
/// # Example
///
/// ```rust
/// use resume_renderer::{render_with_config, ContactStyle, HtmlConfig, RenderConfig, Stylesheet};
///
/// let config = RenderConfig::new()
///     .with_stylesheet(Stylesheet::new("h1 { font-size: 20pt; }"))
///     .with_html(HtmlConfig::new().with_contact_style(ContactStyle::Inline));
///
/// let html = render_with_config(
///     r#"{"basics": {"name": "Ada", "email": "a@x.com", "website": "ada.dev"}}"#,
///     &config,
/// )
/// .unwrap();
/// assert!(html.contains("h1 { font-size: 20pt; }"));
/// assert!(html.contains("<p>a@x.com ⋄ ada.dev</p>"));
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let record = parse(source)?;

    if !config.stylesheet.is_empty() {
        let unstyled = config.stylesheet.unstyled_classes();
        if !unstyled.is_empty() {
            debug!(classes = ?unstyled, "stylesheet does not target some classes");
        }
    }

    Ok(render_html_with_config(
        &record,
        &config.stylesheet,
        &config.html,
    ))
}

/// Read a resume and a stylesheet, render, and write the HTML document
///
/// Both inputs are read in full before rendering, and the output is written
/// once at the end, so a failure at any step leaves `output` untouched.
pub fn generate(
    input: &Path,
    stylesheet: &Path,
    output: &Path,
    config: &HtmlConfig,
) -> Result<(), GenerateError> {
    let json = std::fs::read_to_string(input).map_err(|source| GenerateError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    let stylesheet =
        Stylesheet::from_file(stylesheet).map_err(|source| GenerateError::ReadStylesheet {
            path: stylesheet.to_path_buf(),
            source,
        })?;

    let config = RenderConfig::new()
        .with_html(config.clone())
        .with_stylesheet(stylesheet);
    let html = match render_with_config(&json, &config) {
        Ok(html) => html,
        Err(source) => {
            return Err(GenerateError::Render {
                path: input.to_path_buf(),
                input: json,
                source,
            })
        }
    };

    output::write_atomic(output, &html).map_err(|source| GenerateError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_minimal() {
        let html = render(r#"{"basics": {"name": "Ada"}}"#).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("<h1>Ada</h1>"));
    }

    #[test]
    fn test_render_end_to_end_example() {
        let html = render(
            r#"{"basics":{"name":"Ada Lovelace","email":"a@x.com"},"work":[{"company":"Acme","startDate":"2020-01-01","endDate":"Present","highlights":["Did X"]}]}"#,
        )
        .unwrap();
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("<p>a@x.com</p>"));
        assert_eq!(html.matches(r#"<div class="job">"#).count(), 1);
        assert!(html.contains(r#"<span class="job-date">January 2020 - Present</span>"#));
        assert_eq!(html.matches("<li>").count(), 1);
        assert!(html.contains("<li>Did X</li>"));
        assert!(!html.contains("PROJECTS"));
        assert!(!html.contains("EDUCATION"));
        assert!(!html.contains("SKILLS"));
    }

    #[test]
    fn test_render_with_stylesheet() {
        let config = RenderConfig::new().with_stylesheet(Stylesheet::new(".job { color: red; }"));
        let html = render_with_config(r#"{"basics": {"name": "Ada"}}"#, &config).unwrap();
        assert!(html.contains(".job { color: red; }"));
    }

    #[test]
    fn test_render_missing_name_error() {
        let result = render(r#"{"basics": {}}"#);
        assert!(matches!(
            result,
            Err(RenderError::Record(RecordError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_render_malformed_json_error() {
        let result = render("{");
        assert!(matches!(
            result,
            Err(RenderError::Record(RecordError::Syntax { .. }))
        ));
    }

    #[test]
    fn test_generate_error_report_has_excerpt() {
        let err = GenerateError::Render {
            path: PathBuf::from("resume.json"),
            input: "{\n  \"basics\": 3\n}".to_string(),
            source: RenderError::Record(
                parse("{\n  \"basics\": 3\n}").unwrap_err(),
            ),
        };
        let report = err.report();
        assert!(report.contains("resume.json"));
        assert!(report.contains("invalid resume"));
    }
}

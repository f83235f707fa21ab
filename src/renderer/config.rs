//! Configuration for HTML rendering

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// How email, GitHub and website are laid out in the contact block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStyle {
    /// Email and GitHub on one line, website on its own line
    #[default]
    Split,
    /// Email, website and GitHub on a single line
    Inline,
}

/// What the `edu-date` slot shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EducationDates {
    /// The `graduationYear` field as given
    #[default]
    GraduationYear,
    /// Formatted `startDate - endDate`
    Range,
}

/// Configuration options for HTML output
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HtmlConfig {
    pub document: DocumentOptions,
    pub contact: ContactOptions,
    pub education: EducationOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentOptions {
    /// Text of the `<title>` element
    pub title: String,
    /// Value of `<html lang>`
    pub lang: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            title: "Resume".to_string(),
            lang: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactOptions {
    pub style: ContactStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EducationOptions {
    pub dates: EducationDates,
}

impl HtmlConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the document title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.document.title = title.into();
        self
    }

    /// Set the document language
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.document.lang = lang.into();
        self
    }

    /// Set the contact line layout
    pub fn with_contact_style(mut self, style: ContactStyle) -> Self {
        self.contact.style = style;
        self
    }

    /// Set what the education date slot shows
    pub fn with_education_dates(mut self, dates: EducationDates) -> Self {
        self.education.dates = dates;
        self
    }
}

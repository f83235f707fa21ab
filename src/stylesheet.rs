//! Stylesheet embedded into the generated document
//!
//! The CSS is opaque text: it is never parsed or validated, only copied
//! verbatim into the `<style>` block. The class names it is expected to target
//! are listed in [`CSS_CLASSES`].

use std::path::Path;

/// Class names emitted by the renderer
pub const CSS_CLASSES: &[&str] = &[
    "contact-info",
    "job",
    "job-header",
    "job-company",
    "job-date",
    "job-title-row",
    "job-title",
    "job-location",
    "job-details",
    "project",
    "project-header",
    "project-name",
    "project-link",
    "project-details",
    "education",
    "edu-header",
    "edu-institution",
    "edu-date",
    "edu-degree",
    "skill",
    "skills-category",
];

/// Raw CSS text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    css: String,
}

impl Stylesheet {
    /// Wrap CSS text as-is
    pub fn new(css: impl Into<String>) -> Self {
        Self { css: css.into() }
    }

    /// Load stylesheet text from a file
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        std::fs::read_to_string(path).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.css
    }

    pub fn is_empty(&self) -> bool {
        self.css.is_empty()
    }

    /// Classes from [`CSS_CLASSES`] that the stylesheet never mentions
    ///
    /// A plain substring check on `.<class>`; good enough to flag a stylesheet
    /// written for a different renderer.
    pub fn unstyled_classes(&self) -> Vec<&'static str> {
        CSS_CLASSES
            .iter()
            .copied()
            .filter(|class| !self.mentions_class(class))
            .collect()
    }

    fn mentions_class(&self, class: &str) -> bool {
        let selector = format!(".{class}");
        self.css.match_indices(&selector).any(|(idx, _)| {
            // `.job` must not be satisfied by `.job-header`
            let next = self.css[idx + selector.len()..].chars().next();
            !matches!(next, Some(c) if c == '-' || c == '_' || c.is_alphanumeric())
        })
    }
}

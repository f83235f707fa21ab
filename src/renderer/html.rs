//! HTML document assembly

use tracing::debug;

use crate::record::ResumeRecord;
use crate::stylesheet::Stylesheet;

use super::contact::render_contact;
use super::sections::{render_education, render_projects, render_skills};
use super::work::render_experience;
use super::{HtmlBuilder, HtmlConfig};

/// Render a resume to an HTML document with default configuration
pub fn render_html(record: &ResumeRecord, stylesheet: &Stylesheet) -> String {
    render_html_with_config(record, stylesheet, &HtmlConfig::default())
}

/// Render a resume to an HTML document
///
/// Output is a pure function of its inputs. The stylesheet and every text
/// field are inserted verbatim; nothing is escaped.
pub fn render_html_with_config(
    record: &ResumeRecord,
    stylesheet: &Stylesheet,
    config: &HtmlConfig,
) -> String {
    let mut builder = HtmlBuilder::new();

    render_preamble(stylesheet, config, &mut builder);

    builder.open("body", None);
    builder.element("h1", None, &record.basics.name);
    render_contact(&record.basics, config.contact.style, &mut builder);
    render_experience(record.work(), &mut builder);

    if let Some(projects) = &record.projects {
        render_projects(projects, &mut builder);
    }
    if let Some(education) = &record.education {
        render_education(education, config.education.dates, &mut builder);
    }
    if let Some(skills) = &record.skills {
        render_skills(skills, &mut builder);
    }

    builder.close("body");
    builder.line("</html>");

    let html = builder.build();
    debug!(bytes = html.len(), "assembled document");
    html
}

fn render_preamble(stylesheet: &Stylesheet, config: &HtmlConfig, builder: &mut HtmlBuilder) {
    builder.line("<!DOCTYPE html>");
    builder.line(format!(r#"<html lang="{}">"#, config.document.lang));
    builder.open("head", None);
    builder.line(r#"<meta charset="UTF-8">"#);
    builder.line(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#);
    builder.element("title", None, &config.document.title);
    builder.open("style", None);
    builder.raw(stylesheet.as_str());
    builder.close("style");
    builder.close("head");
}

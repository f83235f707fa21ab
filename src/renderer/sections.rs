//! Optional sections: projects, education and skills
//!
//! Each renderer is only called when its key is present in the record.

use tracing::debug;

use crate::date::format_range;
use crate::record::{EducationEntry, ProjectEntry, SkillEntry};

use super::{EducationDates, HtmlBuilder};

pub fn render_projects(projects: &[ProjectEntry], builder: &mut HtmlBuilder) {
    builder.open("section", None);
    builder.element("h2", None, "PROJECTS");
    for project in projects {
        builder.open("div", Some("project"));
        builder.open("div", Some("project-header"));
        builder.span("project-name", project.name());
        if !project.url().is_empty() {
            builder.span("project-link", project.url());
        }
        builder.close("div");
        builder.list("project-details", project.highlights());
        builder.close("div");
    }
    builder.close("section");
    debug!(entries = projects.len(), "rendered projects section");
}

pub fn render_education(
    education: &[EducationEntry],
    dates: EducationDates,
    builder: &mut HtmlBuilder,
) {
    builder.open("section", None);
    builder.element("h2", None, "EDUCATION");
    for edu in education {
        let date = match dates {
            EducationDates::GraduationYear => edu.graduation_year().to_string(),
            EducationDates::Range => format_range(edu.start_date(), edu.end_date()),
        };
        builder.open("div", Some("education"));
        builder.open("div", Some("edu-header"));
        builder.span("edu-institution", edu.institution());
        builder.span("edu-date", &date);
        builder.close("div");
        builder.element(
            "div",
            Some("edu-degree"),
            &format!("{} in {}", edu.study_type(), edu.area()),
        );
        builder.close("div");
    }
    builder.close("section");
    debug!(entries = education.len(), "rendered education section");
}

pub fn render_skills(skills: &[SkillEntry], builder: &mut HtmlBuilder) {
    builder.open("section", None);
    builder.element("h2", None, "SKILLS");
    for skill in skills {
        builder.open("div", Some("skill"));
        builder.line(format!(
            r#"<span class="skills-category">{}:</span> {}"#,
            skill.name(),
            skill.keywords().join(", ")
        ));
        builder.close("div");
    }
    builder.close("section");
    debug!(entries = skills.len(), "rendered skills section");
}

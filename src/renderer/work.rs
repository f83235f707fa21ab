//! Experience section

use tracing::{debug, warn};

use crate::date::format_range;
use crate::record::{MultiPosition, SinglePosition, WorkEntry};

use super::HtmlBuilder;

/// Render the experience section
///
/// The section and its heading are always present, even with no entries.
pub fn render_experience(work: &[WorkEntry], builder: &mut HtmlBuilder) {
    builder.open("section", None);
    builder.element("h2", None, "EXPERIENCE");
    for entry in work {
        match entry {
            WorkEntry::Single(job) => render_single(job, builder),
            WorkEntry::Multi(job) => render_multi(job, builder),
        }
    }
    builder.close("section");
    debug!(entries = work.len(), "rendered experience section");
}

fn render_header(company: &str, dates: &str, builder: &mut HtmlBuilder) {
    builder.open("div", Some("job-header"));
    builder.span("job-company", company);
    builder.span("job-date", dates);
    builder.close("div");
}

fn render_title_row(title: &str, location: &str, builder: &mut HtmlBuilder) {
    builder.open("div", Some("job-title-row"));
    builder.span("job-title", title);
    builder.span("job-location", location);
    builder.close("div");
}

fn render_single(job: &SinglePosition, builder: &mut HtmlBuilder) {
    builder.open("div", Some("job"));
    render_header(
        &job.company,
        &format_range(job.start_date(), job.end_date()),
        builder,
    );
    render_title_row(job.position(), job.location(), builder);
    builder.list("job-details", job.highlights());
    builder.close("div");
}

fn render_multi(job: &MultiPosition, builder: &mut HtmlBuilder) {
    let company = job.company.as_deref().unwrap_or_default();
    if job.positions.is_empty() {
        warn!(company, "work entry has an empty positions list");
    }

    builder.open("div", Some("job"));
    render_header(company, &job.date_range().format(), builder);

    for (i, position) in job.positions.iter().enumerate() {
        let title = format!(
            "{} ({})",
            position.title(),
            format_range(position.start_date(), position.end_date())
        );
        // Location sits beside the first title only
        let location = if i == 0 { job.location() } else { "" };
        render_title_row(&title, location, builder);
        builder.list("job-details", position.highlights());
    }
    builder.close("div");
}

//! Resume record model and JSON loading

mod model;

pub use model::*;

use tracing::debug;

use crate::error::RecordError;

/// Parse JSON resume data into a [`ResumeRecord`]
///
/// Missing optional fields are not errors. Only a missing `basics`,
/// `basics.name` or single-position `company` is rejected.
pub fn parse(source: &str) -> Result<ResumeRecord, RecordError> {
    let record: ResumeRecord =
        serde_json::from_str(source).map_err(|e| RecordError::from_json(e, source))?;
    debug!(
        name = %record.basics.name,
        work = record.work().len(),
        projects = record.projects.as_ref().map(Vec::len),
        education = record.education.as_ref().map(Vec::len),
        skills = record.skills.as_ref().map(Vec::len),
        "parsed resume record"
    );
    Ok(record)
}

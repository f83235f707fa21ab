//! Typed resume record deserialized from JSON
//!
//! Optional fields are stored as `Option` and read through accessors that fall
//! back to an empty value, so rendering never has to deal with absence. A JSON
//! `null` is treated the same as a missing key.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::date::{self, DateRange};

/// Root of a resume document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResumeRecord {
    pub basics: Basics,
    #[serde(default)]
    pub work: Option<Vec<WorkEntry>>,
    #[serde(default)]
    pub projects: Option<Vec<ProjectEntry>>,
    #[serde(default)]
    pub education: Option<Vec<EducationEntry>>,
    #[serde(default)]
    pub skills: Option<Vec<SkillEntry>>,
}

impl ResumeRecord {
    /// Work history in input order (empty when `work` is absent)
    pub fn work(&self) -> &[WorkEntry] {
        self.work.as_deref().unwrap_or_default()
    }
}

/// Personal details and contact links
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Basics {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub profiles: Option<Vec<Profile>>,
}

impl Basics {
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn website(&self) -> &str {
        self.website.as_deref().unwrap_or_default()
    }

    /// The GitHub link to display
    ///
    /// An explicit non-empty `github` wins; otherwise the URL of the first
    /// profile whose network is "github" (any case) is used.
    pub fn resolved_github(&self) -> &str {
        match self.github.as_deref() {
            Some(github) if !github.is_empty() => github,
            _ => self
                .profiles
                .as_deref()
                .unwrap_or_default()
                .iter()
                .find(|p| p.network().to_lowercase() == "github")
                .map(Profile::url)
                .unwrap_or_default(),
        }
    }
}

/// An online profile such as GitHub or LinkedIn
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub network: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Profile {
    pub fn network(&self) -> &str {
        self.network.as_deref().unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}

/// One employer in the work history
///
/// The shape is decided once while parsing: an entry carrying a `positions`
/// list is [`WorkEntry::Multi`], anything else is [`WorkEntry::Single`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawWorkEntry")]
pub enum WorkEntry {
    Single(SinglePosition),
    Multi(MultiPosition),
}

impl WorkEntry {
    pub fn company(&self) -> &str {
        match self {
            WorkEntry::Single(job) => &job.company,
            WorkEntry::Multi(job) => job.company.as_deref().unwrap_or_default(),
        }
    }
}

/// A single role held at one company
#[derive(Debug, Clone, PartialEq)]
pub struct SinglePosition {
    pub company: String,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub highlights: Option<Vec<String>>,
}

impl SinglePosition {
    pub fn position(&self) -> &str {
        self.position.as_deref().unwrap_or_default()
    }

    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    pub fn start_date(&self) -> &str {
        self.start_date.as_deref().unwrap_or_default()
    }

    pub fn end_date(&self) -> &str {
        self.end_date.as_deref().unwrap_or_default()
    }

    pub fn highlights(&self) -> &[String] {
        self.highlights.as_deref().unwrap_or_default()
    }
}

/// Several roles held in sequence at one company
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPosition {
    pub company: Option<String>,
    pub location: Option<String>,
    pub positions: Vec<Position>,
}

impl MultiPosition {
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    /// Overall tenure spanning every position
    pub fn date_range(&self) -> DateRange<'_> {
        date::aggregate_range(
            self.positions
                .iter()
                .map(|p| (p.start_date(), p.end_date())),
        )
    }
}

/// A role within a [`MultiPosition`] entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
}

impl Position {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn start_date(&self) -> &str {
        self.start_date.as_deref().unwrap_or_default()
    }

    pub fn end_date(&self) -> &str {
        self.end_date.as_deref().unwrap_or_default()
    }

    pub fn highlights(&self) -> &[String] {
        self.highlights.as_deref().unwrap_or_default()
    }
}

/// Wire shape shared by both work entry variants
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWorkEntry {
    #[serde(default)]
    company: Option<String>,
    #[serde(default)]
    position: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    start_date: Option<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    highlights: Option<Vec<String>>,
    #[serde(default)]
    positions: Option<Vec<Position>>,
}

impl TryFrom<RawWorkEntry> for WorkEntry {
    type Error = String;

    fn try_from(raw: RawWorkEntry) -> Result<Self, Self::Error> {
        if let Some(positions) = raw.positions {
            return Ok(WorkEntry::Multi(MultiPosition {
                company: raw.company,
                location: raw.location,
                positions,
            }));
        }

        let company = raw
            .company
            .ok_or_else(|| "missing field `company`".to_string())?;
        Ok(WorkEntry::Single(SinglePosition {
            company,
            position: raw.position,
            location: raw.location,
            start_date: raw.start_date,
            end_date: raw.end_date,
            highlights: raw.highlights,
        }))
    }
}

/// A side project or open-source contribution
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub highlights: Option<Vec<String>>,
}

impl ProjectEntry {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    pub fn highlights(&self) -> &[String] {
        self.highlights.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub institution: Option<String>,
    /// Accepts `"2019"` as well as `2019`
    #[serde(default, deserialize_with = "string_or_number")]
    pub graduation_year: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub study_type: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
}

impl EducationEntry {
    pub fn institution(&self) -> &str {
        self.institution.as_deref().unwrap_or_default()
    }

    pub fn graduation_year(&self) -> &str {
        self.graduation_year.as_deref().unwrap_or_default()
    }

    pub fn start_date(&self) -> &str {
        self.start_date.as_deref().unwrap_or_default()
    }

    pub fn end_date(&self) -> &str {
        self.end_date.as_deref().unwrap_or_default()
    }

    pub fn study_type(&self) -> &str {
        self.study_type.as_deref().unwrap_or_default()
    }

    pub fn area(&self) -> &str {
        self.area.as_deref().unwrap_or_default()
    }
}

/// A skill category with its keywords
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl SkillEntry {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn keywords(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or_default()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Employment role as reported by the matching service.
/// Unknown values are kept verbatim so filters still match them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Senior,
    FullTime,
    Intern,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Senior => "Senior",
            Role::FullTime => "Full Time",
            Role::Intern => "Intern",
            Role::Other(s) => s,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Senior" => Role::Senior,
            "Full Time" => Role::FullTime,
            "Intern" => Role::Intern,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Senior,
    Other(String),
}

impl Proficiency {
    pub fn as_str(&self) -> &str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Senior => "Senior",
            Proficiency::Other(s) => s,
        }
    }
}

impl From<String> for Proficiency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Beginner" => Proficiency::Beginner,
            "Intermediate" => Proficiency::Intermediate,
            "Senior" => Proficiency::Senior,
            _ => Proficiency::Other(value),
        }
    }
}

impl From<Proficiency> for String {
    fn from(proficiency: Proficiency) -> Self {
        proficiency.as_str().to_string()
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scored employee-to-project pairing.
/// Percentages are passed through unvalidated; the service may send decimals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub employee_id: String,
    pub employee_name: String,
    pub project_id: String,
    pub project_title: String,
    pub role: Role,
    pub proficiency: Proficiency,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    pub capacity: f64,
    pub overall_score: f64,
    pub skill_match: f64,
    pub proficiency_match: f64,
    pub availability_match: f64,
    pub capacity_match: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_bonus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict_penalty: Option<f64>,
}

/// Project-level identifiers come straight from the uploaded sheet, so a
/// numeric `ID` column arrives as a JSON number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
    })
}

/// Wire shape of a project. Older payloads only carry `top_3`.
#[derive(Debug, Deserialize)]
struct RawProjectResult {
    #[serde(deserialize_with = "string_or_number")]
    project_id: String,
    #[serde(deserialize_with = "string_or_number")]
    project_title: String,
    #[serde(default)]
    project_domain: String,
    #[serde(default)]
    project_duration: f64,
    #[serde(default)]
    project_deadline: String,
    #[serde(default)]
    matches: Vec<MatchResult>,
    #[serde(default)]
    intelligent_team: Option<Vec<MatchResult>>,
    #[serde(default)]
    top_3: Option<Vec<MatchResult>>,
}

/// One project's matching outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RawProjectResult")]
pub struct ProjectResult {
    pub project_id: String,
    pub project_title: String,
    pub project_domain: String,
    /// Weeks.
    pub project_duration: f64,
    pub project_deadline: String,
    pub matches: Vec<MatchResult>,
    #[serde(rename = "intelligent_team")]
    pub curated_team: Vec<MatchResult>,
}

impl From<RawProjectResult> for ProjectResult {
    fn from(raw: RawProjectResult) -> Self {
        let curated_team = raw.intelligent_team.or(raw.top_3).unwrap_or_default();
        ProjectResult {
            project_id: raw.project_id,
            project_title: raw.project_title,
            project_domain: raw.project_domain,
            project_duration: raw.project_duration,
            project_deadline: raw.project_deadline,
            matches: raw.matches,
            curated_team,
        }
    }
}

impl ProjectResult {
    /// Parses the leading `YYYY-MM-DD` of the deadline, ignoring any time part.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        let date_part = self.project_deadline.get(..10)?;
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

pub type ResultSet = Vec<ProjectResult>;

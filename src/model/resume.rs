//! Structured resume records as received from the surrounding product
//!
//! Deserialization is deliberately forgiving: every field defaults when
//! absent or null, and the skills block accepts both wire shapes seen in
//! practice (a flat string array or a `{technical, soft}` object). A
//! structurally plausible resume always parses; gaps show up in the scores,
//! not as errors.

use chrono::NaiveDate;
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeProfile {
    #[serde(deserialize_with = "lenient")]
    pub personal_info: PersonalInfo,
    pub summary: Option<String>,
    pub skills: SkillSet,
    #[serde(deserialize_with = "lenient")]
    pub work_experience: Vec<Experience>,
    #[serde(deserialize_with = "lenient")]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: bool,
    #[serde(deserialize_with = "lenient")]
    pub description: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub institution: Option<String>,
}

/// Deserialize a field, falling back to its default on a type mismatch
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Accepts either `["Rust", "SQL"]` or `{"technical": [...], "soft": [...]}`
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsInput {
    Categorized {
        #[serde(default)]
        technical: Vec<String>,
        #[serde(default)]
        soft: Vec<String>,
    },
    Flat(Vec<String>),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = Option::<SkillsInput>::deserialize(deserializer)?;
        Ok(match input {
            Some(SkillsInput::Categorized { technical, soft }) => SkillSet { technical, soft },
            Some(SkillsInput::Flat(technical)) => SkillSet {
                technical,
                soft: Vec::new(),
            },
            Some(SkillsInput::Other(_)) | None => SkillSet::default(),
        })
    }
}

impl SkillSet {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.soft.is_empty()
    }

    /// All skills, technical and soft, lowercased
    pub fn all_lowercase(&self) -> Vec<String> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl Experience {
    pub fn start(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_flexible_date)
    }

    /// End date, substituting `today` for entries still in progress
    pub fn end_or(&self, today: NaiveDate) -> Option<NaiveDate> {
        if self.current {
            Some(today)
        } else {
            self.end_date.as_deref().and_then(parse_flexible_date)
        }
    }

    pub fn has_description(&self) -> bool {
        self.description.iter().any(|line| !line.trim().is_empty())
    }
}

/// Parse `YYYY-MM-DD`, `YYYY-MM` or bare `YYYY` dates
pub fn parse_flexible_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return Some(date);
    }
    raw.parse::<i32>()
        .ok()
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

/// True when the optional field holds a non-blank value
pub fn present(field: &Option<String>) -> bool {
    field.as_deref().map(str::trim).is_some_and(|s| !s.is_empty())
}

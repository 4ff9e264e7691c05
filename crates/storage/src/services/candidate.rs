use std::collections::BTreeSet;

use serde_json::Value;
use uuid::Uuid;

/// Scoring-ready view of one participant, rebuilt from the raw questionnaire
/// payload on every generation run. Never persisted as-is; the partitioner
/// copies the relevant fields into member snapshots when teams are written.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub participant_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
    pub skills: BTreeSet<String>,
    pub motivation: i32,
    pub years_experience: i32,
}

impl Candidate {
    /// Build a candidate from an answer payload. Malformed per-field data
    /// never fails extraction: the payload already passed ingestion
    /// validation, so anything unreadable here defaults instead.
    pub fn from_answer(participant_id: Uuid, payload: &Value) -> Self {
        Self {
            participant_id,
            first_name: string_field(payload, "first_name"),
            last_name: string_field(payload, "last_name"),
            role: normalize_role(payload.get("role")),
            skills: split_skills(payload.get("skills")),
            motivation: non_negative_int(payload.get("motivation")),
            years_experience: non_negative_int(payload.get("years_experience")),
        }
    }

    /// Skills joined back into a single string, the form stored in member
    /// snapshots.
    pub fn skills_joined(&self) -> String {
        self.skills.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn string_field(payload: &Value, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn normalize_role(value: Option<&Value>) -> Option<String> {
    let role = value?.as_str()?.trim().to_lowercase();
    if role.is_empty() { None } else { Some(role) }
}

/// Split on commas and semicolons, lowercase, trim, drop empties. A set
/// collapses duplicate tokens.
fn split_skills(value: Option<&Value>) -> BTreeSet<String> {
    let Some(raw) = value.and_then(Value::as_str) else {
        return BTreeSet::new();
    };

    raw.split([',', ';'])
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Missing, negative, or non-numeric values all clamp to 0.
fn non_negative_int(value: Option<&Value>) -> i32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.unwrap_or(0).clamp(0, i32::MAX as i64) as i32
}

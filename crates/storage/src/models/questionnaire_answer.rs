use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Raw questionnaire submission as ingested upstream. The payload is a
/// free-form JSON object; per-field normalization happens when candidates
/// are extracted for a generation run.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuestionnaireAnswer {
    pub answer_id: Uuid,
    pub questionnaire_id: Uuid,
    pub participant_id: Uuid,
    pub payload: serde_json::Value,
    pub created_at: chrono::NaiveDateTime,
}

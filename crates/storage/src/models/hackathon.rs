use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Hackathon {
    pub hackathon_id: Uuid,
    pub name: String,
    pub questionnaire_id: Option<Uuid>,
    pub created_at: chrono::NaiveDateTime,
}

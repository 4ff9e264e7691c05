use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub hackathon_id: Uuid,
    /// Version tag shared by every team (and member) written in one
    /// generation run. Regeneration replaces the whole generation.
    pub generation_id: Uuid,
    pub name: String,
    pub score: f64,
    pub created_at: chrono::NaiveDateTime,
}

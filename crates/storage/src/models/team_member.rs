use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Membership row. The role/skills/motivation/experience columns are a
/// snapshot taken at assignment time and stay frozen even if the
/// participant's questionnaire answers change later. Members added manually
/// through the editor carry no snapshot (all four are NULL).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamMember {
    pub member_id: Uuid,
    pub team_id: Uuid,
    /// Denormalized copy of the owning team's generation id, so the
    /// one-team-per-participant-per-generation check is a single lookup.
    pub generation_id: Uuid,
    pub participant_id: Uuid,
    pub role: Option<String>,
    pub skills: Option<String>,
    pub motivation: Option<i32>,
    pub years_experience: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
}

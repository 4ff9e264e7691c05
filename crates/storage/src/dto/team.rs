use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Team, TeamMember};

/// Response containing a team and its current members
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub team_id: Uuid,
    pub hackathon_id: Uuid,
    pub generation_id: Uuid,
    pub name: String,
    pub score: f64,
    pub created_at: NaiveDateTime,
    pub members: Vec<TeamMemberResponse>,
}

/// One membership with its assignment-time snapshot (all snapshot fields
/// are null for manually added members)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberResponse {
    pub participant_id: Uuid,
    pub role: Option<String>,
    pub skills: Option<String>,
    pub motivation: Option<i32>,
    pub years_experience: Option<i32>,
}

impl TeamResponse {
    pub fn from_parts(team: Team, members: Vec<TeamMember>) -> Self {
        Self {
            team_id: team.team_id,
            hackathon_id: team.hackathon_id,
            generation_id: team.generation_id,
            name: team.name,
            score: team.score,
            created_at: team.created_at,
            members: members.into_iter().map(TeamMemberResponse::from).collect(),
        }
    }
}

impl From<TeamMember> for TeamMemberResponse {
    fn from(member: TeamMember) -> Self {
        Self {
            participant_id: member.participant_id,
            role: member.role,
            skills: member.skills,
            motivation: member.motivation,
            years_experience: member.years_experience,
        }
    }
}

/// Request payload for generating a hackathon's teams
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateTeamsRequest {
    /// Requested team size; absent or below 3 falls back to 4
    pub team_size: Option<i32>,
}

/// Response for a generation run
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerateTeamsResponse {
    pub generation_id: Uuid,
}

/// Request payload for renaming a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RenameTeamRequest {
    #[validate(length(min = 1, max = 255, message = "Name must not be blank"))]
    pub name: String,
}

/// Request payload for adding participants to a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddMembersRequest {
    #[validate(length(min = 1, message = "At least one participant id is required"))]
    pub participant_ids: Vec<Uuid>,
}

/// Query parameters for listing teams
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct TeamListQuery {
    /// Restrict the listing to one generation; omit for all generations
    pub generation_id: Option<Uuid>,
}

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use storage::{
    dto::team::TeamResponse,
    error::Result,
    models::TeamMember,
    repository::team::TeamRepository,
    services::{team_editing, team_generation},
};

/// Generate a new set of teams for a hackathon
pub async fn generate(
    pool: &PgPool,
    hackathon_id: Uuid,
    team_size: Option<i32>,
) -> Result<Uuid> {
    team_generation::generate_teams(pool, hackathon_id, team_size).await
}

/// List teams, optionally restricted to one generation
pub async fn list_teams(pool: &PgPool, generation_id: Option<Uuid>) -> Result<Vec<TeamResponse>> {
    let repo = TeamRepository::new(pool);
    let teams = repo.list(generation_id).await?;

    let team_ids: Vec<Uuid> = teams.iter().map(|team| team.team_id).collect();
    let mut members_by_team: HashMap<Uuid, Vec<TeamMember>> = HashMap::new();
    for member in repo.members_of_teams(&team_ids).await? {
        members_by_team
            .entry(member.team_id)
            .or_default()
            .push(member);
    }

    Ok(teams
        .into_iter()
        .map(|team| {
            let members = members_by_team.remove(&team.team_id).unwrap_or_default();
            TeamResponse::from_parts(team, members)
        })
        .collect())
}

/// Get one team with its members
pub async fn get_team(pool: &PgPool, team_id: Uuid) -> Result<TeamResponse> {
    let repo = TeamRepository::new(pool);
    let team = repo.find_by_id(team_id).await?;
    let members = repo.members_of(team_id).await?;
    Ok(TeamResponse::from_parts(team, members))
}

/// Rename a team
pub async fn rename_team(pool: &PgPool, team_id: Uuid, name: &str) -> Result<TeamResponse> {
    team_editing::rename_team(pool, team_id, name).await
}

/// Add participants to a team
pub async fn add_members(
    pool: &PgPool,
    team_id: Uuid,
    participant_ids: &[Uuid],
) -> Result<TeamResponse> {
    team_editing::add_members(pool, team_id, participant_ids).await
}

/// Remove a participant from a team
pub async fn remove_member(
    pool: &PgPool,
    team_id: Uuid,
    participant_id: Uuid,
) -> Result<TeamResponse> {
    team_editing::remove_member(pool, team_id, participant_id).await
}

/// Move a participant into a target team
pub async fn move_member(pool: &PgPool, participant_id: Uuid, target_team_id: Uuid) -> Result<()> {
    team_editing::move_member(pool, participant_id, target_team_id).await
}

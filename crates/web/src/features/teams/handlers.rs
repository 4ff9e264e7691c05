use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::team::{
        AddMembersRequest, GenerateTeamsRequest, GenerateTeamsResponse, RenameTeamRequest,
        TeamListQuery, TeamResponse,
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/hackathons/{hackathon_id}/teams/generate",
    params(
        ("hackathon_id" = Uuid, Path, description = "Hackathon ID")
    ),
    request_body = GenerateTeamsRequest,
    responses(
        (status = 201, description = "Teams generated, previous generation replaced", body = GenerateTeamsResponse),
        (status = 404, description = "Hackathon not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn generate_teams(
    State(db): State<Database>,
    Path(hackathon_id): Path<Uuid>,
    Json(request): Json<GenerateTeamsRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let generation_id = services::generate(db.pool(), hackathon_id, request.team_size).await?;

    tracing::info!(%hackathon_id, %generation_id, "Generated teams");

    Ok((
        StatusCode::CREATED,
        Json(GenerateTeamsResponse { generation_id }),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams",
    params(TeamListQuery),
    responses(
        (status = 200, description = "List teams, across all generations unless one is given", body = Vec<TeamResponse>)
    ),
    tag = "teams"
)]
pub async fn list_teams(
    State(db): State<Database>,
    Query(query): Query<TeamListQuery>,
) -> Result<Response, WebError> {
    let teams = services::list_teams(db.pool(), query.generation_id).await?;

    Ok(Json(teams).into_response())
}

#[utoipa::path(
    get,
    path = "/api/teams/{team_id}",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 404, description = "Team not found")
    ),
    tag = "teams"
)]
pub async fn get_team(
    State(db): State<Database>,
    Path(team_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let team = services::get_team(db.pool(), team_id).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{team_id}/name",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    request_body = RenameTeamRequest,
    responses(
        (status = 200, description = "Team renamed", body = TeamResponse),
        (status = 400, description = "Blank name"),
        (status = 404, description = "Team not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn rename_team(
    State(db): State<Database>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<RenameTeamRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let team = services::rename_team(db.pool(), team_id, &request.name).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    post,
    path = "/api/teams/{team_id}/members",
    params(
        ("team_id" = Uuid, Path, description = "Team ID")
    ),
    request_body = AddMembersRequest,
    responses(
        (status = 200, description = "Members added", body = TeamResponse),
        (status = 404, description = "Team not found"),
        (status = 409, description = "A participant is already assigned in this generation"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn add_members(
    State(db): State<Database>,
    Path(team_id): Path<Uuid>,
    Json(request): Json<AddMembersRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let team = services::add_members(db.pool(), team_id, &request.participant_ids).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/teams/{team_id}/members/{participant_id}",
    params(
        ("team_id" = Uuid, Path, description = "Team ID"),
        ("participant_id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "Member removed", body = TeamResponse),
        (status = 404, description = "Team not found or participant not a member"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn remove_member(
    State(db): State<Database>,
    Path((team_id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    let team = services::remove_member(db.pool(), team_id, participant_id).await?;

    Ok(Json(team).into_response())
}

#[utoipa::path(
    put,
    path = "/api/teams/{team_id}/members/{participant_id}",
    params(
        ("team_id" = Uuid, Path, description = "Target team ID"),
        ("participant_id" = Uuid, Path, description = "Participant ID")
    ),
    responses(
        (status = 204, description = "Member moved into the target team"),
        (status = 404, description = "Target team not found"),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "teams"
)]
pub async fn move_member(
    State(db): State<Database>,
    Path((team_id, participant_id)): Path<(Uuid, Uuid)>,
) -> Result<Response, WebError> {
    services::move_member(db.pool(), participant_id, team_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::hackathon::{HackathonDetailResponse, HackathonResponse},
};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/hackathons",
    responses(
        (status = 200, description = "List all hackathons successfully", body = Vec<HackathonResponse>)
    ),
    tag = "hackathons"
)]
pub async fn list_hackathons(State(db): State<Database>) -> Result<Response, WebError> {
    let hackathons = services::list_hackathons(db.pool()).await?;

    let response: Vec<HackathonResponse> = hackathons
        .into_iter()
        .map(HackathonResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/hackathons/{hackathon_id}",
    params(
        ("hackathon_id" = Uuid, Path, description = "Hackathon ID")
    ),
    responses(
        (status = 200, description = "Hackathon with its current participants", body = HackathonDetailResponse),
        (status = 404, description = "Hackathon not found")
    ),
    tag = "hackathons"
)]
pub async fn get_hackathon(
    State(db): State<Database>,
    Path(hackathon_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let hackathon = services::get_hackathon_detailed(db.pool(), hackathon_id).await?;

    Ok(Json(hackathon).into_response())
}

use sqlx::PgPool;
use uuid::Uuid;

use storage::{
    dto::hackathon::HackathonDetailResponse,
    error::Result,
    models::Hackathon,
    repository::{hackathon::HackathonRepository, participant::ParticipantRepository},
};

/// List all hackathons
pub async fn list_hackathons(pool: &PgPool) -> Result<Vec<Hackathon>> {
    let repo = HackathonRepository::new(pool);
    repo.list().await
}

/// Get a hackathon with its current participants
pub async fn get_hackathon_detailed(
    pool: &PgPool,
    hackathon_id: Uuid,
) -> Result<HackathonDetailResponse> {
    let hackathon = HackathonRepository::new(pool).find_by_id(hackathon_id).await?;
    let participants = ParticipantRepository::new(pool)
        .list_for_hackathon(hackathon_id)
        .await?;

    Ok(HackathonDetailResponse::from_parts(hackathon, participants))
}

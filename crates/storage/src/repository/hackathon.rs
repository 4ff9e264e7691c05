use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Hackathon;

/// Repository for hackathon lookups
pub struct HackathonRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> HackathonRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all hackathons, newest first
    pub async fn list(&self) -> Result<Vec<Hackathon>> {
        let hackathons = sqlx::query_as::<_, Hackathon>(
            r#"
            SELECT hackathon_id, name, questionnaire_id, created_at
            FROM hackathons
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(hackathons)
    }

    /// Get a hackathon by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Hackathon> {
        let hackathon = sqlx::query_as::<_, Hackathon>(
            r#"
            SELECT hackathon_id, name, questionnaire_id, created_at
            FROM hackathons
            WHERE hackathon_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(hackathon)
    }
}

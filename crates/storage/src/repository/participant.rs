use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Participant, QuestionnaireAnswer};

/// Repository for participant and questionnaire-answer lookups
pub struct ParticipantRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Current participants of a hackathon
    pub async fn list_for_hackathon(&self, hackathon_id: Uuid) -> Result<Vec<Participant>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT p.participant_id, p.first_name, p.last_name, p.email, p.created_at
            FROM participants p
            INNER JOIN hackathon_participants hp ON hp.participant_id = p.participant_id
            WHERE hp.hackathon_id = $1
            ORDER BY p.created_at
            "#,
        )
        .bind(hackathon_id)
        .fetch_all(self.pool)
        .await?;

        Ok(participants)
    }

    /// All recorded answers for one questionnaire
    pub async fn answers_for_questionnaire(
        &self,
        questionnaire_id: Uuid,
    ) -> Result<Vec<QuestionnaireAnswer>> {
        let answers = sqlx::query_as::<_, QuestionnaireAnswer>(
            r#"
            SELECT answer_id, questionnaire_id, participant_id, payload, created_at
            FROM questionnaire_answers
            WHERE questionnaire_id = $1
            "#,
        )
        .bind(questionnaire_id)
        .fetch_all(self.pool)
        .await?;

        Ok(answers)
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Hackathon, Participant};

/// Response containing basic hackathon information
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HackathonResponse {
    pub hackathon_id: Uuid,
    pub name: String,
    pub questionnaire_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
}

/// Detailed hackathon response with its current participants
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HackathonDetailResponse {
    pub hackathon_id: Uuid,
    pub name: String,
    pub questionnaire_id: Option<Uuid>,
    pub created_at: NaiveDateTime,
    pub participants: Vec<ParticipantInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantInfo {
    pub participant_id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl From<Hackathon> for HackathonResponse {
    fn from(hackathon: Hackathon) -> Self {
        Self {
            hackathon_id: hackathon.hackathon_id,
            name: hackathon.name,
            questionnaire_id: hackathon.questionnaire_id,
            created_at: hackathon.created_at,
        }
    }
}

impl HackathonDetailResponse {
    pub fn from_parts(hackathon: Hackathon, participants: Vec<Participant>) -> Self {
        Self {
            hackathon_id: hackathon.hackathon_id,
            name: hackathon.name,
            questionnaire_id: hackathon.questionnaire_id,
            created_at: hackathon.created_at,
            participants: participants
                .into_iter()
                .map(|p| ParticipantInfo {
                    participant_id: p.participant_id,
                    first_name: p.first_name,
                    last_name: p.last_name,
                })
                .collect(),
        }
    }
}

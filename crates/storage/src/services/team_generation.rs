use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::repository::hackathon::HackathonRepository;
use crate::repository::participant::ParticipantRepository;
use crate::repository::team::{NewTeam, NewTeamMember, TeamRepository};

use super::candidate::Candidate;
use super::partition::{PlannedTeam, effective_team_size, partition};

/// Run one full generation for a hackathon: load participants and answers,
/// partition, and replace the previous generation's teams. Returns the new
/// generation id, which maps to zero teams when nobody answered.
pub async fn generate_teams(
    pool: &PgPool,
    hackathon_id: Uuid,
    requested_team_size: Option<i32>,
) -> Result<Uuid> {
    let hackathon = HackathonRepository::new(pool).find_by_id(hackathon_id).await?;

    let participant_repo = ParticipantRepository::new(pool);
    let participants = participant_repo.list_for_hackathon(hackathon_id).await?;

    let mut answers: HashMap<Uuid, serde_json::Value> = HashMap::new();
    if let Some(questionnaire_id) = hackathon.questionnaire_id {
        for answer in participant_repo
            .answers_for_questionnaire(questionnaire_id)
            .await?
        {
            answers.insert(answer.participant_id, answer.payload);
        }
    }

    // Participants with no recorded answer are skipped silently; they can
    // still be placed manually through the editor afterwards.
    let candidates: Vec<Candidate> = participants
        .iter()
        .filter_map(|participant| {
            answers
                .get(&participant.participant_id)
                .map(|payload| Candidate::from_answer(participant.participant_id, payload))
        })
        .collect();

    let generation_id = Uuid::new_v4();

    if candidates.is_empty() {
        // Nothing to form. The previous generation stays untouched.
        return Ok(generation_id);
    }

    let planned = partition(candidates, effective_team_size(requested_team_size));
    let new_teams: Vec<NewTeam> = planned
        .into_iter()
        .enumerate()
        .map(|(index, team)| to_new_team(index, team))
        .collect();

    TeamRepository::new(pool)
        .replace_generation(hackathon_id, generation_id, &new_teams)
        .await?;

    Ok(generation_id)
}

fn to_new_team(index: usize, team: PlannedTeam) -> NewTeam {
    NewTeam {
        name: format!("Team {}", index + 1),
        score: team.score,
        members: team
            .members
            .into_iter()
            .map(|candidate| NewTeamMember {
                participant_id: candidate.participant_id,
                role: candidate.role.clone(),
                skills: Some(candidate.skills_joined()),
                motivation: Some(candidate.motivation),
                years_experience: Some(candidate.years_experience),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use uuid::Uuid;

    use super::*;

    #[test]
    fn planned_teams_are_named_in_order_with_snapshots() {
        let candidate = Candidate {
            participant_id: Uuid::new_v4(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            role: Some("backend".into()),
            skills: BTreeSet::from(["rust".to_string(), "sql".to_string()]),
            motivation: 4,
            years_experience: 2,
        };

        let planned = PlannedTeam {
            capacity: 4,
            members: vec![candidate],
            score: 1.25,
        };

        let new_team = to_new_team(2, planned);
        assert_eq!(new_team.name, "Team 3");
        assert_eq!(new_team.score, 1.25);

        let member = &new_team.members[0];
        assert_eq!(member.role.as_deref(), Some("backend"));
        assert_eq!(member.skills.as_deref(), Some("rust, sql"));
        assert_eq!(member.motivation, Some(4));
        assert_eq!(member.years_experience, Some(2));
    }
}

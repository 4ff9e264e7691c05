use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::TeamResponse;
use crate::error::{Result, StorageError};
use crate::models::TeamMember;
use crate::repository::team::{NewTeamMember, TeamRepository};

/// Rename a team. The name is trimmed; a blank result is rejected before
/// any store access.
pub async fn rename_team(pool: &PgPool, team_id: Uuid, raw_name: &str) -> Result<TeamResponse> {
    let name = normalized_team_name(raw_name)
        .ok_or_else(|| StorageError::InvalidInput("Team name must not be blank".to_string()))?;

    let mut tx = pool.begin().await?;
    let team = TeamRepository::update_name(&mut tx, team_id, &name).await?;
    tx.commit().await?;

    team_view_with(pool, team).await
}

/// Add participants to a team. Each one is checked against the
/// one-team-per-participant-per-generation invariant before insert; any
/// conflict rolls the whole batch back.
pub async fn add_members(
    pool: &PgPool,
    team_id: Uuid,
    participant_ids: &[Uuid],
) -> Result<TeamResponse> {
    let mut tx = pool.begin().await?;
    let team = TeamRepository::find_by_id_tx(&mut tx, team_id).await?;

    for &participant_id in participant_ids {
        let existing =
            TeamRepository::find_membership(&mut tx, team.generation_id, participant_id).await?;
        ensure_unassigned(existing.as_ref())?;

        // Manual additions carry no questionnaire snapshot.
        TeamRepository::insert_member(
            &mut tx,
            team_id,
            team.generation_id,
            &manual_member(participant_id),
        )
        .await?;
    }

    tx.commit().await?;

    team_view_with(pool, team).await
}

/// Remove one membership, located by (team, participant).
pub async fn remove_member(
    pool: &PgPool,
    team_id: Uuid,
    participant_id: Uuid,
) -> Result<TeamResponse> {
    let mut tx = pool.begin().await?;
    let team = TeamRepository::find_by_id_tx(&mut tx, team_id).await?;
    let existing =
        TeamRepository::find_membership(&mut tx, team.generation_id, participant_id).await?;
    let member_id = removable_member(existing.as_ref(), team_id)?;
    TeamRepository::delete_member(&mut tx, member_id).await?;
    tx.commit().await?;

    team_view_with(pool, team).await
}

/// Move a participant into a target team within that team's generation.
/// An existing membership is reattached with a single update so its row
/// identity and snapshot survive; without one, a fresh membership is
/// created directly on the target (move-or-create, kept as observed in
/// the original system).
pub async fn move_member(pool: &PgPool, participant_id: Uuid, target_team_id: Uuid) -> Result<()> {
    let mut tx = pool.begin().await?;
    let target = TeamRepository::find_by_id_tx(&mut tx, target_team_id).await?;
    let existing =
        TeamRepository::find_membership(&mut tx, target.generation_id, participant_id).await?;

    match plan_move(existing.as_ref(), target_team_id) {
        MovePlan::AlreadyInTarget => {}
        MovePlan::Reassign(member_id) => {
            TeamRepository::reassign_member(&mut tx, member_id, target_team_id).await?;
        }
        MovePlan::CreateMembership => {
            TeamRepository::insert_member(
                &mut tx,
                target_team_id,
                target.generation_id,
                &manual_member(participant_id),
            )
            .await?;
        }
    }

    tx.commit().await?;
    Ok(())
}

/// What a move has to do, given the participant's current membership (if
/// any) within the target team's generation.
#[derive(Debug, PartialEq, Eq)]
pub enum MovePlan {
    AlreadyInTarget,
    Reassign(Uuid),
    CreateMembership,
}

/// One team per participant per generation: adding someone who already
/// holds a membership anywhere in the generation is a conflict, and the
/// whole batch rolls back.
pub fn ensure_unassigned(existing: Option<&TeamMember>) -> Result<()> {
    match existing {
        Some(member) => Err(StorageError::Conflict(format!(
            "Participant {} is already assigned to a team in this generation",
            member.participant_id
        ))),
        None => Ok(()),
    }
}

/// A removal targets the membership held in this exact team; a membership
/// in another team of the generation, or none at all, is not removable.
pub fn removable_member(existing: Option<&TeamMember>, team_id: Uuid) -> Result<Uuid> {
    match existing {
        Some(member) if member.team_id == team_id => Ok(member.member_id),
        _ => Err(StorageError::NotFound),
    }
}

pub fn plan_move(existing: Option<&TeamMember>, target_team_id: Uuid) -> MovePlan {
    match existing {
        Some(member) if member.team_id == target_team_id => MovePlan::AlreadyInTarget,
        Some(member) => MovePlan::Reassign(member.member_id),
        None => MovePlan::CreateMembership,
    }
}

pub fn normalized_team_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn manual_member(participant_id: Uuid) -> NewTeamMember {
    NewTeamMember {
        participant_id,
        role: None,
        skills: None,
        motivation: None,
        years_experience: None,
    }
}

async fn team_view_with(pool: &PgPool, team: crate::models::Team) -> Result<TeamResponse> {
    let members = TeamRepository::new(pool).members_of(team.team_id).await?;
    Ok(TeamResponse::from_parts(team, members))
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn membership(team_id: Uuid) -> TeamMember {
        TeamMember {
            member_id: Uuid::new_v4(),
            team_id,
            generation_id: Uuid::new_v4(),
            participant_id: Uuid::new_v4(),
            role: None,
            skills: None,
            motivation: None,
            years_experience: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(normalized_team_name(""), None);
        assert_eq!(normalized_team_name("   "), None);
        assert_eq!(normalized_team_name("\t\n"), None);
    }

    #[test]
    fn names_are_trimmed() {
        assert_eq!(
            normalized_team_name("  The Rustaceans  ").as_deref(),
            Some("The Rustaceans")
        );
    }

    #[test]
    fn adding_an_already_assigned_participant_conflicts() {
        let existing = membership(Uuid::new_v4());
        let result = ensure_unassigned(Some(&existing));
        assert!(matches!(result, Err(StorageError::Conflict(_))));
    }

    #[test]
    fn adding_an_unassigned_participant_is_allowed() {
        assert!(ensure_unassigned(None).is_ok());
    }

    #[test]
    fn removing_a_member_of_this_team_resolves_to_their_row() {
        let team_id = Uuid::new_v4();
        let existing = membership(team_id);
        assert_eq!(
            removable_member(Some(&existing), team_id).unwrap(),
            existing.member_id
        );
    }

    #[test]
    fn removing_a_non_member_is_not_found() {
        let team_id = Uuid::new_v4();
        assert!(matches!(
            removable_member(None, team_id),
            Err(StorageError::NotFound)
        ));

        // A membership in another team of the same generation does not
        // make the participant removable from this one.
        let elsewhere = membership(Uuid::new_v4());
        assert!(matches!(
            removable_member(Some(&elsewhere), team_id),
            Err(StorageError::NotFound)
        ));
    }

    #[test]
    fn moving_into_the_current_team_is_a_no_op() {
        let target = Uuid::new_v4();
        let existing = membership(target);
        assert_eq!(plan_move(Some(&existing), target), MovePlan::AlreadyInTarget);
    }

    #[test]
    fn moving_from_another_team_reassigns_the_same_row() {
        let target = Uuid::new_v4();
        let existing = membership(Uuid::new_v4());
        assert_eq!(
            plan_move(Some(&existing), target),
            MovePlan::Reassign(existing.member_id)
        );
    }

    #[test]
    fn moving_without_a_membership_creates_one() {
        assert_eq!(plan_move(None, Uuid::new_v4()), MovePlan::CreateMembership);
    }

    #[test]
    fn plan_move_is_idempotent() {
        // After a reassign the membership points at the target, so a second
        // identical move resolves to a no-op.
        let target = Uuid::new_v4();
        let mut existing = membership(Uuid::new_v4());
        assert_eq!(
            plan_move(Some(&existing), target),
            MovePlan::Reassign(existing.member_id)
        );

        existing.team_id = target;
        assert_eq!(plan_move(Some(&existing), target), MovePlan::AlreadyInTarget);
    }
}

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Team, TeamMember};

/// One team of a freshly computed partition, ready to be written.
#[derive(Debug)]
pub struct NewTeam {
    pub name: String,
    pub score: f64,
    pub members: Vec<NewTeamMember>,
}

/// Snapshot of a member at assignment time. All snapshot fields are `Some`
/// for partitioner output and `None` for members added manually later.
#[derive(Debug)]
pub struct NewTeamMember {
    pub participant_id: Uuid,
    pub role: Option<String>,
    pub skills: Option<String>,
    pub motivation: Option<i32>,
    pub years_experience: Option<i32>,
}

/// Repository for teams and memberships. Per-generation writes go through
/// `replace_generation`; the editor's statement helpers take an explicit
/// connection so one transaction can span several of them.
pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Replace a hackathon's teams with a newly generated set. The delete
    /// and all inserts run in one transaction, so callers either see the
    /// full new generation or the untouched old one.
    pub async fn replace_generation(
        &self,
        hackathon_id: Uuid,
        generation_id: Uuid,
        teams: &[NewTeam],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM teams WHERE hackathon_id = $1")
            .bind(hackathon_id)
            .execute(&mut *tx)
            .await?;

        for team in teams {
            let team_id: Uuid = sqlx::query_scalar(
                r#"
                INSERT INTO teams (hackathon_id, generation_id, name, score)
                VALUES ($1, $2, $3, $4)
                RETURNING team_id
                "#,
            )
            .bind(hackathon_id)
            .bind(generation_id)
            .bind(&team.name)
            .bind(team.score)
            .fetch_one(&mut *tx)
            .await?;

            for member in &team.members {
                Self::insert_member(&mut *tx, team_id, generation_id, member).await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Teams of one generation, or every team across generations when no
    /// generation id is given.
    pub async fn list(&self, generation_id: Option<Uuid>) -> Result<Vec<Team>> {
        let teams = match generation_id {
            Some(generation_id) => {
                sqlx::query_as::<_, Team>(
                    r#"
                    SELECT team_id, hackathon_id, generation_id, name, score, created_at
                    FROM teams
                    WHERE generation_id = $1
                    ORDER BY created_at, name
                    "#,
                )
                .bind(generation_id)
                .fetch_all(self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Team>(
                    r#"
                    SELECT team_id, hackathon_id, generation_id, name, score, created_at
                    FROM teams
                    ORDER BY created_at, name
                    "#,
                )
                .fetch_all(self.pool)
                .await?
            }
        };

        Ok(teams)
    }

    pub async fn find_by_id(&self, team_id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, hackathon_id, generation_id, name, score, created_at
            FROM teams
            WHERE team_id = $1
            "#,
        )
        .bind(team_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    pub async fn members_of(&self, team_id: Uuid) -> Result<Vec<TeamMember>> {
        let members = sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT member_id, team_id, generation_id, participant_id,
                   role, skills, motivation, years_experience, created_at
            FROM team_members
            WHERE team_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(team_id)
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }

    /// Members of several teams in one query, for list responses.
    pub async fn members_of_teams(&self, team_ids: &[Uuid]) -> Result<Vec<TeamMember>> {
        let members = sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT member_id, team_id, generation_id, participant_id,
                   role, skills, motivation, years_experience, created_at
            FROM team_members
            WHERE team_id = ANY($1)
            ORDER BY created_at
            "#,
        )
        .bind(team_ids)
        .fetch_all(self.pool)
        .await?;

        Ok(members)
    }

    // Transaction-scoped statement helpers below. Each takes an explicit
    // connection so the editor can group several into one unit of work.

    pub async fn find_by_id_tx(conn: &mut PgConnection, team_id: Uuid) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            SELECT team_id, hackathon_id, generation_id, name, score, created_at
            FROM teams
            WHERE team_id = $1
            "#,
        )
        .bind(team_id)
        .fetch_optional(conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    pub async fn update_name(conn: &mut PgConnection, team_id: Uuid, name: &str) -> Result<Team> {
        let team = sqlx::query_as::<_, Team>(
            r#"
            UPDATE teams
            SET name = $2
            WHERE team_id = $1
            RETURNING team_id, hackathon_id, generation_id, name, score, created_at
            "#,
        )
        .bind(team_id)
        .bind(name)
        .fetch_optional(conn)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    /// Any membership a participant holds within a generation.
    pub async fn find_membership(
        conn: &mut PgConnection,
        generation_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Option<TeamMember>> {
        let member = sqlx::query_as::<_, TeamMember>(
            r#"
            SELECT member_id, team_id, generation_id, participant_id,
                   role, skills, motivation, years_experience, created_at
            FROM team_members
            WHERE generation_id = $1 AND participant_id = $2
            "#,
        )
        .bind(generation_id)
        .bind(participant_id)
        .fetch_optional(conn)
        .await?;

        Ok(member)
    }

    pub async fn insert_member(
        conn: &mut PgConnection,
        team_id: Uuid,
        generation_id: Uuid,
        member: &NewTeamMember,
    ) -> Result<TeamMember> {
        let inserted = sqlx::query_as::<_, TeamMember>(
            r#"
            INSERT INTO team_members (
                team_id, generation_id, participant_id,
                role, skills, motivation, years_experience
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING member_id, team_id, generation_id, participant_id,
                      role, skills, motivation, years_experience, created_at
            "#,
        )
        .bind(team_id)
        .bind(generation_id)
        .bind(member.participant_id)
        .bind(&member.role)
        .bind(&member.skills)
        .bind(member.motivation)
        .bind(member.years_experience)
        .fetch_one(conn)
        .await?;

        Ok(inserted)
    }

    pub async fn delete_member(conn: &mut PgConnection, member_id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM team_members WHERE member_id = $1")
            .bind(member_id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Reattach an existing membership row to another team. A single update
    /// keeps the row's identity and snapshot intact.
    pub async fn reassign_member(
        conn: &mut PgConnection,
        member_id: Uuid,
        target_team_id: Uuid,
    ) -> Result<()> {
        let result = sqlx::query("UPDATE team_members SET team_id = $2 WHERE member_id = $1")
            .bind(member_id)
            .bind(target_team_id)
            .execute(conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

//! Team repository for database operations

use anyhow::Result;
use sqlx::PgPool;

/// Team repository for database operations
pub struct TeamRepository;

impl TeamRepository {
    /// Check whether a team exists
    pub async fn exists(pool: &PgPool, team_id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM teams WHERE id = $1)
            "#,
        )
        .bind(team_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Delete a team; returns false if no such team.
    pub async fn delete(pool: &PgPool, team_id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM teams WHERE id = $1
            "#,
        )
        .bind(team_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Update a team's motto
    pub async fn update_motto(pool: &PgPool, team_id: i32, motto: &str) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE teams SET motto = $2 WHERE id = $1
            "#,
        )
        .bind(team_id)
        .bind(motto)
        .execute(pool)
        .await?;

        Ok(())
    }
}

//! Player repository for database operations

use anyhow::Result;
use sqlx::PgPool;

/// Input for updating a player
#[derive(Debug, Clone)]
pub struct UpdatePlayer {
    pub name: String,
    pub num: i32,
    pub position: String,
    pub team_id: i32,
}

/// Player repository for database operations
pub struct PlayerRepository;

impl PlayerRepository {
    /// Update a player's information; returns false if no such player.
    pub async fn update(pool: &PgPool, player_id: i32, updates: UpdatePlayer) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE players
            SET name = $2, num = $3, position = $4, team_id = $5
            WHERE id = $1
            "#,
        )
        .bind(player_id)
        .bind(updates.name)
        .bind(updates.num)
        .bind(updates.position)
        .bind(updates.team_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

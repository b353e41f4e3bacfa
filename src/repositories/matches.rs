//! Match repository for database operations

use anyhow::Result;
use serde::Serialize;
use sqlx::PgPool;

/// Match record from database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: i32,
    pub past_match: String,
    pub curr_match: String,
    pub next_match: String,
}

/// Input for creating a match
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub past_match: String,
    pub curr_match: String,
    pub next_match: String,
}

/// Match repository for database operations
pub struct MatchRepository;

impl MatchRepository {
    /// List all matches
    pub async fn list(pool: &PgPool) -> Result<Vec<MatchRecord>> {
        let matches = sqlx::query_as::<_, MatchRecord>(
            r#"
            SELECT id, past_match, curr_match, next_match
            FROM matches
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(matches)
    }

    /// Insert a new match and return the created row
    pub async fn create(pool: &PgPool, input: NewMatch) -> Result<MatchRecord> {
        let created = sqlx::query_as::<_, MatchRecord>(
            r#"
            INSERT INTO matches (past_match, curr_match, next_match)
            VALUES ($1, $2, $3)
            RETURNING id, past_match, curr_match, next_match
            "#,
        )
        .bind(input.past_match)
        .bind(input.curr_match)
        .bind(input.next_match)
        .fetch_one(pool)
        .await?;

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require a database - covered by migration smoke
    // tests in a deployed environment.
}

//! User repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use std::fmt;
use uuid::Uuid;

/// User record from database
///
/// Read-only from the auth core's perspective. `stored_token` is a
/// last-issued-token marker kept by the schema; no endpoint reads it and
/// no revocation behavior is built on it.
#[derive(Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub address: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub stored_token: Option<String>,
}

// Manual Debug so the password hash can never reach a log line.
impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("address", &self.address)
            .field("password_hash", &"<redacted>")
            .field("role", &self.role)
            .field("stored_token", &self.stored_token.as_deref().map(|_| "<present>"))
            .finish()
    }
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Find user by username
    pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, address, password_hash, role, stored_token
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_exposes_password_hash() {
        let record = UserRecord {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            address: Some("somewhere".to_string()),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            role: "ADMIN".to_string(),
            stored_token: Some("a.b.c".to_string()),
        };

        let debug_str = format!("{:?}", record);
        assert!(!debug_str.contains("$2b$12$"));
        assert!(!debug_str.contains("a.b.c"));
        assert!(debug_str.contains("alice"));
    }
}

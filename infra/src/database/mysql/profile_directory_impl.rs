//! MySQL implementation of the ProfileDirectory trait.
//!
//! Read-only lookups against the host application's `users` and
//! `profiles` tables. This subsystem never writes to either table.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vf_core::domain::entities::user_profile::UserProfile;
use vf_core::errors::DomainError;
use vf_core::repositories::profile::ProfileDirectory;

/// MySQL implementation of ProfileDirectory
pub struct MySqlProfileDirectory {
    pool: MySqlPool,
}

impl MySqlProfileDirectory {
    /// Create a new MySQL profile directory
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileDirectory for MySqlProfileDirectory {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        let query = r#"
            SELECT u.id AS user_id, u.email, p.full_name
            FROM users u
            INNER JOIN profiles p ON p.user_id = u.id
            WHERE u.id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find profile: {}", e) })?;

        let Some(row) = result else {
            return Ok(None);
        };

        let raw_user_id: String = row.try_get("user_id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get user_id: {}", e) })?;

        Ok(Some(UserProfile {
            user_id: Uuid::parse_str(&raw_user_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            email: row.try_get("email")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get email: {}", e) })?,
            full_name: row.try_get("full_name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get full_name: {}", e) })?,
        }))
    }
}

//! MySQL implementation of the AttemptRepository trait.
//!
//! This module provides the concrete implementation of verification
//! attempt persistence using MySQL with SQLx. Attempt rows live in the
//! `verification_attempts` table; the schema is owned by the host
//! application's migration system.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vf_core::domain::entities::verification_attempt::{AttemptStatus, VerificationAttempt};
use vf_core::errors::DomainError;
use vf_core::repositories::attempt::AttemptRepository;

/// MySQL implementation of AttemptRepository
pub struct MySqlAttemptRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAttemptRepository {
    /// Create a new MySQL attempt repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to VerificationAttempt entity
    fn row_to_attempt(row: &sqlx::mysql::MySqlRow) -> Result<VerificationAttempt, DomainError> {
        let id: String = row.try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;

        let user_id: String = row.try_get("user_id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get user_id: {}", e) })?;

        let status: String = row.try_get("status")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get status: {}", e) })?;

        Ok(VerificationAttempt {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid attempt UUID: {}", e) })?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            name: row.try_get("name")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get name: {}", e) })?,
            status: AttemptStatus::from_str(&status).ok_or_else(|| DomainError::Internal {
                message: format!("Unknown attempt status in database: {}", status),
            })?,
            expiration_at: row.try_get::<Option<DateTime<Utc>>, _>("expiration_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get expiration_at: {}", e) })?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get created_at: {}", e) })?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal { message: format!("Failed to get updated_at: {}", e) })?,
        })
    }
}

#[async_trait]
impl AttemptRepository for MySqlAttemptRepository {
    async fn create(
        &self,
        attempt: VerificationAttempt,
    ) -> Result<VerificationAttempt, DomainError> {
        let query = r#"
            INSERT INTO verification_attempts (
                id, user_id, name, status, expiration_at, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(attempt.id.to_string())
            .bind(attempt.user_id.to_string())
            .bind(&attempt.name)
            .bind(attempt.status.as_str())
            .bind(attempt.expiration_at)
            .bind(attempt.created_at)
            .bind(attempt.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to create attempt: {}", e) })?;

        Ok(attempt)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<VerificationAttempt>, DomainError> {
        let query = r#"
            SELECT id, user_id, name, status, expiration_at, created_at, updated_at
            FROM verification_attempts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find attempt by id: {}", e) })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_attempt(&row)?)),
            None => Ok(None),
        }
    }

    async fn update_status(&self, id: Uuid, status: AttemptStatus) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE verification_attempts
            SET status = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(status.as_str())
            .bind(Utc::now())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to update attempt status: {}", e) })?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<VerificationAttempt>, DomainError> {
        let query = r#"
            SELECT id, user_id, name, status, expiration_at, created_at, updated_at
            FROM verification_attempts
            WHERE user_id = ?
            ORDER BY created_at DESC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal { message: format!("Failed to find user attempts: {}", e) })?;

        let mut attempts = Vec::new();
        for row in rows {
            attempts.push(Self::row_to_attempt(&row)?);
        }

        Ok(attempts)
    }
}

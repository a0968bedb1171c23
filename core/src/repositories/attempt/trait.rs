//! Attempt repository trait defining the interface for attempt persistence.
//!
//! This module defines the repository pattern interface for
//! `VerificationAttempt` records. The trait is async-first and uses Result
//! types for proper error handling; concrete database implementations live
//! in the infrastructure layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::verification_attempt::{AttemptStatus, VerificationAttempt};
use crate::errors::DomainError;

/// Repository trait for `VerificationAttempt` persistence operations
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers.
///
/// # Example
/// ```ignore
/// let attempt = VerificationAttempt::new(user_id, name, AttemptStatus::Created, None);
/// let created = repo.create(attempt).await?;
/// repo.update_status(created.id, AttemptStatus::Approved).await?;
/// ```
#[async_trait]
pub trait AttemptRepository: Send + Sync {
    /// Persist a new verification attempt
    ///
    /// # Returns
    /// * `Ok(VerificationAttempt)` - The created attempt
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate id)
    async fn create(&self, attempt: VerificationAttempt)
        -> Result<VerificationAttempt, DomainError>;

    /// Find an attempt by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(VerificationAttempt))` - Attempt found
    /// * `Ok(None)` - No attempt with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<VerificationAttempt>, DomainError>;

    /// Update the status of an attempt
    ///
    /// Only `status` and `updated_at` change; all other fields are
    /// untouched.
    ///
    /// # Returns
    /// * `Ok(true)` - Status was updated
    /// * `Ok(false)` - No attempt with the given id
    /// * `Err(DomainError)` - Update failed
    async fn update_status(&self, id: Uuid, status: AttemptStatus) -> Result<bool, DomainError>;

    /// List all attempts belonging to a user, newest first
    async fn find_by_user(&self, user_id: Uuid)
        -> Result<Vec<VerificationAttempt>, DomainError>;
}

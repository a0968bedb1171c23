//! Mock implementation of AttemptRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::verification_attempt::{AttemptStatus, VerificationAttempt};
use crate::errors::DomainError;

use super::trait_::AttemptRepository;

/// Mock attempt repository for testing
pub struct MockAttemptRepository {
    attempts: Arc<RwLock<HashMap<Uuid, VerificationAttempt>>>,
}

impl MockAttemptRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockAttemptRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttemptRepository for MockAttemptRepository {
    async fn create(
        &self,
        attempt: VerificationAttempt,
    ) -> Result<VerificationAttempt, DomainError> {
        let mut attempts = self.attempts.write().await;

        if attempts.contains_key(&attempt.id) {
            return Err(DomainError::Validation {
                message: "Attempt id already exists".to_string(),
            });
        }

        attempts.insert(attempt.id, attempt.clone());
        Ok(attempt)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<VerificationAttempt>, DomainError> {
        let attempts = self.attempts.read().await;
        Ok(attempts.get(&id).cloned())
    }

    async fn update_status(&self, id: Uuid, status: AttemptStatus) -> Result<bool, DomainError> {
        let mut attempts = self.attempts.write().await;

        match attempts.get_mut(&id) {
            Some(attempt) => {
                attempt.set_status(status);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<VerificationAttempt>, DomainError> {
        let attempts = self.attempts.read().await;
        let mut found: Vec<VerificationAttempt> = attempts
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }
}

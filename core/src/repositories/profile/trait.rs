//! Read-only directory of user profiles.
//!
//! The user/profile model is owned by the host application; this trait is
//! the narrow boundary through which the verification subsystem resolves
//! an attempt's owner into notification recipient data.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user_profile::UserProfile;
use crate::errors::DomainError;

/// Directory trait for resolving notification recipients
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Resolve the profile for a user
    ///
    /// # Returns
    /// * `Ok(Some(UserProfile))` - Profile found
    /// * `Ok(None)` - The user has no profile
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError>;
}

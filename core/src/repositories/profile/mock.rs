//! Mock implementation of ProfileDirectory for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user_profile::UserProfile;
use crate::errors::DomainError;

use super::trait_::ProfileDirectory;

/// Mock profile directory for testing
pub struct MockProfileDirectory {
    profiles: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl MockProfileDirectory {
    /// Create a new mock directory
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a profile
    pub async fn insert(&self, profile: UserProfile) {
        self.profiles.write().await.insert(profile.user_id, profile);
    }
}

impl Default for MockProfileDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileDirectory for MockProfileDirectory {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, DomainError> {
        let profiles = self.profiles.read().await;
        Ok(profiles.get(&user_id).cloned())
    }
}

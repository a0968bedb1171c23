//! Recipient profile projection of the host application's user model.
//!
//! The user/profile model itself lives outside this subsystem; attempts
//! only carry a `user_id`. When a notification must be addressed, the
//! owning user is resolved into this read-only projection through the
//! [`ProfileDirectory`](crate::repositories::ProfileDirectory) boundary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only recipient data for a verification attempt's owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The user this profile belongs to
    pub user_id: Uuid,

    /// Email address notifications are delivered to
    pub email: String,

    /// Full name as recorded on the user's profile
    pub full_name: String,
}

impl UserProfile {
    pub fn new(user_id: Uuid, email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            full_name: full_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let profile = UserProfile::new(Uuid::new_v4(), "learner@example.com", "Tester McTest");

        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }
}

//! Verification attempt entity and its status set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Statuses a verification attempt may hold
///
/// This is the full set of allowed values; status strings arriving from
/// plugins are validated against it before any record is touched. Statuses
/// used by neighbouring verification subsystems (e.g. "submitted",
/// "completed") are deliberately not part of this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptStatus {
    /// Attempt record exists but the verification has not started
    Created,
    /// Verification is underway with the provider
    Pending,
    /// The identity was verified successfully
    Approved,
    /// The identity could not be verified
    Denied,
}

impl AttemptStatus {
    /// Canonical wire names of all allowed statuses
    pub const ALLOWED: [&'static str; 4] = ["created", "pending", "approved", "denied"];

    /// Convert to string representation for database storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "created" => Some(Self::Created),
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "denied" => Some(Self::Denied),
            _ => None,
        }
    }
}

impl std::fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single identity-verification attempt
///
/// Created once by an external plugin call, mutated only via status
/// transitions, never deleted by this subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationAttempt {
    /// Unique identifier for the attempt
    pub id: Uuid,

    /// The user performing the verification attempt
    pub user_id: Uuid,

    /// The name being identity-verified
    pub name: String,

    /// Current status of the attempt
    pub status: AttemptStatus,

    /// When the verification attempt expires, if an expiry was set
    pub expiration_at: Option<DateTime<Utc>>,

    /// Timestamp when the attempt was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the attempt was last updated
    pub updated_at: DateTime<Utc>,
}

impl VerificationAttempt {
    /// Creates a new verification attempt
    ///
    /// # Arguments
    ///
    /// * `user_id` - the user performing the attempt
    /// * `name` - the name being verified
    /// * `status` - the initial status
    /// * `expiration_at` - when the attempt expires, if known
    pub fn new(
        user_id: Uuid,
        name: String,
        status: AttemptStatus,
        expiration_at: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            status,
            expiration_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Transition the attempt to a new status
    pub fn set_status(&mut self, status: AttemptStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Checks if the attempt has expired
    ///
    /// An attempt without an expiration never expires.
    pub fn is_expired(&self) -> bool {
        match self.expiration_at {
            Some(expiration_at) => Utc::now() > expiration_at,
            None => false,
        }
    }
}

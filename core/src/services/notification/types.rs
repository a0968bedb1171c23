//! Types for notification delivery

use serde::{Deserialize, Serialize};

/// A fully rendered email ready for a provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient email address
    pub to_email: String,
    /// Recipient display name
    pub to_name: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
}

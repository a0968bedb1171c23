//! Domain-specific error types for attempt tracking and notification delivery.

use thiserror::Error;

/// Errors raised by the attempt-tracking API surface
#[derive(Error, Debug)]
pub enum AttemptError {
    #[error("Invalid attempt status: {status}. Status must be one of: {allowed}")]
    InvalidStatus { status: String, allowed: String },

    #[error("Verification attempt not found: {id}")]
    NotFound { id: String },

    #[error("No profile found for user {user_id}")]
    ProfileNotFound { user_id: String },
}

/// Errors raised while delivering notifications
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Mail provider failure: {message}")]
    ProviderFailure { message: String },

    #[error("Mail queue is closed")]
    QueueClosed,

    #[error("Invalid recipient address: {email}")]
    InvalidRecipient { email: String },
}

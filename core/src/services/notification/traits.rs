//! Trait for mail provider integration

use async_trait::async_trait;

use super::types::EmailMessage;

/// Trait for mail provider integration
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Send an email, returning the provider message id
    async fn send(&self, message: &EmailMessage) -> Result<String, String>;
}

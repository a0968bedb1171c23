//! Email Service Interface
//!
//! Defines the trait for email service implementations that deliver
//! verification status notifications.

use async_trait::async_trait;

use crate::InfrastructureError;

// Address helpers shared across providers
pub use vf_shared::utils::email::{is_valid_email, mask_email};

/// Email service trait for sending transactional mail
///
/// Implementations include:
/// - Brevo HTTP API
/// - Mock implementation for development
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Send an email message
    ///
    /// # Arguments
    ///
    /// * `to_email` - The recipient's address
    /// * `to_name` - The recipient's display name
    /// * `subject` - Subject line
    /// * `body` - Plain-text body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        to_email: &str,
        to_name: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

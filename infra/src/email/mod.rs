//! Email Service Module
//!
//! This module provides email service implementations for sending
//! verification status notifications. It includes support for a
//! production transactional-email provider and a mock implementation
//! for development.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all mail providers
//! - **Mock Implementation**: Console output for development
//! - **Brevo Support**: Production email via the Brevo HTTP API
//! - **Mailer Adapter**: Bridges providers to the core mailer trait
//! - **Security**: Email address masking in logs

pub mod email_service;
pub mod mailer_adapter;
pub mod mock_email;

// Brevo email service (feature-gated)
#[cfg(feature = "brevo-email")]
pub mod brevo;

// Re-export commonly used types
pub use email_service::EmailService;
pub use mailer_adapter::EmailMailerAdapter;
pub use mock_email::MockEmailService;

#[cfg(feature = "brevo-email")]
pub use brevo::{BrevoConfig, BrevoEmailService};

#[cfg(test)]
mod tests;

/// Create an email service based on configuration
///
/// Returns the appropriate email service implementation based on the
/// provider specified in the configuration.
///
/// # Arguments
///
/// * `config` - Email configuration containing provider settings
///
/// # Returns
///
/// A boxed email service implementation
pub fn create_email_service(config: &vf_shared::config::EmailConfig) -> Box<dyn EmailService> {
    match config.provider.as_str() {
        "mock" => Box::new(MockEmailService::new()),
        #[cfg(feature = "brevo-email")]
        "brevo" => {
            let brevo_config = BrevoConfig {
                api_key: config.api_key.clone(),
                sender_email: config.sender_email.clone(),
                sender_name: config.sender_name.clone(),
                max_retries: 3,
                retry_delay_ms: 1000,
                request_timeout_secs: 30,
            };

            match BrevoEmailService::new(brevo_config) {
                Ok(service) => Box::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize Brevo email service: {}", e);
                    tracing::warn!("Falling back to mock email service");
                    Box::new(MockEmailService::new())
                }
            }
        }
        _ => {
            tracing::warn!(
                "Unknown email provider '{}', using mock implementation",
                config.provider
            );
            Box::new(MockEmailService::new())
        }
    }
}

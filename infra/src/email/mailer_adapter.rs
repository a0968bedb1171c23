//! Adapter bridging infrastructure email providers to the core mailer trait.
//!
//! The core attempt service depends on the narrow
//! [`MailerTrait`](vf_core::services::notification::MailerTrait); this
//! adapter lets any [`EmailService`] implementation satisfy it.

use async_trait::async_trait;
use std::sync::Arc;

use vf_core::services::notification::{EmailMessage, MailerTrait};

use super::email_service::EmailService;

/// Adapter exposing an [`EmailService`] as a core mailer
pub struct EmailMailerAdapter {
    service: Arc<dyn EmailService>,
}

impl EmailMailerAdapter {
    /// Wrap an email service in the core mailer interface
    pub fn new(service: Arc<dyn EmailService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MailerTrait for EmailMailerAdapter {
    async fn send(&self, message: &EmailMessage) -> Result<String, String> {
        self.service
            .send_email(
                &message.to_email,
                &message.to_name,
                &message.subject,
                &message.body,
            )
            .await
            .map_err(|e| e.to_string())
    }
}

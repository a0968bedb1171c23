//! Brevo Email Service Implementation
//!
//! This module provides email sending capabilities using the Brevo
//! transactional email API. It implements the EmailService trait for
//! production mail delivery.
//!
//! ## Features
//!
//! - Automatic retry logic with exponential backoff
//! - Rate limiting handling
//! - Comprehensive error handling
//! - Security: email address masking in logs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::InfrastructureError;

use super::email_service::{is_valid_email, mask_email, EmailService};

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Brevo email service configuration
#[derive(Debug, Clone)]
pub struct BrevoConfig {
    /// Brevo API key
    pub api_key: String,
    /// Sender email address
    pub sender_email: String,
    /// Optional sender display name
    pub sender_name: Option<String>,
    /// Maximum retry attempts for failed requests
    pub max_retries: u32,
    /// Initial retry delay in milliseconds
    pub retry_delay_ms: u64,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl BrevoConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_key = std::env::var("BREVO_API_KEY")
            .map_err(|_| InfrastructureError::Config("BREVO_API_KEY not set".to_string()))?;
        let sender_email = std::env::var("BREVO_SENDER_EMAIL")
            .map_err(|_| InfrastructureError::Config("BREVO_SENDER_EMAIL not set".to_string()))?;

        if !is_valid_email(&sender_email) {
            return Err(InfrastructureError::Config(
                "BREVO_SENDER_EMAIL must be a valid email address".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            sender_email,
            sender_name: std::env::var("BREVO_SENDER_NAME").ok(),
            max_retries: std::env::var("BREVO_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            retry_delay_ms: std::env::var("BREVO_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            request_timeout_secs: std::env::var("BREVO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoEmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoSendEmailBody {
    sender: BrevoEmailAddress,
    to: Vec<BrevoEmailAddress>,
    subject: String,
    text_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrevoSendEmailResponse {
    message_id: String,
}

/// Brevo email service implementation
pub struct BrevoEmailService {
    client: reqwest::Client,
    config: BrevoConfig,
}

impl BrevoEmailService {
    /// Create a new Brevo email service
    pub fn new(config: BrevoConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "Brevo API key is required".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Brevo email service initialized with sender: {}",
            mask_email(&config.sender_email)
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = BrevoConfig::from_env()?;
        Self::new(config)
    }

    /// Build the request payload for a message
    fn build_payload(&self, to_email: &str, to_name: &str, subject: &str, body: &str) -> BrevoSendEmailBody {
        BrevoSendEmailBody {
            sender: BrevoEmailAddress {
                email: self.config.sender_email.clone(),
                name: self.config.sender_name.clone(),
            },
            to: vec![BrevoEmailAddress {
                email: to_email.to_string(),
                name: Some(to_name.to_string()),
            }],
            subject: subject.to_string(),
            text_content: body.to_string(),
        }
    }

    /// Send a message with retry logic
    async fn send_with_retry(
        &self,
        payload: &BrevoSendEmailBody,
        recipient: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(recipient);
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;

            debug!(
                "Sending email attempt {}/{} to {}",
                attempts, self.config.max_retries, masked
            );

            let response = self
                .client
                .post(BREVO_SEND_URL)
                .header("api-key", &self.config.api_key)
                .header("accept", "application/json")
                .json(payload)
                .send()
                .await;

            match response {
                Ok(response) if response.status().is_success() => {
                    let parsed: BrevoSendEmailResponse = response.json().await?;
                    info!(
                        "Email sent successfully to {} with message id: {}",
                        masked, parsed.message_id
                    );
                    return Ok(parsed.message_id);
                }
                Ok(response) => {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    error!(
                        "Brevo send failed (attempt {}/{}, status {}): {}",
                        attempts, self.config.max_retries, status, body
                    );

                    // Don't retry on client errors other than rate limiting
                    if status.is_client_error() && status.as_u16() != 429 {
                        return Err(InfrastructureError::Email(format!(
                            "Brevo rejected the request (status {}): {}",
                            status, body
                        )));
                    }

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Email(format!(
                            "Failed to send email after {} attempts (status {})",
                            self.config.max_retries, status
                        )));
                    }

                    if status.as_u16() == 429 {
                        warn!("Rate limit detected, backing off for {:?}", delay);
                    } else {
                        warn!("Server error detected, retrying after {:?}", delay);
                    }
                }
                Err(e) => {
                    error!(
                        "Failed to reach Brevo (attempt {}/{}): {}",
                        attempts, self.config.max_retries, e
                    );

                    if attempts >= self.config.max_retries {
                        return Err(InfrastructureError::Http(e));
                    }
                }
            }

            // Wait before retrying with exponential backoff
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

#[async_trait]
impl EmailService for BrevoEmailService {
    async fn send_email(
        &self,
        to_email: &str,
        to_name: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_valid_email(to_email) {
            return Err(InfrastructureError::Email(format!(
                "Invalid recipient address: {}",
                mask_email(to_email)
            )));
        }

        info!(
            "Sending email to {} via Brevo (subject: {})",
            mask_email(to_email),
            subject
        );

        let payload = self.build_payload(to_email, to_name, subject, body);
        self.send_with_retry(&payload, to_email).await
    }

    fn provider_name(&self) -> &str {
        "Brevo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> BrevoConfig {
        BrevoConfig {
            api_key: "xkeysib-test".to_string(),
            sender_email: "no-reply@veriflow.io".to_string(),
            sender_name: Some("VeriFlow".to_string()),
            max_retries: 3,
            retry_delay_ms: 1,
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_new_requires_api_key() {
        let mut config = test_config();
        config.api_key = "  ".to_string();

        let result = BrevoEmailService::new(config);
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_payload_serialization() {
        let service = BrevoEmailService::new(test_config()).unwrap();
        let payload = service.build_payload(
            "learner@example.com",
            "Tester McTest",
            "Subject line",
            "Body text",
        );

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["sender"]["email"], "no-reply@veriflow.io");
        assert_eq!(json["sender"]["name"], "VeriFlow");
        assert_eq!(json["to"][0]["email"], "learner@example.com");
        assert_eq!(json["subject"], "Subject line");
        assert_eq!(json["textContent"], "Body text");
    }

    #[test]
    fn test_payload_omits_missing_sender_name() {
        let mut config = test_config();
        config.sender_name = None;
        let service = BrevoEmailService::new(config).unwrap();

        let payload = service.build_payload("learner@example.com", "Tester", "S", "B");
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["sender"].get("name").is_none());
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_recipient() {
        let service = BrevoEmailService::new(test_config()).unwrap();
        let result = service
            .send_email("not-an-address", "Tester", "Subject", "Body")
            .await;
        assert!(matches!(result, Err(InfrastructureError::Email(_))));
    }
}

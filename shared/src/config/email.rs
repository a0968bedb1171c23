//! Email delivery configuration module

use serde::{Deserialize, Serialize};

/// How approval notifications are handed to the mail provider.
///
/// `Queued` pushes messages onto the asynchronous mail queue and returns
/// immediately; `Direct` awaits the provider call inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    /// Hand the message to the background mail queue
    Queued,
    /// Await the provider send inline
    Direct,
}

impl Default for DeliveryMode {
    fn default() -> Self {
        DeliveryMode::Queued
    }
}

impl std::str::FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "queued" | "queue" => Ok(DeliveryMode::Queued),
            "direct" => Ok(DeliveryMode::Direct),
            _ => Err(format!("Invalid delivery mode: {}", s)),
        }
    }
}

impl std::fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryMode::Queued => write!(f, "queued"),
            DeliveryMode::Direct => write!(f, "direct"),
        }
    }
}

/// Email service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Email provider ("brevo", "mock")
    pub provider: String,

    /// Provider API key
    pub api_key: String,

    /// Sender email address
    pub sender_email: String,

    /// Optional sender display name
    pub sender_name: Option<String>,

    /// Delivery mode for approval notifications
    #[serde(default)]
    pub delivery: DeliveryMode,

    /// Platform name used in notification subjects and bodies
    pub platform_name: String,

    /// How long an approved verification stays valid, in days
    pub default_validity_days: i64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            api_key: String::new(),
            sender_email: "no-reply@veriflow.io".to_string(),
            sender_name: Some("VeriFlow".to_string()),
            delivery: DeliveryMode::default(),
            platform_name: "VeriFlow".to_string(),
            default_validity_days: 365,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            provider: std::env::var("EMAIL_PROVIDER").unwrap_or(defaults.provider),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or_default(),
            sender_email: std::env::var("EMAIL_SENDER_ADDRESS").unwrap_or(defaults.sender_email),
            sender_name: std::env::var("EMAIL_SENDER_NAME").ok().or(defaults.sender_name),
            delivery: std::env::var("EMAIL_DELIVERY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            platform_name: std::env::var("PLATFORM_NAME").unwrap_or(defaults.platform_name),
            default_validity_days: std::env::var("VERIFICATION_VALID_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_validity_days),
        }
    }
}

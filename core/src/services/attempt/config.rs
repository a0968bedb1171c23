//! Configuration for the attempt service

use vf_shared::config::email::DeliveryMode;

/// Configuration for the attempt service
#[derive(Debug, Clone)]
pub struct AttemptServiceConfig {
    /// Platform name used in notification subjects and bodies
    pub platform_name: String,
    /// Validity window applied when an attempt has no expiration of its own
    pub default_validity_days: i64,
    /// How approval notifications reach the mail provider
    pub delivery: DeliveryMode,
}

impl Default for AttemptServiceConfig {
    fn default() -> Self {
        Self {
            platform_name: "VeriFlow".to_string(),
            default_validity_days: 365,
            delivery: DeliveryMode::Queued,
        }
    }
}

impl AttemptServiceConfig {
    /// Derive service configuration from the email configuration
    pub fn from_email_config(email: &vf_shared::config::EmailConfig) -> Self {
        Self {
            platform_name: email.platform_name.clone(),
            default_validity_days: email.default_validity_days,
            delivery: email.delivery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_shared::config::EmailConfig;

    #[test]
    fn test_from_email_config() {
        let email = EmailConfig {
            platform_name: "édX".to_string(),
            default_validity_days: 30,
            delivery: DeliveryMode::Direct,
            ..Default::default()
        };

        let config = AttemptServiceConfig::from_email_config(&email);
        assert_eq!(config.platform_name, "édX");
        assert_eq!(config.default_validity_days, 30);
        assert_eq!(config.delivery, DeliveryMode::Direct);
    }
}

//! Tests for the email service factory

use vf_shared::config::EmailConfig;

use crate::email::create_email_service;

#[test]
fn test_mock_provider() {
    let config = EmailConfig {
        provider: "mock".to_string(),
        ..Default::default()
    };
    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[test]
fn test_unknown_provider_falls_back_to_mock() {
    let config = EmailConfig {
        provider: "carrier-pigeon".to_string(),
        ..Default::default()
    };
    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

#[cfg(feature = "brevo-email")]
#[test]
fn test_brevo_provider() {
    let config = EmailConfig {
        provider: "brevo".to_string(),
        api_key: "xkeysib-test".to_string(),
        ..Default::default()
    };
    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "Brevo");
}

#[cfg(feature = "brevo-email")]
#[test]
fn test_brevo_without_api_key_falls_back_to_mock() {
    let config = EmailConfig {
        provider: "brevo".to_string(),
        api_key: String::new(),
        ..Default::default()
    };
    let service = create_email_service(&config);
    assert_eq!(service.provider_name(), "Mock");
}

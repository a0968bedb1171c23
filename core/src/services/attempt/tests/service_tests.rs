//! Tests for the attempt service

use chrono::{TimeZone, Utc};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use vf_shared::config::email::DeliveryMode;

use crate::domain::entities::user_profile::UserProfile;
use crate::domain::entities::verification_attempt::AttemptStatus;
use crate::errors::{AttemptError, DomainError};
use crate::repositories::attempt::{AttemptRepository, MockAttemptRepository};
use crate::repositories::profile::MockProfileDirectory;
use crate::services::attempt::{AttemptService, AttemptServiceConfig};

use super::mocks::RecordingMailer;

type TestService = AttemptService<MockAttemptRepository, MockProfileDirectory, RecordingMailer>;

fn test_config(delivery: DeliveryMode) -> AttemptServiceConfig {
    AttemptServiceConfig {
        platform_name: "VeriFlow".to_string(),
        default_validity_days: 365,
        delivery,
    }
}

fn build_service(delivery: DeliveryMode) -> (TestService, Arc<MockAttemptRepository>, Arc<MockProfileDirectory>, Arc<RecordingMailer>) {
    let repository = Arc::new(MockAttemptRepository::new());
    let profiles = Arc::new(MockProfileDirectory::new());
    let mailer = Arc::new(RecordingMailer::new(false));
    let service = AttemptService::new(
        repository.clone(),
        profiles.clone(),
        mailer.clone(),
        test_config(delivery),
    );
    (service, repository, profiles, mailer)
}

#[tokio::test]
async fn test_create_attempt() {
    let (service, _, _, _) = build_service(DeliveryMode::Direct);
    let user_id = Uuid::new_v4();
    let expiration = Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap();

    let id = service
        .create_attempt(user_id, "Tester McTest", "created", Some(expiration))
        .await
        .unwrap();

    let attempt = service.find_attempt(id).await.unwrap().unwrap();
    assert_eq!(attempt.user_id, user_id);
    assert_eq!(attempt.name, "Tester McTest");
    assert_eq!(attempt.status, AttemptStatus::Created);
    assert_eq!(attempt.expiration_at, Some(expiration));
}

#[tokio::test]
async fn test_create_attempt_no_expiration() {
    let (service, repository, _, _) = build_service(DeliveryMode::Direct);

    let id = service
        .create_attempt(Uuid::new_v4(), "Tester McTest", "created", None)
        .await
        .unwrap();

    let attempt = repository.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(attempt.expiration_at, None);
}

#[tokio::test]
async fn test_create_attempt_invalid_status() {
    let (service, _, _, _) = build_service(DeliveryMode::Direct);

    let result = service
        .create_attempt(Uuid::new_v4(), "Tester McTest", "submitted", None)
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Attempt(AttemptError::InvalidStatus { .. }))
    ));
}

#[tokio::test]
async fn test_update_attempt_status() {
    let (service, repository, _, _) = build_service(DeliveryMode::Direct);
    let user_id = Uuid::new_v4();
    let expiration = Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap();

    let id = service
        .create_attempt(user_id, "Tester McTest", "created", Some(expiration))
        .await
        .unwrap();

    for status in ["pending", "approved", "denied"] {
        service.update_attempt_status(id, status).await.unwrap();

        let attempt = repository.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(attempt.status.as_str(), status);
        // Fields other than status must not change
        assert_eq!(attempt.user_id, user_id);
        assert_eq!(attempt.name, "Tester McTest");
        assert_eq!(attempt.expiration_at, Some(expiration));
    }
}

#[tokio::test]
async fn test_update_attempt_status_invalid() {
    let (service, _, _, _) = build_service(DeliveryMode::Direct);

    let id = service
        .create_attempt(Uuid::new_v4(), "Tester McTest", "created", None)
        .await
        .unwrap();

    // Statuses used by neighbouring verification models, not this one
    for status in ["completed", "failed", "submitted", "expired"] {
        let result = service.update_attempt_status(id, status).await;
        assert!(matches!(
            result,
            Err(DomainError::Attempt(AttemptError::InvalidStatus { .. }))
        ));
    }
}

#[tokio::test]
async fn test_update_attempt_status_not_found() {
    let (service, _, _, _) = build_service(DeliveryMode::Direct);

    let result = service
        .update_attempt_status(Uuid::new_v4(), "approved")
        .await;

    assert!(matches!(
        result,
        Err(DomainError::Attempt(AttemptError::NotFound { .. }))
    ));
}

#[tokio::test]
async fn test_send_approval_email_direct() {
    let (service, repository, profiles, mailer) = build_service(DeliveryMode::Direct);
    let user_id = Uuid::new_v4();
    profiles
        .insert(UserProfile::new(user_id, "learner@example.com", "Tester McTest"))
        .await;

    let expiration = Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap();
    let id = service
        .create_attempt(user_id, "Tester McTest", "approved", Some(expiration))
        .await
        .unwrap();
    let attempt = repository.find_by_id(id).await.unwrap().unwrap();

    service.send_approval_email(&attempt).await.unwrap();

    let sent = mailer.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to_email, "learner@example.com");
    assert_eq!(sent[0].subject, "Your VeriFlow ID verification was approved!");
    assert!(sent[0].body.contains("ID verification photos have been approved"));
    assert!(sent[0].body.contains("12/31/2026"));
}

#[tokio::test]
async fn test_send_approval_email_queued() {
    let (service, repository, profiles, mailer) = build_service(DeliveryMode::Queued);
    let user_id = Uuid::new_v4();
    profiles
        .insert(UserProfile::new(user_id, "learner@example.com", "Tester McTest"))
        .await;

    let id = service
        .create_attempt(
            user_id,
            "Tester McTest",
            "approved",
            Some(Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap()),
        )
        .await
        .unwrap();
    let attempt = repository.find_by_id(id).await.unwrap().unwrap();

    service.send_approval_email(&attempt).await.unwrap();

    // Delivery happens on the worker task
    for _ in 0..50 {
        if !mailer.sent_messages().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    let sent = mailer.sent_messages();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("12/31/2026"));
}

#[tokio::test]
async fn test_send_approval_email_defaults_expiration() {
    let (service, repository, profiles, mailer) = build_service(DeliveryMode::Direct);
    let user_id = Uuid::new_v4();
    profiles
        .insert(UserProfile::new(user_id, "learner@example.com", "Tester McTest"))
        .await;

    let id = service
        .create_attempt(user_id, "Tester McTest", "approved", None)
        .await
        .unwrap();
    let attempt = repository.find_by_id(id).await.unwrap().unwrap();

    service.send_approval_email(&attempt).await.unwrap();

    let expected = (Utc::now() + chrono::Duration::days(365))
        .format("%m/%d/%Y")
        .to_string();
    let sent = mailer.sent_messages();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains(&expected));
}

#[tokio::test]
async fn test_send_approval_email_missing_profile() {
    let (service, repository, _, mailer) = build_service(DeliveryMode::Direct);

    let id = service
        .create_attempt(Uuid::new_v4(), "Tester McTest", "approved", None)
        .await
        .unwrap();
    let attempt = repository.find_by_id(id).await.unwrap().unwrap();

    let result = service.send_approval_email(&attempt).await;

    assert!(matches!(
        result,
        Err(DomainError::Attempt(AttemptError::ProfileNotFound { .. }))
    ));
    assert!(mailer.sent_messages().is_empty());
}

#[tokio::test]
async fn test_send_approval_email_direct_provider_failure() {
    let repository = Arc::new(MockAttemptRepository::new());
    let profiles = Arc::new(MockProfileDirectory::new());
    let mailer = Arc::new(RecordingMailer::new(true));
    let service = AttemptService::new(
        repository.clone(),
        profiles.clone(),
        mailer,
        test_config(DeliveryMode::Direct),
    );

    let user_id = Uuid::new_v4();
    profiles
        .insert(UserProfile::new(user_id, "learner@example.com", "Tester McTest"))
        .await;

    let id = service
        .create_attempt(user_id, "Tester McTest", "approved", None)
        .await
        .unwrap();
    let attempt = repository.find_by_id(id).await.unwrap().unwrap();

    let result = service.send_approval_email(&attempt).await;
    assert!(matches!(result, Err(DomainError::Internal { .. })));
}

#[tokio::test]
async fn test_list_attempts() {
    let (service, _, _, _) = build_service(DeliveryMode::Direct);
    let user_id = Uuid::new_v4();

    service
        .create_attempt(user_id, "Tester McTest", "created", None)
        .await
        .unwrap();
    service
        .create_attempt(user_id, "Tester McTest", "pending", None)
        .await
        .unwrap();
    service
        .create_attempt(Uuid::new_v4(), "Someone Else", "created", None)
        .await
        .unwrap();

    let attempts = service.list_attempts(user_id).await.unwrap();
    assert_eq!(attempts.len(), 2);
}

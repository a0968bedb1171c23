//! Main attempt service implementation

use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use uuid::Uuid;

use vf_shared::config::email::DeliveryMode;
use vf_shared::utils::email::mask_email;

use crate::domain::entities::verification_attempt::{AttemptStatus, VerificationAttempt};
use crate::errors::{AttemptError, DomainError, DomainResult};
use crate::repositories::attempt::AttemptRepository;
use crate::repositories::profile::ProfileDirectory;
use crate::services::notification::{approval_email, MailQueue, MailerTrait};

use super::config::AttemptServiceConfig;

/// Service for recording and updating identity-verification attempts
///
/// This is the API surface verification-implementation plugins call into.
/// It validates status strings against the allowed set, persists attempt
/// records through the repository, and dispatches approval notifications
/// through the configured delivery path.
pub struct AttemptService<R, P, M>
where
    R: AttemptRepository,
    P: ProfileDirectory,
    M: MailerTrait + 'static,
{
    /// Repository for attempt persistence
    repository: Arc<R>,
    /// Directory resolving attempt owners to notification recipients
    profiles: Arc<P>,
    /// Mail provider used for inline delivery
    mailer: Arc<M>,
    /// Background queue used for queued delivery
    queue: MailQueue,
    /// Service configuration
    config: AttemptServiceConfig,
}

impl<R, P, M> AttemptService<R, P, M>
where
    R: AttemptRepository,
    P: ProfileDirectory,
    M: MailerTrait + 'static,
{
    /// Create a new attempt service
    ///
    /// Spawns the background mail worker; the service must be constructed
    /// inside a tokio runtime.
    pub fn new(
        repository: Arc<R>,
        profiles: Arc<P>,
        mailer: Arc<M>,
        config: AttemptServiceConfig,
    ) -> Self {
        let queue = MailQueue::spawn(mailer.clone());

        Self {
            repository,
            profiles,
            mailer,
            queue,
            config,
        }
    }

    /// Record a new verification attempt
    ///
    /// Intended to be used by verification-implementation plugins to create
    /// attempt records when a learner starts an identity check.
    ///
    /// # Arguments
    ///
    /// * `user_id` - the user performing the verification attempt
    /// * `name` - the name being ID verified
    /// * `status` - the initial status of the attempt, as a wire string
    /// * `expiration_at` - when the attempt expires, if known
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The id of the created attempt
    /// * `Err(DomainError)` - Invalid status or persistence failure
    pub async fn create_attempt(
        &self,
        user_id: Uuid,
        name: &str,
        status: &str,
        expiration_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Uuid> {
        let status = Self::parse_status(status)?;

        let attempt = VerificationAttempt::new(user_id, name.to_string(), status, expiration_at);
        let created = self.repository.create(attempt).await?;

        tracing::info!(
            attempt_id = %created.id,
            user_id = %user_id,
            status = %created.status,
            event = "attempt_created",
            "Recorded new verification attempt"
        );

        Ok(created.id)
    }

    /// Update the status of a verification attempt
    ///
    /// Intended to be used by verification-implementation plugins to move
    /// existing attempts through the status set. Only the status (and the
    /// update timestamp) change; every other field is untouched.
    ///
    /// # Arguments
    ///
    /// * `attempt_id` - the attempt to update
    /// * `status` - the new status, as a wire string
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The status was persisted
    /// * `Err(DomainError)` - Invalid status, unknown attempt, or
    ///   persistence failure
    pub async fn update_attempt_status(
        &self,
        attempt_id: Uuid,
        status: &str,
    ) -> DomainResult<()> {
        let parsed = Self::parse_status(status)?;

        let updated = self.repository.update_status(attempt_id, parsed).await?;
        if !updated {
            tracing::error!(
                attempt_id = %attempt_id,
                status = status,
                event = "attempt_not_found",
                "Verification attempt was not found when updating the attempt status"
            );
            return Err(AttemptError::NotFound {
                id: attempt_id.to_string(),
            }
            .into());
        }

        tracing::info!(
            attempt_id = %attempt_id,
            status = status,
            event = "attempt_status_updated",
            "Updated verification attempt status"
        );

        Ok(())
    }

    /// Send an approval email to the learner associated with the attempt
    ///
    /// Resolves the attempt's owner through the profile directory, renders
    /// the approval notification, and delivers it through the configured
    /// path: queued hand-off to the background mail worker, or an inline
    /// provider call.
    pub async fn send_approval_email(&self, attempt: &VerificationAttempt) -> DomainResult<()> {
        let profile = self
            .profiles
            .find_by_user(attempt.user_id)
            .await?
            .ok_or_else(|| {
                tracing::error!(
                    attempt_id = %attempt.id,
                    user_id = %attempt.user_id,
                    event = "profile_not_found",
                    "No profile found for attempt owner when sending approval email"
                );
                AttemptError::ProfileNotFound {
                    user_id: attempt.user_id.to_string(),
                }
            })?;

        let expiration_at = attempt
            .expiration_at
            .unwrap_or_else(|| Utc::now() + Duration::days(self.config.default_validity_days));
        let expiration_date = expiration_at.format("%m/%d/%Y").to_string();

        let message = approval_email(&self.config.platform_name, &profile, &expiration_date);
        let recipient = mask_email(&message.to_email);

        match self.config.delivery {
            DeliveryMode::Queued => {
                self.queue.enqueue(message)?;
                tracing::info!(
                    attempt_id = %attempt.id,
                    recipient = %recipient,
                    event = "approval_email_enqueued",
                    "Approval email handed to mail queue"
                );
            }
            DeliveryMode::Direct => {
                let message_id =
                    self.mailer.send(&message).await.map_err(|e| {
                        tracing::error!(
                            attempt_id = %attempt.id,
                            recipient = %recipient,
                            error = %e,
                            event = "approval_email_failed",
                            "Failed to send approval email"
                        );
                        DomainError::Internal {
                            message: format!("Failed to send approval email: {}", e),
                        }
                    })?;
                tracing::info!(
                    attempt_id = %attempt.id,
                    recipient = %recipient,
                    message_id = %message_id,
                    event = "approval_email_sent",
                    "Approval email sent"
                );
            }
        }

        Ok(())
    }

    /// Fetch an attempt by id
    pub async fn find_attempt(&self, attempt_id: Uuid) -> DomainResult<Option<VerificationAttempt>> {
        self.repository.find_by_id(attempt_id).await
    }

    /// List a user's attempts, newest first
    pub async fn list_attempts(&self, user_id: Uuid) -> DomainResult<Vec<VerificationAttempt>> {
        self.repository.find_by_user(user_id).await
    }

    /// Validate a wire status string against the allowed set
    fn parse_status(status: &str) -> DomainResult<AttemptStatus> {
        AttemptStatus::from_str(status).ok_or_else(|| {
            let allowed = AttemptStatus::ALLOWED.join(", ");
            tracing::error!(
                status = status,
                allowed = %allowed,
                event = "invalid_attempt_status",
                "Attempt operation called with invalid status. Status must be one of the allowed set"
            );
            AttemptError::InvalidStatus {
                status: status.to_string(),
                allowed,
            }
            .into()
        })
    }
}

//! Asynchronous mail dispatch queue.
//!
//! The queue is the task-queue seam between the attempt service and the
//! mail provider: enqueueing is cheap and synchronous, and a background
//! worker owns all provider I/O. A failed send is logged and the worker
//! keeps draining subsequent messages.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

use vf_shared::utils::email::mask_email;

use crate::errors::NotificationError;

use super::traits::MailerTrait;
use super::types::EmailMessage;

/// Handle to the background mail worker
///
/// Cloning the handle is cheap; all clones feed the same worker.
#[derive(Clone)]
pub struct MailQueue {
    sender: mpsc::UnboundedSender<EmailMessage>,
}

impl MailQueue {
    /// Spawn the worker task and return a queue handle
    ///
    /// The worker drains queued messages through the given mailer until
    /// every handle has been dropped.
    pub fn spawn<M: MailerTrait + 'static>(mailer: Arc<M>) -> Self {
        let (sender, mut receiver) = mpsc::unbounded_channel::<EmailMessage>();

        tokio::spawn(async move {
            while let Some(message) = receiver.recv().await {
                let recipient = mask_email(&message.to_email);
                match mailer.send(&message).await {
                    Ok(message_id) => {
                        info!(
                            recipient = %recipient,
                            message_id = %message_id,
                            event = "mail_sent",
                            "Queued email delivered"
                        );
                    }
                    Err(e) => {
                        error!(
                            recipient = %recipient,
                            error = %e,
                            event = "mail_send_failed",
                            "Failed to deliver queued email"
                        );
                    }
                }
            }
        });

        Self { sender }
    }

    /// Hand a message to the worker
    ///
    /// Returns immediately; delivery happens in the background.
    pub fn enqueue(&self, message: EmailMessage) -> Result<(), NotificationError> {
        info!(
            recipient = %mask_email(&message.to_email),
            subject = %message.subject,
            event = "mail_enqueued",
            "Enqueued email for background delivery"
        );

        self.sender
            .send(message)
            .map_err(|_| NotificationError::QueueClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    struct RecordingMailer {
        sent: Mutex<Vec<EmailMessage>>,
        should_fail: bool,
    }

    impl RecordingMailer {
        fn new(should_fail: bool) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                should_fail,
            }
        }
    }

    #[async_trait]
    impl MailerTrait for RecordingMailer {
        async fn send(&self, message: &EmailMessage) -> Result<String, String> {
            if self.should_fail {
                return Err("provider error".to_string());
            }
            self.sent.lock().unwrap().push(message.clone());
            Ok(format!("msg_{}", self.sent.lock().unwrap().len()))
        }
    }

    fn sample_message(subject: &str) -> EmailMessage {
        EmailMessage {
            to_email: "learner@example.com".to_string(),
            to_name: "Tester McTest".to_string(),
            subject: subject.to_string(),
            body: "body".to_string(),
        }
    }

    async fn wait_for<F: Fn() -> bool>(condition: F) {
        for _ in 0..50 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("condition not reached in time");
    }

    #[tokio::test]
    async fn test_enqueue_delivers_in_background() {
        let mailer = Arc::new(RecordingMailer::new(false));
        let queue = MailQueue::spawn(mailer.clone());

        queue.enqueue(sample_message("first")).unwrap();
        queue.enqueue(sample_message("second")).unwrap();

        wait_for(|| mailer.sent.lock().unwrap().len() == 2).await;

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent[0].subject, "first");
        assert_eq!(sent[1].subject, "second");
    }

    #[tokio::test]
    async fn test_worker_survives_provider_failures() {
        let failing = Arc::new(RecordingMailer::new(true));
        let queue = MailQueue::spawn(failing.clone());

        // A failed send must not kill the worker
        queue.enqueue(sample_message("doomed")).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        queue.enqueue(sample_message("also doomed")).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        // Channel still open, nothing delivered
        assert!(failing.sent.lock().unwrap().is_empty());
        assert!(queue.enqueue(sample_message("still open")).is_ok());
    }
}

//! Notification module for verification status emails
//!
//! This module provides the pieces the attempt service composes to notify
//! learners about verification outcomes:
//! - Message construction for the approval notification
//! - A narrow mailer trait implemented by the infrastructure providers
//! - An asynchronous mail queue backed by a background worker task

mod messages;
mod queue;
mod traits;
mod types;

pub use messages::approval_email;
pub use queue::MailQueue;
pub use traits::MailerTrait;
pub use types::EmailMessage;

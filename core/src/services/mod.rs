//! Business services containing domain logic and use cases.

pub mod attempt;
pub mod notification;

// Re-export commonly used types
pub use attempt::{AttemptService, AttemptServiceConfig};
pub use notification::{EmailMessage, MailQueue, MailerTrait};

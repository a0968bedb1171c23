//! # VeriFlow Core
//!
//! Core business logic and domain layer for the VeriFlow backend.
//! This crate contains domain entities, the attempt-tracking and
//! notification services, repository interfaces, and error types that
//! form the plugin-facing API of the verification subsystem.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AttemptStatus, UserProfile, VerificationAttempt};
pub use errors::{AttemptError, DomainError, DomainResult, NotificationError};
pub use repositories::{
    AttemptRepository, MockAttemptRepository, MockProfileDirectory, ProfileDirectory,
};
pub use services::{
    AttemptService, AttemptServiceConfig, EmailMessage, MailQueue, MailerTrait,
};

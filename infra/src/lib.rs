//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the VeriFlow
//! verification subsystem. It provides concrete implementations for
//! database access and email delivery.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL implementations using SQLx
//! - **Email**: Transactional email provider integrations (Brevo, mock)
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `brevo-email`: Enable the Brevo email provider (default)
//! - `mock-services`: Enable mock implementations for testing

// Re-export core types for convenience
pub use vf_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email module - external mail providers
pub mod email;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Handles database connection settings and email provider
    //! credentials, loaded from the environment.

    use vf_shared::config::{DatabaseConfig, EmailConfig};

    /// Infrastructure configuration settings
    #[derive(Debug, Clone)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
        /// Email provider configuration
        pub email: EmailConfig,
    }

    impl Default for InfrastructureConfig {
        fn default() -> Self {
            Self {
                database: DatabaseConfig::default(),
                email: EmailConfig::default(),
            }
        }
    }

    impl InfrastructureConfig {
        /// Load infrastructure configuration from environment variables
        pub fn from_env() -> Self {
            dotenvy::dotenv().ok(); // Load .env file if present

            Self {
                database: DatabaseConfig::from_env(),
                email: EmailConfig::from_env(),
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

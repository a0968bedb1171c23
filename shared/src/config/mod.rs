//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `email` - Email delivery and platform branding configuration
//! - `environment` - Environment detection and logging configuration

pub mod database;
pub mod email;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use email::{DeliveryMode, EmailConfig};
pub use environment::{Environment, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Email delivery configuration
    pub email: EmailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            database: DatabaseConfig::default(),
            email: EmailConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

//! Shared utilities and common types for VeriFlow server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (email validation and masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, DeliveryMode, EmailConfig, Environment, LoggingConfig};
pub use utils::email;

//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Repository pattern implementations

pub mod mysql;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

use vf_shared::config::DatabaseConfig;

use crate::InfrastructureError;

// Re-export commonly used types
pub use mysql::{MySqlAttemptRepository, MySqlProfileDirectory};

/// Create a MySQL connection pool from configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    tracing::info!(
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .test_before_acquire(true)
        .connect(&config.url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database pool: {}", e);
            InfrastructureError::Database(e)
        })?;

    tracing::info!("Database connection pool created successfully");

    Ok(pool)
}

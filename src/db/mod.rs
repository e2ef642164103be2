//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization, migrations and the startup retry loop
//! - SQLite pragma configuration
//! - Repository layer for database operations

pub mod migrations;
pub mod repo;

pub use migrations::{init_db, init_db_with_retry, CONNECT_RETRY_DELAY, MAX_CONNECT_ATTEMPTS};
pub use repo::Repository;

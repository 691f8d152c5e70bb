//! # SQLite Storage Module
//!
//! This module contains all SQLite-based storage implementations.
//!
//! ## Components
//!
//! - **connection.rs** - SQLite database connection management and schema setup
//! - **repositories/** - SQLite-based repository implementations

pub mod connection;
pub mod repositories;

// Re-export the main types for external use
pub use connection::DbConnection;
pub use repositories::{
    AssessmentRepository, CheckInRepository, ProfileRepository, ReminderRepository,
};

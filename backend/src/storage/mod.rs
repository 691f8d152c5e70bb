//! # Storage Module
//!
//! Handles all data persistence operations for the wellness tracker.
//!
//! This module abstracts away the specific storage implementation details and provides
//! a consistent interface for persisting and retrieving data. The implementation can
//! be swapped out (SQLite, PostgreSQL, cloud storage, etc.) without affecting the
//! domain logic or REST layers.
//!
//! ## Key Responsibilities
//!
//! - **Data Persistence**: Saving profiles, assessment and check-in records, and reminders
//! - **Data Retrieval**: Loading stored data back into memory, most recent first
//! - **Storage Abstraction**: Providing a consistent API regardless of storage backend
//! - **Connection Management**: Handling database connections and lifecycle
//! - **Ownership Filtering**: Every record query is scoped to its owning profile
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: SQLite database accessed through SQLx
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Interface Segregation**: Focused interfaces for specific data operations
//! - **Dependency Inversion**: Domain depends on storage abstractions, not implementations
//! - **Testability**: Each repository is tested against an in-memory database

pub mod sqlite;
pub mod traits;

// Re-export the main types that other modules need
pub use sqlite::{
    AssessmentRepository, CheckInRepository, DbConnection, ProfileRepository,
    ReminderRepository,
};
pub use traits::{AssessmentStorage, CheckInStorage, ProfileStorage, ReminderStorage};

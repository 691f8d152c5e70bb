//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the wellness tracker application.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Error translation from domain to HTTP status codes
//! - Request logging and monitoring
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: RESTful HTTP interfaces for all operations
//! - **Error Handling**: Converting domain errors to proper HTTP responses
//! - **Serialization**: JSON request/response handling
//! - **Logging**: Request/response logging for debugging and monitoring
//!
//! ## Design Principles
//!
//! - **REST Compliance**: Following RESTful design patterns
//! - **Error Transparency**: Clear error messages for debugging
//! - **Domain Separation**: Pure translation layer without business logic

use axum::http::StatusCode;

use crate::domain::SubmissionError;

pub mod assessment_apis;
pub mod checkin_apis;
pub mod mappers;
pub mod pregnancy_apis;
pub mod profile_apis;
pub mod reminder_apis;

#[cfg(test)]
pub mod test_utils;

/// Map a submission failure to the status it travels as.
///
/// Caller mistakes map to 400, upstream scoring failures to 502, and
/// storage failures to 500.
pub fn submission_status(error: &SubmissionError) -> StatusCode {
    match error {
        SubmissionError::Incomplete { .. } | SubmissionError::Validation { .. } => {
            StatusCode::BAD_REQUEST
        }
        SubmissionError::Network { .. } | SubmissionError::Schema { .. } => StatusCode::BAD_GATEWAY,
        SubmissionError::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

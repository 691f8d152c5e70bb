//! Submission error taxonomy.
//!
//! Every failure path of the two submit flows (mood assessment,
//! physical check-in) collapses into one enum so the REST layer can
//! map variants to status codes and the UI can tell "fix your input"
//! from "try again later" from "something broke".
//!
//! Local failures (`Incomplete`, `Validation`) are raised before any
//! network cost. `Network` is the only retryable variant; nothing in
//! the backend retries automatically.

use crate::domain::assessment_session::SessionError;
use crate::scoring::ScoringApiError;

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The questionnaire still has unanswered questions, listed in
    /// questionnaire order.
    #[error("Unanswered questions: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    /// Submitted values failed local validation.
    #[error("{}", .issues.join("; "))]
    Validation { issues: Vec<String> },

    /// The scoring service could not be reached or answered with an
    /// error. Worth retrying; the submitted data is still intact.
    #[error("The scoring service is unavailable: {reason}")]
    Network { reason: String },

    /// The scoring service answered, but not in a shape we understand.
    #[error("The scoring service sent an unusable response: {reason}")]
    Schema { reason: String },

    /// The scored record could not be saved.
    #[error("Could not save the record: {reason}")]
    Persistence { reason: String },
}

impl SubmissionError {
    /// Whether the user should be offered a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmissionError::Network { .. })
    }

    pub fn validation(issue: impl Into<String>) -> Self {
        SubmissionError::Validation {
            issues: vec![issue.into()],
        }
    }
}

impl From<SessionError> for SubmissionError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::Incomplete { missing } => SubmissionError::Incomplete { missing },
            other => SubmissionError::validation(other.to_string()),
        }
    }
}

impl From<ScoringApiError> for SubmissionError {
    fn from(error: ScoringApiError) -> Self {
        match error {
            ScoringApiError::Schema(reason) => SubmissionError::Schema { reason },
            retryable => SubmissionError::Network {
                reason: retryable.to_string(),
            },
        }
    }
}

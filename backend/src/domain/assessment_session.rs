//! Mood questionnaire session logic.
//!
//! Tracks EPDS answers as they arrive, gates submission on completeness,
//! and walks a session through the submit lifecycle. An incomplete sheet
//! never reaches the network: the gate reports exactly which questions
//! are missing, in questionnaire order, and leaves the session open.
//!
//! A failed submission keeps every answer and stays re-submittable; it
//! is up to the caller to try again, nothing here retries on its own.

use std::collections::HashMap;

use crate::domain::models::assessment::{
    AnswerValidationError, MAX_ANSWER_SCORE, QUESTION_COUNT, QUESTION_IDS,
};

/// Lifecycle of one questionnaire session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Answers still being collected or corrected
    Collecting,
    /// Ordered answers handed to the scoring service, awaiting a result
    Submitting,
    /// Scored and persisted; the session is closed
    Completed,
    /// Last submission failed; answers intact, open for another attempt
    Failed,
}

/// Completeness of the answer sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerProgress {
    Unanswered,
    PartiallyAnswered,
    FullyAnswered,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    InvalidAnswer(#[from] AnswerValidationError),
    #[error("Questionnaire is incomplete")]
    Incomplete { missing: Vec<String> },
    #[error("A submission is already in flight")]
    SubmissionInProgress,
    #[error("This assessment has already been submitted")]
    AlreadyCompleted,
}

/// One in-progress questionnaire
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    answers: HashMap<String, u8>,
    state: SessionState,
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            state: SessionState::Collecting,
        }
    }

    /// Build a session from a full or partial answer map.
    ///
    /// Every key must be a known question id and every score in range;
    /// the map may still be incomplete.
    pub fn from_answers(answers: &HashMap<String, u8>) -> Result<Self, SessionError> {
        let mut session = Self::new();
        for (question_id, score) in answers {
            session.record_answer(question_id, *score)?;
        }
        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Record or overwrite one answer.
    ///
    /// Refused while a submission is in flight or after completion.
    pub fn record_answer(&mut self, question_id: &str, score: u8) -> Result<(), SessionError> {
        match self.state {
            SessionState::Submitting => return Err(SessionError::SubmissionInProgress),
            SessionState::Completed => return Err(SessionError::AlreadyCompleted),
            SessionState::Collecting => {}
            // Editing an answer after a failure reopens the sheet
            SessionState::Failed => self.state = SessionState::Collecting,
        }

        if !QUESTION_IDS.contains(&question_id) {
            return Err(AnswerValidationError::UnknownQuestion(question_id.to_string()).into());
        }
        if score > MAX_ANSWER_SCORE {
            return Err(AnswerValidationError::ScoreOutOfRange {
                question: question_id.to_string(),
                value: score,
            }
            .into());
        }

        self.answers.insert(question_id.to_string(), score);
        Ok(())
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn progress(&self) -> AnswerProgress {
        match self.answers.len() {
            0 => AnswerProgress::Unanswered,
            n if n < QUESTION_COUNT => AnswerProgress::PartiallyAnswered,
            _ => AnswerProgress::FullyAnswered,
        }
    }

    /// Unanswered question ids, in questionnaire order.
    pub fn missing_questions(&self) -> Vec<&'static str> {
        QUESTION_IDS
            .iter()
            .filter(|id| !self.answers.contains_key(**id))
            .copied()
            .collect()
    }

    /// Whether a submission attempt would pass the gate right now
    pub fn can_submit(&self) -> bool {
        self.progress() == AnswerProgress::FullyAnswered
            && matches!(self.state, SessionState::Collecting | SessionState::Failed)
    }

    /// Answers in questionnaire order, once the sheet is complete.
    pub fn ordered_answers(&self) -> Option<[u8; QUESTION_COUNT]> {
        if self.progress() != AnswerProgress::FullyAnswered {
            return None;
        }
        let mut ordered = [0u8; QUESTION_COUNT];
        for (slot, id) in ordered.iter_mut().zip(QUESTION_IDS.iter()) {
            *slot = *self.answers.get(*id)?;
        }
        Some(ordered)
    }

    /// Plain sum of the recorded answers.
    ///
    /// Not a clinical score; only used for the explicitly requested
    /// unscored fallback when the scoring service is unreachable.
    pub fn local_sum(&self) -> u32 {
        self.answers.values().map(|v| *v as u32).sum()
    }

    /// Pass the submission gate and move to `Submitting`.
    ///
    /// Returns the ordered answer array for the scoring request. An
    /// incomplete sheet fails with the missing ids in questionnaire
    /// order and the session stays open.
    pub fn begin_submission(&mut self) -> Result<[u8; QUESTION_COUNT], SessionError> {
        match self.state {
            SessionState::Submitting => return Err(SessionError::SubmissionInProgress),
            SessionState::Completed => return Err(SessionError::AlreadyCompleted),
            SessionState::Collecting | SessionState::Failed => {}
        }

        let missing = self.missing_questions();
        if !missing.is_empty() {
            return Err(SessionError::Incomplete {
                missing: missing.into_iter().map(String::from).collect(),
            });
        }

        // Complete by the check above
        let ordered = match self.ordered_answers() {
            Some(ordered) => ordered,
            None => {
                return Err(SessionError::Incomplete {
                    missing: self.missing_questions().into_iter().map(String::from).collect(),
                })
            }
        };

        self.state = SessionState::Submitting;
        Ok(ordered)
    }

    /// Mark the in-flight submission as scored and persisted.
    pub fn complete_submission(&mut self) {
        self.state = SessionState::Completed;
    }

    /// Mark the in-flight submission as failed.
    ///
    /// Answers are kept and the session can be submitted again.
    pub fn fail_submission(&mut self) {
        self.state = SessionState::Failed;
    }
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

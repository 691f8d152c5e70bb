use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::assessment_session::AssessmentSession;
use crate::domain::commands::assessments::{
    AssessmentHistoryQuery, AssessmentHistoryResult, DeleteAssessmentCommand,
    SubmitAssessmentCommand, SubmitAssessmentResult,
};
use crate::domain::errors::SubmissionError;
use crate::domain::models::assessment::{DomainAssessment, EpdsQuestion, QUESTIONS};
use crate::domain::profile_service::ProfileService;
use crate::scoring::{LocalSumProvider, ScoreProvider, ScoringMode};
use crate::storage::{AssessmentRepository, AssessmentStorage};

/// Service orchestrating the mood assessment flow
#[derive(Clone)]
pub struct AssessmentService {
    repository: AssessmentRepository,
    profile_service: ProfileService,
    scorer: Arc<dyn ScoreProvider>,
    fallback: LocalSumProvider,
    mode: ScoringMode,
}

impl AssessmentService {
    /// Create a new AssessmentService
    pub fn new(
        repository: AssessmentRepository,
        profile_service: ProfileService,
        scorer: Arc<dyn ScoreProvider>,
        mode: ScoringMode,
    ) -> Self {
        Self {
            repository,
            profile_service,
            scorer,
            fallback: LocalSumProvider::new(),
            mode,
        }
    }

    /// The questionnaire, in the order answers are scored.
    pub fn list_questions(&self) -> &'static [EpdsQuestion] {
        &QUESTIONS
    }

    /// Validate, score and persist a completed questionnaire.
    ///
    /// Validation failures are raised before any network cost. When the
    /// scoring service fails retryably and fallback is allowed, a local
    /// sum is persisted instead, clearly labeled as unscored. Nothing is
    /// persisted on any other failure; the caller keeps the answers and
    /// may resubmit.
    pub async fn submit_assessment(
        &self,
        command: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, SubmissionError> {
        info!(
            "Submitting assessment: {} answers, fallback allowed: {}",
            command.answers.len(),
            command.allow_unscored_fallback
        );

        let profile = self
            .profile_service
            .resolve_profile(command.profile_id.as_deref())
            .await
            .map_err(|err| SubmissionError::validation(err.to_string()))?;

        let mut session = AssessmentSession::from_answers(&command.answers)?;
        let responses = session.begin_submission()?;

        let scored = match self.scorer.score(responses).await {
            Ok(scored) => scored,
            Err(err) if err.is_retryable() && self.allows_fallback(&command) => {
                warn!("Scoring service unavailable, recording local sum: {}", err);
                self.fallback.score(responses).await?
            }
            Err(err) => {
                session.fail_submission();
                return Err(err.into());
            }
        };

        let now = Utc::now();
        let assessment = DomainAssessment {
            id: DomainAssessment::generate_id(now.timestamp_millis() as u64),
            profile_id: profile.id.clone(),
            responses: responses.to_vec(),
            epds_score: scored.epds_score,
            risk_level: scored.risk_level,
            assessment: scored.assessment,
            anxiety_flag: scored.anxiety_flag,
            actions: scored.actions,
            additional_actions: scored.additional_actions,
            score_source: scored.source,
            submitted_at: now.to_rfc3339(),
        };

        if let Err(err) = self.repository.store_assessment(&assessment).await {
            session.fail_submission();
            return Err(SubmissionError::Persistence {
                reason: err.to_string(),
            });
        }
        session.complete_submission();

        info!(
            "Stored assessment {} for profile {}: score {} ({})",
            assessment.id,
            profile.id,
            assessment.epds_score,
            assessment.score_source.as_str()
        );

        Ok(SubmitAssessmentResult {
            assessment,
            success_message: "Assessment submitted successfully".to_string(),
        })
    }

    /// List past assessments, most recent first
    pub async fn get_history(&self, query: AssessmentHistoryQuery) -> Result<AssessmentHistoryResult> {
        let profile = self
            .profile_service
            .resolve_profile(query.profile_id.as_deref())
            .await?;
        info!("Listing assessments for profile {}", profile.id);

        let assessments = self
            .repository
            .list_assessments(&profile.id, query.limit)
            .await?;

        Ok(AssessmentHistoryResult { assessments })
    }

    /// Delete a stored assessment
    pub async fn delete_assessment(&self, command: DeleteAssessmentCommand) -> Result<()> {
        info!("Deleting assessment: {}", command.assessment_id);

        let deleted = self
            .repository
            .delete_assessment(&command.assessment_id)
            .await?;
        if !deleted {
            return Err(anyhow::anyhow!(
                "Assessment not found: {}",
                command.assessment_id
            ));
        }

        Ok(())
    }

    fn allows_fallback(&self, command: &SubmitAssessmentCommand) -> bool {
        command.allow_unscored_fallback || self.mode == ScoringMode::RemoteWithLocalFallback
    }
}

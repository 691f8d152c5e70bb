//! Scoring authorities behind a common interface.
//!
//! There is exactly one authoritative way to score a questionnaire:
//! the remote service. The local sum exists only as an explicitly
//! labeled degraded mode for when that service is unreachable, and the
//! two are never mixed silently; every persisted score carries its
//! [`ScoreSource`].

use async_trait::async_trait;

use crate::domain::models::assessment::{ScoreSource, QUESTION_COUNT};
use crate::scoring::client::{
    EpdsScoreResponse, ScoringApi, ScoringApiError, VitalsPayload,
};

/// Risk label recorded when a score is a local sum, never a clinical
/// assessment.
pub const UNSCORED_RISK_LABEL: &str = "unscored";

/// What happens to a submission when the remote scorer is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringMode {
    /// Surface the failure; the caller may retry later.
    RemoteOnly,
    /// Persist a local sum labeled [`UNSCORED_RISK_LABEL`] instead.
    RemoteWithLocalFallback,
}

impl ScoringMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringMode::RemoteOnly => "remote_only",
            ScoringMode::RemoteWithLocalFallback => "remote_with_local_fallback",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "remote_only" => Some(ScoringMode::RemoteOnly),
            "remote_with_local_fallback" => Some(ScoringMode::RemoteWithLocalFallback),
            _ => None,
        }
    }
}

/// A fully scored questionnaire, ready to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAssessment {
    pub epds_score: i64,
    pub risk_level: String,
    pub assessment: Option<String>,
    pub anxiety_flag: Option<bool>,
    pub actions: Vec<String>,
    pub additional_actions: Vec<String>,
    pub source: ScoreSource,
}

/// Scores a completed questionnaire.
#[async_trait]
pub trait ScoreProvider: Send + Sync {
    /// Score answers given in fixed questionnaire order.
    async fn score(
        &self,
        responses: [u8; QUESTION_COUNT],
    ) -> Result<ScoredAssessment, ScoringApiError>;

    /// Which source this provider's results carry.
    fn source(&self) -> ScoreSource;
}

/// Predicts a risk label from vital readings.
#[async_trait]
pub trait RiskPredictor: Send + Sync {
    /// Returns the canonical risk label for the readings.
    async fn predict(&self, vitals: &VitalsPayload) -> Result<String, ScoringApiError>;
}

/// The authoritative provider: defers to the remote scoring service.
#[derive(Clone)]
pub struct RemoteScoreProvider {
    api: ScoringApi,
}

impl RemoteScoreProvider {
    pub fn new(api: ScoringApi) -> Self {
        Self { api }
    }

    /// Turn a service response into a persistable result.
    ///
    /// A 2xx body without a score or without any risk label is a
    /// schema failure; half-scored records are never persisted.
    fn convert(response: EpdsScoreResponse) -> Result<ScoredAssessment, ScoringApiError> {
        let epds_score = response
            .epds_score
            .ok_or_else(|| ScoringApiError::Schema("response carries no EPDS score".to_string()))?;
        let risk_level = response
            .risk_label()
            .ok_or_else(|| ScoringApiError::Schema("response carries no risk label".to_string()))?
            .to_string();

        Ok(ScoredAssessment {
            epds_score,
            risk_level,
            assessment: response.assessment,
            anxiety_flag: response.anxiety_flag,
            actions: response.actions,
            additional_actions: response.additional_actions,
            source: ScoreSource::Remote,
        })
    }
}

#[async_trait]
impl ScoreProvider for RemoteScoreProvider {
    async fn score(
        &self,
        responses: [u8; QUESTION_COUNT],
    ) -> Result<ScoredAssessment, ScoringApiError> {
        let response = self.api.score_epds(responses).await?;
        Self::convert(response)
    }

    fn source(&self) -> ScoreSource {
        ScoreSource::Remote
    }
}

#[async_trait]
impl RiskPredictor for RemoteScoreProvider {
    async fn predict(&self, vitals: &VitalsPayload) -> Result<String, ScoringApiError> {
        let response = self.api.predict_risk(vitals).await?;
        response
            .label()
            .map(str::to_string)
            .ok_or_else(|| ScoringApiError::Schema("response carries no risk label".to_string()))
    }
}

/// Degraded-mode provider: a plain sum of the answers.
///
/// Only used when the remote service is unreachable and the caller
/// opted in. Its results are labeled [`UNSCORED_RISK_LABEL`] so they
/// can never pass for a clinical assessment.
#[derive(Clone, Default)]
pub struct LocalSumProvider;

impl LocalSumProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScoreProvider for LocalSumProvider {
    async fn score(
        &self,
        responses: [u8; QUESTION_COUNT],
    ) -> Result<ScoredAssessment, ScoringApiError> {
        let sum: i64 = responses.iter().map(|v| *v as i64).sum();
        Ok(ScoredAssessment {
            epds_score: sum,
            risk_level: UNSCORED_RISK_LABEL.to_string(),
            assessment: Some(
                "Approximate local total; the scoring service was unreachable".to_string(),
            ),
            anxiety_flag: None,
            actions: Vec::new(),
            additional_actions: Vec::new(),
            source: ScoreSource::LocalSum,
        })
    }

    fn source(&self) -> ScoreSource {
        ScoreSource::LocalSum
    }
}

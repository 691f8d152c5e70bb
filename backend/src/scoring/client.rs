//! REST client for the external scoring and prediction service.
//!
//! Wraps the two service endpoints (`POST /epds` for questionnaire
//! scoring, `POST /predict` for vitals risk prediction) using
//! [`reqwest`]. Both endpoints are schema-loose: field names vary
//! between deployments, so the response types accept every observed
//! spelling and the accessors pick whichever field arrived.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::models::assessment::QUESTION_COUNT;

/// Default hard cap on a single scoring request, in seconds. The
/// submit flow must never hang on a stuck upstream.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from the scoring service REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ScoringApiError {
    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Scoring service error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered 2xx but the body was not usable.
    #[error("Unexpected scoring service response: {0}")]
    Schema(String),
}

impl ScoringApiError {
    /// Whether trying the same request again could plausibly succeed.
    ///
    /// Transport failures, timeouts, and service-side errors are worth
    /// a retry; a response we cannot understand is not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ScoringApiError::Request(_) | ScoringApiError::Api { .. } => true,
            ScoringApiError::Schema(_) => false,
        }
    }
}

/// Body for `POST /epds`.
#[derive(Debug, Serialize)]
pub struct EpdsPayload {
    /// Answers in fixed questionnaire order.
    pub responses: [u8; QUESTION_COUNT],
}

/// Response from `POST /epds`.
///
/// The basic deployment returns `{epds_score, risk_level}`; the richer
/// one returns `{EPDS_Score, Assessment, Action, Anxiety_Flag,
/// Additional_Action}`. Every field is optional here and
/// [`EpdsScoreResponse::risk_label`] reconciles the two shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct EpdsScoreResponse {
    #[serde(alias = "EPDS_Score")]
    pub epds_score: Option<i64>,
    #[serde(alias = "Risk_Level")]
    pub risk_level: Option<String>,
    #[serde(alias = "Assessment")]
    pub assessment: Option<String>,
    #[serde(alias = "Anxiety_Flag")]
    pub anxiety_flag: Option<bool>,
    #[serde(default, alias = "Action")]
    pub actions: Vec<String>,
    #[serde(default, alias = "Additional_Action")]
    pub additional_actions: Vec<String>,
}

impl EpdsScoreResponse {
    /// Canonical risk label, whichever field the deployment sent.
    pub fn risk_label(&self) -> Option<&str> {
        self.risk_level.as_deref().or(self.assessment.as_deref())
    }
}

/// Body for `POST /predict`. Field spellings are part of the service
/// contract and must not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsPayload {
    pub age: u32,
    #[serde(rename = "SystolicBP")]
    pub systolic_bp: u32,
    #[serde(rename = "DiastolicBP")]
    pub diastolic_bp: u32,
    /// Blood sugar in mmol/L, sent without unit conversion.
    #[serde(rename = "BS")]
    pub blood_sugar: f64,
    #[serde(rename = "BodyTemp")]
    pub body_temp: f64,
    #[serde(rename = "HeartRate")]
    pub heart_rate: u32,
}

/// Response from `POST /predict`. Either field may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub prediction: Option<String>,
    pub risk_level: Option<String>,
}

impl PredictionResponse {
    /// Canonical risk label: `prediction` wins when both are present.
    pub fn label(&self) -> Option<&str> {
        self.prediction.as_deref().or(self.risk_level.as_deref())
    }
}

/// HTTP client for one scoring service instance.
#[derive(Clone)]
pub struct ScoringApi {
    client: reqwest::Client,
    api_url: String,
}

impl ScoringApi {
    /// Create a new client for a scoring service.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://host:5000`.
    /// * `timeout` - Hard cap per request; see [`DEFAULT_TIMEOUT_SECS`].
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, ScoringApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }

    /// Score a completed questionnaire.
    ///
    /// Sends `POST /epds` with the ordered answer array.
    pub async fn score_epds(
        &self,
        responses: [u8; QUESTION_COUNT],
    ) -> Result<EpdsScoreResponse, ScoringApiError> {
        let payload = EpdsPayload { responses };

        let response = self
            .client
            .post(format!("{}/epds", self.api_url))
            .json(&payload)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Predict a risk level from a set of vital readings.
    ///
    /// Sends `POST /predict` with the six readings.
    pub async fn predict_risk(
        &self,
        vitals: &VitalsPayload,
    ) -> Result<PredictionResponse, ScoringApiError> {
        let response = self
            .client
            .post(format!("{}/predict", self.api_url))
            .json(vitals)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`ScoringApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ScoringApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ScoringApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful response body into the expected type.
    ///
    /// A body that fails to parse is a [`ScoringApiError::Schema`],
    /// not a transport error, so callers can tell "service down" from
    /// "service speaking a different dialect".
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ScoringApiError> {
        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ScoringApiError::Schema(e.to_string()))
    }
}

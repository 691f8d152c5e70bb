//! # REST API for Mood Assessments
//!
//! Endpoints for the questionnaire catalog, assessment submission, and
//! assessment history.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use tracing::{error, info};

use super::submission_status;
use crate::domain::commands::assessments::{
    AssessmentHistoryQuery, DeleteAssessmentCommand, SubmitAssessmentCommand,
};
use crate::io::rest::mappers::assessment_mapper::AssessmentMapper;
use crate::AppState;
use shared::{
    AssessmentListResponse, QuestionnaireResponse, SubmitAssessmentRequest,
    SubmitAssessmentResponse,
};

/// Create a router for assessment related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_history).post(submit_assessment))
        .route("/questions", get(list_questions))
        .route("/:assessment_id", delete(delete_assessment))
}

/// Query parameters for the history API
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub profile_id: Option<String>,
    pub limit: Option<u32>,
}

/// List the fixed questionnaire
pub async fn list_questions(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/assessments/questions");

    let response = QuestionnaireResponse {
        questions: state
            .assessment_service
            .list_questions()
            .iter()
            .map(AssessmentMapper::question_to_dto)
            .collect(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Submit a completed questionnaire
pub async fn submit_assessment(
    State(state): State<AppState>,
    Json(request): Json<SubmitAssessmentRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/assessments - {} answers, fallback: {}",
        request.answers.len(),
        request.allow_unscored_fallback
    );

    let command = SubmitAssessmentCommand {
        profile_id: request.profile_id,
        answers: request.answers,
        allow_unscored_fallback: request.allow_unscored_fallback,
    };

    match state.assessment_service.submit_assessment(command).await {
        Ok(result) => {
            let response = SubmitAssessmentResponse {
                assessment: AssessmentMapper::to_dto(result.assessment),
                success_message: result.success_message,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to submit assessment: {}", e);
            (submission_status(&e), e.to_string()).into_response()
        }
    }
}

/// List past assessments, most recent first
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    info!("GET /api/assessments - query: {:?}", query);

    let domain_query = AssessmentHistoryQuery {
        profile_id: query.profile_id,
        limit: query.limit,
    };

    match state.assessment_service.get_history(domain_query).await {
        Ok(result) => {
            let response = AssessmentListResponse {
                assessments: AssessmentMapper::to_dto_list(result.assessments),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list assessments: {}", e);
            let status = if e.to_string().contains("not found")
                || e.to_string().contains("No active profile")
            {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Delete an assessment
pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/assessments/{}", assessment_id);

    let command = DeleteAssessmentCommand { assessment_id };

    match state.assessment_service.delete_assessment(command).await {
        Ok(()) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to delete assessment: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

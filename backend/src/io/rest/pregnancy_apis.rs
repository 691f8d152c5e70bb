//! # REST API for Pregnancy Progress
//!
//! Read-only endpoints computing progress and baby age from a profile's
//! stored data, or ad hoc from query parameters.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::commands::pregnancy::{GetBabyAgeCommand, GetProgressCommand};
use crate::io::rest::mappers::pregnancy_mapper::PregnancyMapper;
use crate::AppState;
use shared::{BabyAgeResponse, PregnancyProgressResponse};

/// Create a router for pregnancy related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/progress", get(get_progress))
        .route("/baby-age", get(get_baby_age))
}

/// Query parameters for the progress API
#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub profile_id: Option<String>,
    /// Compute for this due date (YYYY-MM-DD) instead of a profile
    pub due_date: Option<String>,
    /// Compute for this week instead of a profile
    pub week: Option<u32>,
}

/// Query parameters for the baby age API
#[derive(Debug, Deserialize)]
pub struct BabyAgeQuery {
    pub profile_id: Option<String>,
    /// Compute for this birthdate (YYYY-MM-DD) instead of a profile
    pub birthdate: Option<String>,
}

/// Compute pregnancy progress
pub async fn get_progress(
    State(state): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> impl IntoResponse {
    info!("GET /api/pregnancy/progress - query: {:?}", query);

    let command = GetProgressCommand {
        profile_id: query.profile_id,
        due_date: query.due_date,
        week: query.week,
    };

    match state.pregnancy_service.get_progress(command).await {
        Ok(result) => {
            let response = PregnancyProgressResponse {
                profile_id: result.profile_id,
                progress: PregnancyMapper::to_progress_dto(result.info),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to compute progress: {}", e);
            let status = if e.to_string().contains("not found")
                || e.to_string().contains("No active profile")
            {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Format the baby's age for a postpartum profile
pub async fn get_baby_age(
    State(state): State<AppState>,
    Query(query): Query<BabyAgeQuery>,
) -> impl IntoResponse {
    info!("GET /api/pregnancy/baby-age - query: {:?}", query);

    let command = GetBabyAgeCommand {
        profile_id: query.profile_id,
        birthdate: query.birthdate,
    };

    match state.pregnancy_service.get_baby_age(command).await {
        Ok(result) => {
            let response = BabyAgeResponse {
                profile_id: result.profile_id,
                baby_age: result.age,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to compute baby age: {}", e);
            let status = if e.to_string().contains("not found")
                || e.to_string().contains("No active profile")
            {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, e.to_string()).into_response()
        }
    }
}

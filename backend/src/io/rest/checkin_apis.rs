//! # REST API for Physical Check-ins
//!
//! Endpoints for submitting vital readings, check-in history, and
//! deleting past check-ins.

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
use crate::domain::commands::checkins::{
    CheckInHistoryQuery, DeleteCheckInCommand, SubmitCheckInCommand,
};
use crate::domain::models::checkin::VitalReadings;
use crate::io::rest::mappers::checkin_mapper::CheckInMapper;
use crate::AppState;
use shared::{CheckInListResponse, SubmitCheckInRequest, SubmitCheckInResponse};

/// Create a router for check-in related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_history).post(submit_checkin))
        .route("/:checkin_id", delete(delete_checkin))
}

/// Query parameters for the history API
#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub profile_id: Option<String>,
    pub limit: Option<u32>,
}

/// Submit a physical check-in
pub async fn submit_checkin(
    State(state): State<AppState>,
    Json(request): Json<SubmitCheckInRequest>,
) -> impl IntoResponse {
    info!("POST /api/checkins - request: {:?}", request);

    let command = SubmitCheckInCommand {
        profile_id: request.profile_id,
        readings: VitalReadings {
            age: request.age,
            systolic: request.systolic,
            diastolic: request.diastolic,
            heart_rate: request.heart_rate,
            blood_sugar: request.blood_sugar,
            body_temp: request.body_temp,
        },
    };

    match state.checkin_service.submit_checkin(command).await {
        Ok(result) => {
            let response = SubmitCheckInResponse {
                check_in: CheckInMapper::to_dto(result.checkin),
                success_message: result.success_message,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to submit check-in: {}", e);
            (submission_status(&e), e.to_string()).into_response()
        }
    }
}

/// List past check-ins, most recent first
pub async fn get_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> impl IntoResponse {
    info!("GET /api/checkins - query: {:?}", query);

    let domain_query = CheckInHistoryQuery {
        profile_id: query.profile_id,
        limit: query.limit,
    };

    match state.checkin_service.get_history(domain_query).await {
        Ok(result) => {
            let response = CheckInListResponse {
                check_ins: CheckInMapper::to_dto_list(result.checkins),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list check-ins: {}", e);
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

/// Delete a check-in
pub async fn delete_checkin(
    State(state): State<AppState>,
    Path(checkin_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/checkins/{}", checkin_id);

    let command = DeleteCheckInCommand { checkin_id };

    match state.checkin_service.delete_checkin(command).await {
        Ok(()) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to delete check-in: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

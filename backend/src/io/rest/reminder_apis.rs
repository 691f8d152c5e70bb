//! # REST API for Reminders
//!
//! Endpoints for creating, listing, updating, and deleting wellness
//! reminders.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::domain::commands::reminders::{
    CreateReminderCommand, DeleteReminderCommand, UpdateReminderCommand,
};
use crate::io::rest::mappers::reminder_mapper::ReminderMapper;
use crate::AppState;
use shared::{CreateReminderRequest, ReminderListResponse, ReminderResponse, UpdateReminderRequest};

/// Create a router for reminder related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reminders).post(create_reminder))
        .route("/:reminder_id", delete(delete_reminder).put(update_reminder))
}

/// Query parameters for the reminder list API
#[derive(Debug, Deserialize)]
pub struct ReminderListQuery {
    pub profile_id: Option<String>,
}

/// Create a new reminder
pub async fn create_reminder(
    State(state): State<AppState>,
    Json(request): Json<CreateReminderRequest>,
) -> impl IntoResponse {
    info!("POST /api/reminders - request: {:?}", request);

    let command = CreateReminderCommand {
        profile_id: request.profile_id,
        title: request.title,
        time_of_day: request.time_of_day,
        day_of_week: request.day_of_week,
    };

    match state.reminder_service.create_reminder(command).await {
        Ok(result) => {
            let response = ReminderResponse {
                reminder: ReminderMapper::to_dto(result.reminder),
                success_message: result.success_message,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create reminder: {}", e);
            let status = if e.to_string().contains("No active profile")
                || e.to_string().contains("not found")
            {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// List a profile's reminders
pub async fn list_reminders(
    State(state): State<AppState>,
    Query(query): Query<ReminderListQuery>,
) -> impl IntoResponse {
    info!("GET /api/reminders - query: {:?}", query);

    match state.reminder_service.list_reminders(query.profile_id.as_deref()).await {
        Ok(result) => {
            let response = ReminderListResponse {
                reminders: ReminderMapper::to_dto_list(result.reminders),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list reminders: {}", e);
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

/// Update a reminder
pub async fn update_reminder(
    State(state): State<AppState>,
    Path(reminder_id): Path<String>,
    Json(request): Json<UpdateReminderRequest>,
) -> impl IntoResponse {
    info!("PUT /api/reminders/{} - request: {:?}", reminder_id, request);

    let command = UpdateReminderCommand {
        reminder_id,
        title: request.title,
        time_of_day: request.time_of_day,
        day_of_week: None,
        is_active: request.is_active,
    };

    match state.reminder_service.update_reminder(command).await {
        Ok(result) => {
            let response = ReminderResponse {
                reminder: ReminderMapper::to_dto(result.reminder),
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update reminder: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::BAD_REQUEST
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Delete a reminder
pub async fn delete_reminder(
    State(state): State<AppState>,
    Path(reminder_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/reminders/{}", reminder_id);

    let command = DeleteReminderCommand { reminder_id };

    match state.reminder_service.delete_reminder(command).await {
        Ok(()) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to delete reminder: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::rest::test_utils::{create_test_profile, state};
    use axum::body::to_bytes;

    fn create_request(title: &str, time: &str) -> CreateReminderRequest {
        CreateReminderRequest {
            profile_id: None,
            title: title.to_string(),
            time_of_day: time.to_string(),
            day_of_week: None,
        }
    }

    #[tokio::test]
    async fn test_create_reminder_handler() {
        let state = state().await;
        create_test_profile(&state).await;

        let response = create_reminder(State(state), Json(create_request("Vitamins", "08:00")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let parsed: ReminderResponse = serde_json::from_slice(&body).expect("valid json");
        assert_eq!(parsed.reminder.title, "Vitamins");
        assert!(parsed.reminder.is_active);
    }

    #[tokio::test]
    async fn test_create_reminder_rejects_bad_time() {
        let state = state().await;
        create_test_profile(&state).await;

        let response = create_reminder(State(state), Json(create_request("Vitamins", "8 am")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_reminder_without_profile_is_not_found() {
        let state = state().await;

        let response = create_reminder(State(state), Json(create_request("Vitamins", "08:00")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_update_delete_handlers() {
        let state = state().await;
        create_test_profile(&state).await;

        let created = create_reminder(State(state.clone()), Json(create_request("Vitamins", "08:00")))
            .await
            .into_response();
        let body = to_bytes(created.into_body(), usize::MAX).await.expect("body");
        let parsed: ReminderResponse = serde_json::from_slice(&body).expect("valid json");

        let query = ReminderListQuery { profile_id: None };
        let listed = list_reminders(State(state.clone()), Query(query)).await.into_response();
        assert_eq!(listed.status(), StatusCode::OK);

        let update = UpdateReminderRequest {
            title: None,
            time_of_day: Some("21:00".to_string()),
            is_active: Some(false),
        };
        let updated = update_reminder(
            State(state.clone()),
            Path(parsed.reminder.id.clone()),
            Json(update),
        )
        .await
        .into_response();
        assert_eq!(updated.status(), StatusCode::OK);
        let body = to_bytes(updated.into_body(), usize::MAX).await.expect("body");
        let after: ReminderResponse = serde_json::from_slice(&body).expect("valid json");
        assert_eq!(after.reminder.time_of_day, "21:00");
        assert!(!after.reminder.is_active);

        let deleted = delete_reminder(State(state.clone()), Path(parsed.reminder.id.clone()))
            .await
            .into_response();
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let again = delete_reminder(State(state), Path(parsed.reminder.id)).await.into_response();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }
}

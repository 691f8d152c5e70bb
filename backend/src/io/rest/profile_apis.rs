//! # REST API for Profile Management
//!
//! Endpoints for creating, retrieving, updating, and deleting profiles,
//! plus tracking which profile is active.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get},
    Router,
};
use tracing::{error, info};

use crate::domain::commands::profiles::{CreateProfileCommand, UpdateProfileCommand};
use crate::io::rest::mappers::profile_mapper::ProfileMapper;
use crate::AppState;
use shared::{
    ActiveProfileResponse, CreateProfileRequest, ProfileListResponse, ProfileResponse,
    SetActiveProfileRequest, SetActiveProfileResponse, UpdateProfileRequest,
};

/// Create a router for profile related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_profiles).post(create_profile).put(update_profile),
        )
        .route("/active", get(get_active_profile).put(set_active_profile))
        .route("/:profile_id", delete(delete_profile).get(get_profile))
}

/// Create a new profile
pub async fn create_profile(
    State(state): State<AppState>,
    Json(request): Json<CreateProfileRequest>,
) -> impl IntoResponse {
    info!("POST /api/profiles - request: {:?}", request);

    let command = CreateProfileCommand {
        name: request.name,
        stage: request.stage,
        due_date: request.due_date,
        current_week: request.current_week,
        baby_birthdate: request.baby_birthdate,
    };

    match state.profile_service.create_profile(command).await {
        Ok(result) => {
            let response = ProfileResponse {
                profile: ProfileMapper::to_dto(result.profile),
                success_message: result.success_message,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create profile: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Get a profile by ID
pub async fn get_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/profiles/{}", profile_id);

    match state.profile_service.get_profile(&profile_id).await {
        Ok(Some(profile)) => (StatusCode::OK, Json(ProfileMapper::to_dto(profile))).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Profile not found").into_response(),
        Err(e) => {
            error!("Failed to get profile: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving profile").into_response()
        }
    }
}

/// List all profiles
pub async fn list_profiles(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/profiles");

    match state.profile_service.list_profiles().await {
        Ok(result) => {
            let response = ProfileListResponse {
                profiles: ProfileMapper::to_dto_list(result.profiles),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list profiles: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing profiles").into_response()
        }
    }
}

/// Update a profile
pub async fn update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> impl IntoResponse {
    info!("PUT /api/profiles - request: {:?}", request);

    let command = UpdateProfileCommand {
        profile_id: request.profile_id,
        name: request.name,
        stage: request.stage,
        due_date: request.due_date.map(Some),
        current_week: request.current_week.map(Some),
        baby_birthdate: request.baby_birthdate.map(Some),
    };

    match state.profile_service.update_profile(command).await {
        Ok(result) => {
            let response = ProfileResponse {
                profile: ProfileMapper::to_dto(result.profile),
                success_message: result.success_message,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update profile: {}", e);
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

/// Delete a profile
pub async fn delete_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/profiles/{}", profile_id);

    match state.profile_service.delete_profile(&profile_id).await {
        Ok(()) => (StatusCode::NO_CONTENT, "").into_response(),
        Err(e) => {
            error!("Failed to delete profile: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get the currently active profile
pub async fn get_active_profile(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/profiles/active");

    match state.profile_service.get_active_profile().await {
        Ok(active) => {
            let response = ActiveProfileResponse {
                active_profile: active.map(ProfileMapper::to_dto),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get active profile: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error retrieving active profile").into_response()
        }
    }
}

/// Set the currently active profile
pub async fn set_active_profile(
    State(state): State<AppState>,
    Json(request): Json<SetActiveProfileRequest>,
) -> impl IntoResponse {
    info!("PUT /api/profiles/active - request: {:?}", request);

    match state.profile_service.set_active_profile(&request.profile_id).await {
        Ok(result) => {
            let response = SetActiveProfileResponse {
                success_message: result.success_message,
                active_profile: ProfileMapper::to_dto(result.profile),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to set active profile: {}", e);
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
    use shared::ProfileStage;

    fn create_request(name: &str) -> CreateProfileRequest {
        CreateProfileRequest {
            name: name.to_string(),
            stage: ProfileStage::Pregnancy,
            due_date: Some("2026-01-15".to_string()),
            current_week: None,
            baby_birthdate: None,
        }
    }

    #[tokio::test]
    async fn test_create_profile_handler() {
        let state = state().await;

        let response = create_profile(State(state), Json(create_request("Amina")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let parsed: ProfileResponse = serde_json::from_slice(&body).expect("valid json");
        assert_eq!(parsed.profile.name, "Amina");
        assert_eq!(parsed.success_message, "Profile created successfully");
    }

    #[tokio::test]
    async fn test_create_profile_handler_rejects_bad_input() {
        let state = state().await;

        let mut request = create_request("");
        request.due_date = None;

        let response = create_profile(State(state), Json(request)).await.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_profile_handler() {
        let state = state().await;
        let profile = create_test_profile(&state).await;

        let found = get_profile(State(state.clone()), Path(profile.id.clone()))
            .await
            .into_response();
        assert_eq!(found.status(), StatusCode::OK);

        let missing = get_profile(State(state), Path("profile::0".to_string()))
            .await
            .into_response();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_profile_handler() {
        let state = state().await;
        create_test_profile(&state).await;

        let request = UpdateProfileRequest {
            profile_id: None,
            name: Some("Amina A.".to_string()),
            stage: None,
            due_date: None,
            current_week: None,
            baby_birthdate: None,
        };
        let response = update_profile(State(state), Json(request)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let parsed: ProfileResponse = serde_json::from_slice(&body).expect("valid json");
        assert_eq!(parsed.profile.name, "Amina A.");
    }

    #[tokio::test]
    async fn test_update_without_any_profile_is_not_found() {
        let state = state().await;

        let request = UpdateProfileRequest {
            profile_id: None,
            name: Some("Nobody".to_string()),
            stage: None,
            due_date: None,
            current_week: None,
            baby_birthdate: None,
        };
        let response = update_profile(State(state), Json(request)).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_active_profile_handlers() {
        let state = state().await;

        // No profiles yet, the active slot is empty
        let empty = get_active_profile(State(state.clone())).await.into_response();
        assert_eq!(empty.status(), StatusCode::OK);
        let body = to_bytes(empty.into_body(), usize::MAX).await.expect("body");
        let parsed: ActiveProfileResponse = serde_json::from_slice(&body).expect("valid json");
        assert!(parsed.active_profile.is_none());

        let profile = create_test_profile(&state).await;

        let request = SetActiveProfileRequest {
            profile_id: profile.id.clone(),
        };
        let set = set_active_profile(State(state.clone()), Json(request))
            .await
            .into_response();
        assert_eq!(set.status(), StatusCode::OK);

        let active = get_active_profile(State(state)).await.into_response();
        let body = to_bytes(active.into_body(), usize::MAX).await.expect("body");
        let parsed: ActiveProfileResponse = serde_json::from_slice(&body).expect("valid json");
        assert_eq!(parsed.active_profile.expect("profile should be active").id, profile.id);
    }

    #[tokio::test]
    async fn test_set_active_profile_unknown_id() {
        let state = state().await;

        let request = SetActiveProfileRequest {
            profile_id: "profile::0".to_string(),
        };
        let response = set_active_profile(State(state), Json(request)).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_profile_handler() {
        let state = state().await;
        let profile = create_test_profile(&state).await;

        let response = delete_profile(State(state.clone()), Path(profile.id.clone()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let again = delete_profile(State(state), Path(profile.id)).await.into_response();
        assert_eq!(again.status(), StatusCode::NOT_FOUND);
    }
}

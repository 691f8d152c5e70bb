//! # Wellness Tracker Backend
//!
//! Contains all non-UI logic for the maternal wellness tracker.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: Business logic for pregnancy tracking, mood assessments and vitals check-ins
//! - **Storage**: Data persistence mechanisms (SQLite)
//! - **Scoring**: HTTP clients for the remote scoring service
//! - **IO**: Interface layer that exposes functionality to clients
//!
//! The backend is designed to be UI-agnostic, meaning it can serve a mobile
//! app, a web frontend or even CLI tooling without modification.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! Client (mobile app, web)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (Database, persistence)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Set up the REST API router with proper CORS configuration
//! - Coordinate between domain logic, the remote scoring service and persistence
//! - Provide a clean separation of concerns for maintainability

pub mod config;
pub mod domain;
pub mod io;
pub mod scoring;
pub mod storage;

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{
    AssessmentService, CheckInService, PregnancyService, ProfileService, ReminderService,
};
use crate::scoring::{RemoteScoreProvider, ScoringApi};
use crate::storage::{
    AssessmentRepository, CheckInRepository, DbConnection, ProfileRepository, ReminderRepository,
};

pub use domain::*;
pub use io::*;
pub use storage::*;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub profile_service: ProfileService,
    pub pregnancy_service: PregnancyService,
    pub assessment_service: AssessmentService,
    pub checkin_service: CheckInService,
    pub reminder_service: ReminderService,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &Config) -> Result<AppState> {
    info!("Setting up database");
    let db_conn = DbConnection::init().await?;

    info!("Setting up storage layer");
    let profile_repository = ProfileRepository::new(db_conn.clone());
    let assessment_repository = AssessmentRepository::new(db_conn.clone());
    let checkin_repository = CheckInRepository::new(db_conn.clone());
    let reminder_repository = ReminderRepository::new(db_conn);

    info!("Connecting scoring service at {}", config.scoring_api_url);
    let scoring_api = ScoringApi::new(
        config.scoring_api_url.clone(),
        Duration::from_secs(config.scoring_timeout_secs),
    )?;
    let remote = Arc::new(RemoteScoreProvider::new(scoring_api));

    info!("Setting up domain model");
    let profile_service = ProfileService::new(profile_repository);
    let pregnancy_service = PregnancyService::new(profile_service.clone());
    let assessment_service = AssessmentService::new(
        assessment_repository,
        profile_service.clone(),
        remote.clone(),
        config.scoring_mode,
    );
    let checkin_service = CheckInService::new(checkin_repository, profile_service.clone(), remote);
    let reminder_service = ReminderService::new(reminder_repository, profile_service.clone());

    info!("Setting up application state");
    let app_state = AppState {
        profile_service,
        pregnancy_service,
        assessment_service,
        checkin_service,
        reminder_service,
    };

    Ok(app_state)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &Config) -> Router {
    // CORS setup to allow frontend to make requests
    let cors = match config.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            warn!("Invalid CORS origin {:?}, allowing any origin", config.cors_origin);
            CorsLayer::new().allow_origin(Any)
        }
    }
    .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
    .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .nest("/profiles", io::rest::profile_apis::router())
        .nest("/pregnancy", io::rest::pregnancy_apis::router())
        .nest("/assessments", io::rest::assessment_apis::router())
        .nest("/checkins", io::rest::checkin_apis::router())
        .nest("/reminders", io::rest::reminder_apis::router());

    // Define our main application router
    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}

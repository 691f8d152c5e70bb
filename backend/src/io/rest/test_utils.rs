//! Shared fixtures for handler tests.
//!
//! Builds a full [`AppState`] against an in-memory database with fake
//! scoring implementations, so handler tests never touch the network.

use std::sync::Arc;

use crate::domain::commands::profiles::CreateProfileCommand;
use crate::domain::models::profile::DomainProfile;
use crate::domain::{
    AssessmentService, CheckInService, PregnancyService, ProfileService, ReminderService,
};
use crate::scoring::test_support::{FixedRiskPredictor, RecordingScoreProvider};
use crate::scoring::{RiskPredictor, ScoreProvider, ScoringMode};
use crate::storage::{
    AssessmentRepository, CheckInRepository, DbConnection, ProfileRepository, ReminderRepository,
};
use crate::AppState;

/// Build a test state around the given scoring fakes.
pub async fn state_with(
    scorer: Arc<dyn ScoreProvider>,
    predictor: Arc<dyn RiskPredictor>,
) -> AppState {
    let db = DbConnection::init_test().await.expect("Failed to create test database");

    let profile_service = ProfileService::new(ProfileRepository::new(db.clone()));
    let pregnancy_service = PregnancyService::new(profile_service.clone());
    let assessment_service = AssessmentService::new(
        AssessmentRepository::new(db.clone()),
        profile_service.clone(),
        scorer,
        ScoringMode::RemoteOnly,
    );
    let checkin_service = CheckInService::new(
        CheckInRepository::new(db.clone()),
        profile_service.clone(),
        predictor,
    );
    let reminder_service = ReminderService::new(ReminderRepository::new(db), profile_service.clone());

    AppState {
        profile_service,
        pregnancy_service,
        assessment_service,
        checkin_service,
        reminder_service,
    }
}

/// Build a test state whose fakes always succeed.
pub async fn state() -> AppState {
    state_with(
        Arc::new(RecordingScoreProvider::replying(9, "Low")),
        Arc::new(FixedRiskPredictor::replying("low risk")),
    )
    .await
}

/// Create a pregnancy profile; the first one becomes active.
pub async fn create_test_profile(state: &AppState) -> DomainProfile {
    // Due in 140 days, so progress lands mid pregnancy whenever the test runs
    let due_date = (chrono::Local::now().date_naive() + chrono::Duration::days(140))
        .format("%Y-%m-%d")
        .to_string();

    state
        .profile_service
        .create_profile(CreateProfileCommand {
            name: "Amina".to_string(),
            stage: shared::ProfileStage::Pregnancy,
            due_date: Some(due_date),
            current_week: None,
            baby_birthdate: None,
        })
        .await
        .expect("Failed to create test profile")
        .profile
}

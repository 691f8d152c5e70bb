use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use tracing::{info, warn};

use crate::domain::commands::checkins::{
    CheckInHistoryQuery, CheckInHistoryResult, DeleteCheckInCommand, SubmitCheckInCommand,
    SubmitCheckInResult,
};
use crate::domain::errors::SubmissionError;
use crate::domain::models::checkin::{validate_vitals, DomainCheckIn, VitalReadings};
use crate::domain::profile_service::ProfileService;
use crate::scoring::{RiskPredictor, VitalsPayload};
use crate::storage::{CheckInRepository, CheckInStorage};

/// Service orchestrating the physical check-in flow
#[derive(Clone)]
pub struct CheckInService {
    repository: CheckInRepository,
    profile_service: ProfileService,
    predictor: Arc<dyn RiskPredictor>,
}

impl CheckInService {
    /// Create a new CheckInService
    pub fn new(
        repository: CheckInRepository,
        profile_service: ProfileService,
        predictor: Arc<dyn RiskPredictor>,
    ) -> Self {
        Self {
            repository,
            profile_service,
            predictor,
        }
    }

    /// Validate vitals, obtain a risk prediction and persist the check-in.
    ///
    /// Range problems are reported all at once, before any network cost.
    /// There is no local fallback for risk prediction; a failed call
    /// leaves nothing persisted and the readings intact for a retry.
    pub async fn submit_checkin(
        &self,
        command: SubmitCheckInCommand,
    ) -> Result<SubmitCheckInResult, SubmissionError> {
        info!("Submitting check-in: {:?}", command.readings);

        let profile = self
            .profile_service
            .resolve_profile(command.profile_id.as_deref())
            .await
            .map_err(|err| SubmissionError::validation(err.to_string()))?;

        let problems = validate_vitals(&command.readings);
        if !problems.is_empty() {
            return Err(SubmissionError::Validation {
                issues: problems.iter().map(|p| p.to_string()).collect(),
            });
        }

        let risk_level = match self.predictor.predict(&Self::payload(&command.readings)).await {
            Ok(label) => label,
            Err(err) => {
                warn!("Risk prediction failed: {}", err);
                return Err(err.into());
            }
        };

        let now = Utc::now();
        let readings = command.readings;
        let checkin = DomainCheckIn {
            id: DomainCheckIn::generate_id(now.timestamp_millis() as u64),
            profile_id: profile.id.clone(),
            age: readings.age,
            systolic: readings.systolic,
            diastolic: readings.diastolic,
            heart_rate: readings.heart_rate,
            blood_sugar: readings.blood_sugar,
            body_temp: readings.body_temp,
            risk_level,
            submitted_at: now.to_rfc3339(),
        };

        self.repository
            .store_checkin(&checkin)
            .await
            .map_err(|err| SubmissionError::Persistence {
                reason: err.to_string(),
            })?;

        info!(
            "Stored check-in {} for profile {}: risk {}",
            checkin.id, profile.id, checkin.risk_level
        );

        Ok(SubmitCheckInResult {
            checkin,
            success_message: "Check-in submitted successfully".to_string(),
        })
    }

    /// List past check-ins, most recent first
    pub async fn get_history(&self, query: CheckInHistoryQuery) -> Result<CheckInHistoryResult> {
        let profile = self
            .profile_service
            .resolve_profile(query.profile_id.as_deref())
            .await?;
        info!("Listing check-ins for profile {}", profile.id);

        let checkins = self.repository.list_checkins(&profile.id, query.limit).await?;

        Ok(CheckInHistoryResult { checkins })
    }

    /// Delete a stored check-in
    pub async fn delete_checkin(&self, command: DeleteCheckInCommand) -> Result<()> {
        info!("Deleting check-in: {}", command.checkin_id);

        let deleted = self.repository.delete_checkin(&command.checkin_id).await?;
        if !deleted {
            return Err(anyhow::anyhow!("Check-in not found: {}", command.checkin_id));
        }

        Ok(())
    }

    fn payload(readings: &VitalReadings) -> VitalsPayload {
        VitalsPayload {
            age: readings.age,
            systolic_bp: readings.systolic,
            diastolic_bp: readings.diastolic,
            blood_sugar: readings.blood_sugar,
            body_temp: readings.body_temp,
            heart_rate: readings.heart_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::profiles::CreateProfileCommand;
    use crate::scoring::test_support::{FailingScoreProvider, FixedRiskPredictor};
    use crate::storage::{DbConnection, ProfileRepository};

    async fn setup_test(predictor: Arc<dyn RiskPredictor>) -> CheckInService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let profile_service = ProfileService::new(ProfileRepository::new(db.clone()));
        profile_service
            .create_profile(CreateProfileCommand {
                name: "Amina".to_string(),
                stage: shared::ProfileStage::Pregnancy,
                due_date: Some("2026-01-15".to_string()),
                current_week: None,
                baby_birthdate: None,
            })
            .await
            .expect("Failed to create profile");
        CheckInService::new(CheckInRepository::new(db), profile_service, predictor)
    }

    fn healthy_readings() -> VitalReadings {
        VitalReadings {
            age: 28,
            systolic: 118,
            diastolic: 76,
            heart_rate: 82,
            blood_sugar: 7.2,
            body_temp: 98.4,
        }
    }

    fn submit_command(readings: VitalReadings) -> SubmitCheckInCommand {
        SubmitCheckInCommand {
            profile_id: None,
            readings,
        }
    }

    #[tokio::test]
    async fn test_submit_predicts_and_persists() {
        let predictor = Arc::new(FixedRiskPredictor::replying("low risk"));
        let service = setup_test(predictor.clone()).await;

        let result = service
            .submit_checkin(submit_command(healthy_readings()))
            .await
            .expect("Submission should succeed");

        assert_eq!(result.checkin.risk_level, "low risk");
        assert_eq!(result.checkin.systolic, 118);
        assert_eq!(result.checkin.blood_sugar, 7.2);
        assert_eq!(result.success_message, "Check-in submitted successfully");

        // The readings went out under the service's field contract
        let requests = predictor.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].age, 28);
        assert_eq!(requests[0].systolic_bp, 118);
        assert_eq!(requests[0].heart_rate, 82);

        let history = service
            .get_history(CheckInHistoryQuery::default())
            .await
            .expect("Failed to list history");
        assert_eq!(history.checkins.len(), 1);
        assert_eq!(history.checkins[0].id, result.checkin.id);
    }

    #[tokio::test]
    async fn test_submit_reports_every_range_problem() {
        let predictor = Arc::new(FixedRiskPredictor::replying("low risk"));
        let service = setup_test(predictor.clone()).await;

        let readings = VitalReadings {
            age: 12,
            systolic: 320,
            diastolic: 10,
            heart_rate: 300,
            blood_sugar: 28.0,
            body_temp: 110.0,
        };

        let error = service
            .submit_checkin(submit_command(readings))
            .await
            .expect_err("Submission should be rejected");

        match error {
            SubmissionError::Validation { issues } => assert_eq!(issues.len(), 6),
            other => panic!("expected validation, got {:?}", other),
        }

        // Rejected before any prediction call
        assert!(predictor.requests().is_empty());
    }

    #[tokio::test]
    async fn test_prediction_failure_persists_nothing() {
        let predictor = Arc::new(FailingScoreProvider::service_down());
        let service = setup_test(predictor.clone()).await;

        let error = service
            .submit_checkin(submit_command(healthy_readings()))
            .await
            .expect_err("Submission should fail");

        assert!(matches!(error, SubmissionError::Network { .. }));
        assert!(error.is_retryable());
        assert_eq!(predictor.call_count(), 1);

        let history = service
            .get_history(CheckInHistoryQuery::default())
            .await
            .expect("Failed to list history");
        assert!(history.checkins.is_empty());
    }

    #[tokio::test]
    async fn test_history_respects_limit() {
        let predictor = Arc::new(FixedRiskPredictor::replying("low risk"));
        let service = setup_test(predictor).await;

        for _ in 0..3 {
            service
                .submit_checkin(submit_command(healthy_readings()))
                .await
                .expect("Submission should succeed");
            // Ids are timestamp based, keep them distinct
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }

        let history = service
            .get_history(CheckInHistoryQuery {
                profile_id: None,
                limit: Some(2),
            })
            .await
            .expect("Failed to list history");
        assert_eq!(history.checkins.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_checkin() {
        let predictor = Arc::new(FixedRiskPredictor::replying("low risk"));
        let service = setup_test(predictor).await;

        let result = service
            .submit_checkin(submit_command(healthy_readings()))
            .await
            .expect("Submission should succeed");

        service
            .delete_checkin(DeleteCheckInCommand {
                checkin_id: result.checkin.id.clone(),
            })
            .await
            .expect("Failed to delete check-in");

        let missing = service
            .delete_checkin(DeleteCheckInCommand {
                checkin_id: result.checkin.id,
            })
            .await;
        assert!(missing.is_err());
    }
}

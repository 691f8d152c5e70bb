use anyhow::Result;
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::domain::commands::pregnancy::{
    GetBabyAgeCommand, GetBabyAgeResult, GetProgressCommand, GetProgressResult,
};
use crate::domain::models::pregnancy::{
    calculate_from_due_date, calculate_from_recorded_week, calculate_from_week, format_baby_age,
};
use crate::domain::models::profile::ProfileValidationError;
use crate::domain::profile_service::ProfileService;

/// Service for pregnancy progress and baby age calculations
#[derive(Clone)]
pub struct PregnancyService {
    profile_service: ProfileService,
}

impl PregnancyService {
    /// Create a new PregnancyService
    pub fn new(profile_service: ProfileService) -> Self {
        Self { profile_service }
    }

    /// Calculate pregnancy progress.
    ///
    /// An explicit due date or week in the command wins; otherwise the
    /// resolved profile's stored pregnancy data is used.
    pub async fn get_progress(&self, command: GetProgressCommand) -> Result<GetProgressResult> {
        let today = Local::now().date_naive();

        if let Some(ref due_date) = command.due_date {
            let due = Self::parse_date(due_date, ProfileValidationError::InvalidDueDate)?;
            info!("Calculating progress from due date {}", due_date);
            return Ok(GetProgressResult {
                profile_id: None,
                info: calculate_from_due_date(today, due),
            });
        }

        if let Some(week) = command.week {
            info!("Calculating progress from week {}", week);
            return Ok(GetProgressResult {
                profile_id: None,
                info: calculate_from_week(week),
            });
        }

        let profile = self
            .profile_service
            .resolve_profile(command.profile_id.as_deref())
            .await?;
        info!("Calculating progress for profile {}", profile.id);

        if let Some(ref due_date) = profile.due_date {
            let due = Self::parse_date(due_date, ProfileValidationError::InvalidDueDate)?;
            return Ok(GetProgressResult {
                profile_id: Some(profile.id),
                info: calculate_from_due_date(today, due),
            });
        }

        if let Some(week) = profile.current_week {
            let info = match profile.week_recorded_at.as_deref() {
                Some(recorded) => {
                    let recorded_on = NaiveDate::parse_from_str(recorded, "%Y-%m-%d")
                        .map_err(|_| {
                            anyhow::anyhow!("Stored week entry date is unreadable: {}", recorded)
                        })?;
                    calculate_from_recorded_week(week, recorded_on, today)
                }
                None => calculate_from_week(week),
            };
            return Ok(GetProgressResult {
                profile_id: Some(profile.id),
                info,
            });
        }

        Err(ProfileValidationError::MissingPregnancyData.into())
    }

    /// Format the baby's age for a postpartum profile.
    ///
    /// An explicit birthdate in the command wins over the profile's stored one.
    pub async fn get_baby_age(&self, command: GetBabyAgeCommand) -> Result<GetBabyAgeResult> {
        let today = Local::now().date_naive();

        let (profile_id, birthdate) = match command.birthdate {
            Some(date) => (None, date),
            None => {
                let profile = self
                    .profile_service
                    .resolve_profile(command.profile_id.as_deref())
                    .await?;
                let birthdate = profile
                    .baby_birthdate
                    .ok_or(ProfileValidationError::MissingBirthdate)?;
                (Some(profile.id), birthdate)
            }
        };

        let birth = Self::parse_date(&birthdate, ProfileValidationError::InvalidBirthdate)?;
        info!("Calculating baby age from birthdate {}", birthdate);

        Ok(GetBabyAgeResult {
            profile_id,
            age: format_baby_age(birth, today),
        })
    }

    fn parse_date(value: &str, error: ProfileValidationError) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::profiles::CreateProfileCommand;
    use crate::domain::models::pregnancy::Trimester;
    use crate::storage::{DbConnection, ProfileRepository};
    use chrono::Duration;
    use shared::ProfileStage;

    async fn setup_test() -> (PregnancyService, ProfileService) {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let profile_service = ProfileService::new(ProfileRepository::new(db));
        (PregnancyService::new(profile_service.clone()), profile_service)
    }

    fn date_from_today(days: i64) -> String {
        (Local::now().date_naive() + Duration::days(days))
            .format("%Y-%m-%d")
            .to_string()
    }

    #[tokio::test]
    async fn test_progress_from_explicit_due_date() {
        let (service, _) = setup_test().await;

        // 70 days out is day 210, the start of week 30
        let command = GetProgressCommand {
            due_date: Some(date_from_today(70)),
            ..Default::default()
        };
        let result = service.get_progress(command).await.expect("Failed to get progress");

        assert_eq!(result.info.current_week, 30);
        assert_eq!(result.info.days_remaining, 70);
        assert_eq!(result.info.trimester, Trimester::Third);
        assert_eq!(result.profile_id, None);
    }

    #[tokio::test]
    async fn test_progress_from_explicit_week() {
        let (service, _) = setup_test().await;

        let command = GetProgressCommand {
            week: Some(8),
            ..Default::default()
        };
        let result = service.get_progress(command).await.expect("Failed to get progress");

        assert_eq!(result.info.current_week, 8);
        assert_eq!(result.info.trimester, Trimester::First);
        assert_eq!(result.info.days_remaining, 32 * 7);
    }

    #[tokio::test]
    async fn test_progress_from_profile_due_date() {
        let (service, profiles) = setup_test().await;
        profiles
            .create_profile(CreateProfileCommand {
                name: "Amina".to_string(),
                stage: ProfileStage::Pregnancy,
                due_date: Some(date_from_today(140)),
                current_week: None,
                baby_birthdate: None,
            })
            .await
            .expect("Failed to create profile");

        let result = service
            .get_progress(GetProgressCommand::default())
            .await
            .expect("Failed to get progress");

        // 140 days out is day 140, week 20
        assert_eq!(result.info.current_week, 20);
        assert_eq!(result.info.trimester, Trimester::Second);
        assert!(result.profile_id.is_some());
    }

    #[tokio::test]
    async fn test_progress_from_profile_recorded_week() {
        let (service, profiles) = setup_test().await;
        profiles
            .create_profile(CreateProfileCommand {
                name: "Amina".to_string(),
                stage: ProfileStage::Pregnancy,
                due_date: None,
                current_week: Some(12),
                baby_birthdate: None,
            })
            .await
            .expect("Failed to create profile");

        let result = service
            .get_progress(GetProgressCommand::default())
            .await
            .expect("Failed to get progress");

        // Recorded today, so no elapsed days have been added yet
        assert_eq!(result.info.current_week, 12);
        assert_eq!(result.info.trimester, Trimester::First);
    }

    #[tokio::test]
    async fn test_progress_without_pregnancy_data() {
        let (service, profiles) = setup_test().await;
        profiles
            .create_profile(CreateProfileCommand {
                name: "Amina".to_string(),
                stage: ProfileStage::Postpartum,
                due_date: None,
                current_week: None,
                baby_birthdate: Some("2025-05-20".to_string()),
            })
            .await
            .expect("Failed to create profile");

        let result = service.get_progress(GetProgressCommand::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_progress_rejects_malformed_due_date() {
        let (service, _) = setup_test().await;

        let command = GetProgressCommand {
            due_date: Some("next spring".to_string()),
            ..Default::default()
        };
        assert!(service.get_progress(command).await.is_err());
    }

    #[tokio::test]
    async fn test_baby_age_from_explicit_birthdate() {
        let (service, _) = setup_test().await;

        let command = GetBabyAgeCommand {
            birthdate: Some(date_from_today(-5)),
            ..Default::default()
        };
        let result = service.get_baby_age(command).await.expect("Failed to get baby age");

        assert_eq!(result.age, "5 days");
    }

    #[tokio::test]
    async fn test_baby_age_from_profile() {
        let (service, profiles) = setup_test().await;
        profiles
            .create_profile(CreateProfileCommand {
                name: "Amina".to_string(),
                stage: ProfileStage::Postpartum,
                due_date: None,
                current_week: None,
                baby_birthdate: Some(date_from_today(-21)),
            })
            .await
            .expect("Failed to create profile");

        let result = service
            .get_baby_age(GetBabyAgeCommand::default())
            .await
            .expect("Failed to get baby age");

        assert_eq!(result.age, "3 weeks");
    }

    #[tokio::test]
    async fn test_baby_age_without_birthdate() {
        let (service, profiles) = setup_test().await;
        profiles
            .create_profile(CreateProfileCommand {
                name: "Amina".to_string(),
                stage: ProfileStage::Pregnancy,
                due_date: Some(date_from_today(100)),
                current_week: None,
                baby_birthdate: None,
            })
            .await
            .expect("Failed to create profile");

        let result = service.get_baby_age(GetBabyAgeCommand::default()).await;
        assert!(result.is_err());
    }
}

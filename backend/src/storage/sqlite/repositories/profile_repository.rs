use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::profile::DomainProfile;
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::ProfileStorage;
use shared::ProfileStage;

/// Repository for profile operations
#[derive(Clone)]
pub struct ProfileRepository {
    db: DbConnection,
}

impl ProfileRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_profile(row: &sqlx::sqlite::SqliteRow) -> Result<DomainProfile> {
        let stage_raw: String = row.get("stage");
        let stage = ProfileStage::parse(&stage_raw)
            .ok_or_else(|| anyhow::anyhow!("Unknown profile stage in storage: {}", stage_raw))?;

        let current_week: Option<i64> = row.get("current_week");

        Ok(DomainProfile {
            id: row.get("id"),
            name: row.get("name"),
            stage,
            due_date: row.get("due_date"),
            current_week: current_week.map(|w| w as u32),
            week_recorded_at: row.get("week_recorded_at"),
            baby_birthdate: row.get("baby_birthdate"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }
}

#[async_trait]
impl ProfileStorage for ProfileRepository {
    /// Store a profile in the database
    async fn store_profile(&self, profile: &DomainProfile) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (id, name, stage, due_date, current_week, week_recorded_at, baby_birthdate, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(profile.stage.as_str())
        .bind(&profile.due_date)
        .bind(profile.current_week.map(|w| w as i64))
        .bind(&profile.week_recorded_at)
        .bind(&profile.baby_birthdate)
        .bind(&profile.created_at)
        .bind(&profile.updated_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Get a profile by ID
    async fn get_profile(&self, profile_id: &str) -> Result<Option<DomainProfile>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, stage, due_date, current_week, week_recorded_at, baby_birthdate, created_at, updated_at
            FROM profiles
            WHERE id = ?
            "#,
        )
        .bind(profile_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_profile(&r)?)),
            None => Ok(None),
        }
    }

    /// List all profiles ordered by name
    async fn list_profiles(&self) -> Result<Vec<DomainProfile>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, stage, due_date, current_week, week_recorded_at, baby_birthdate, created_at, updated_at
            FROM profiles
            ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_profile).collect()
    }

    /// Update a profile in the database
    async fn update_profile(&self, profile: &DomainProfile) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE profiles
            SET name = ?, stage = ?, due_date = ?, current_week = ?, week_recorded_at = ?, baby_birthdate = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&profile.name)
        .bind(profile.stage.as_str())
        .bind(&profile.due_date)
        .bind(profile.current_week.map(|w| w as i64))
        .bind(&profile.week_recorded_at)
        .bind(&profile.baby_birthdate)
        .bind(&profile.updated_at)
        .bind(&profile.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Delete a profile from the database
    async fn delete_profile(&self, profile_id: &str) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM profiles WHERE id = ?
            "#,
        )
        .bind(profile_id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Get the currently active profile ID
    async fn get_active_profile(&self) -> Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT profile_id
            FROM active_profile
            WHERE id = 1
            "#,
        )
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(r.get("profile_id"))),
            None => Ok(None),
        }
    }

    /// Set the currently active profile
    async fn set_active_profile(&self, profile_id: &str) -> Result<()> {
        // First verify the profile exists
        let profile_exists = sqlx::query(
            r#"
            SELECT 1 FROM profiles WHERE id = ?
            "#,
        )
        .bind(profile_id)
        .fetch_optional(self.db.pool())
        .await?
        .is_some();

        if !profile_exists {
            return Err(anyhow::anyhow!("Profile not found: {}", profile_id));
        }

        // Use INSERT OR REPLACE to handle both initial insert and updates
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO active_profile (id, profile_id, updated_at)
            VALUES (1, ?, CURRENT_TIMESTAMP)
            "#,
        )
        .bind(profile_id)
        .execute(self.db.pool())
        .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile(id: &str, name: &str) -> DomainProfile {
        DomainProfile {
            id: id.to_string(),
            name: name.to_string(),
            stage: ProfileStage::Pregnancy,
            due_date: Some("2026-01-15".to_string()),
            current_week: None,
            week_recorded_at: None,
            baby_birthdate: None,
            created_at: "2025-06-01T10:00:00+00:00".to_string(),
            updated_at: "2025-06-01T10:00:00+00:00".to_string(),
        }
    }

    async fn setup_repo() -> ProfileRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        ProfileRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_and_get_profile() {
        let repo = setup_repo().await;
        let profile = sample_profile("profile::1", "Amina");

        repo.store_profile(&profile).await.expect("Failed to store profile");

        let loaded = repo
            .get_profile("profile::1")
            .await
            .expect("Failed to get profile")
            .expect("Profile should exist");
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn test_get_missing_profile_returns_none() {
        let repo = setup_repo().await;

        let loaded = repo.get_profile("profile::404").await.expect("Failed to get profile");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_list_profiles_ordered_by_name() {
        let repo = setup_repo().await;
        repo.store_profile(&sample_profile("profile::1", "Zainab"))
            .await
            .expect("Failed to store profile");
        repo.store_profile(&sample_profile("profile::2", "Amina"))
            .await
            .expect("Failed to store profile");

        let profiles = repo.list_profiles().await.expect("Failed to list profiles");

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].name, "Amina");
        assert_eq!(profiles[1].name, "Zainab");
    }

    #[tokio::test]
    async fn test_update_profile_changes_fields() {
        let repo = setup_repo().await;
        let mut profile = sample_profile("profile::1", "Amina");
        repo.store_profile(&profile).await.expect("Failed to store profile");

        profile.stage = ProfileStage::Postpartum;
        profile.due_date = None;
        profile.baby_birthdate = Some("2025-05-20".to_string());
        profile.updated_at = "2025-06-02T09:00:00+00:00".to_string();
        repo.update_profile(&profile).await.expect("Failed to update profile");

        let loaded = repo
            .get_profile("profile::1")
            .await
            .expect("Failed to get profile")
            .expect("Profile should exist");
        assert_eq!(loaded.stage, ProfileStage::Postpartum);
        assert_eq!(loaded.due_date, None);
        assert_eq!(loaded.baby_birthdate, Some("2025-05-20".to_string()));
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let repo = setup_repo().await;
        repo.store_profile(&sample_profile("profile::1", "Amina"))
            .await
            .expect("Failed to store profile");

        repo.delete_profile("profile::1").await.expect("Failed to delete profile");

        let loaded = repo.get_profile("profile::1").await.expect("Failed to get profile");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_active_profile_round_trip() {
        let repo = setup_repo().await;
        repo.store_profile(&sample_profile("profile::1", "Amina"))
            .await
            .expect("Failed to store profile");
        repo.store_profile(&sample_profile("profile::2", "Zainab"))
            .await
            .expect("Failed to store profile");

        // No active profile initially
        let active = repo.get_active_profile().await.expect("Failed to get active profile");
        assert!(active.is_none());

        repo.set_active_profile("profile::1")
            .await
            .expect("Failed to set active profile");
        let active = repo.get_active_profile().await.expect("Failed to get active profile");
        assert_eq!(active, Some("profile::1".to_string()));

        // Switching replaces the single row
        repo.set_active_profile("profile::2")
            .await
            .expect("Failed to set active profile");
        let active = repo.get_active_profile().await.expect("Failed to get active profile");
        assert_eq!(active, Some("profile::2".to_string()));
    }

    #[tokio::test]
    async fn test_set_active_profile_rejects_unknown_id() {
        let repo = setup_repo().await;

        let result = repo.set_active_profile("profile::404").await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let repo = setup_repo().await;
        let storage: &dyn ProfileStorage = &repo;

        storage
            .store_profile(&sample_profile("profile::1", "Amina"))
            .await
            .expect("Failed to store profile");
        let listed = storage.list_profiles().await.expect("Failed to list profiles");
        assert_eq!(listed.len(), 1);
    }
}

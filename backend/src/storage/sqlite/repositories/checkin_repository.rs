use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::checkin::DomainCheckIn;
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::CheckInStorage;

/// Repository for check-in record operations
#[derive(Clone)]
pub struct CheckInRepository {
    db: DbConnection,
}

impl CheckInRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_checkin(row: &sqlx::sqlite::SqliteRow) -> DomainCheckIn {
        DomainCheckIn {
            id: row.get("id"),
            profile_id: row.get("profile_id"),
            age: row.get::<i64, _>("age") as u32,
            systolic: row.get::<i64, _>("systolic") as u32,
            diastolic: row.get::<i64, _>("diastolic") as u32,
            heart_rate: row.get::<i64, _>("heart_rate") as u32,
            blood_sugar: row.get("blood_sugar"),
            body_temp: row.get("body_temp"),
            risk_level: row.get("risk_level"),
            submitted_at: row.get("submitted_at"),
        }
    }
}

#[async_trait]
impl CheckInStorage for CheckInRepository {
    /// Store a check-in record in the database
    async fn store_checkin(&self, checkin: &DomainCheckIn) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO checkins (id, profile_id, age, systolic, diastolic, heart_rate, blood_sugar, body_temp, risk_level, submitted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&checkin.id)
        .bind(&checkin.profile_id)
        .bind(checkin.age as i64)
        .bind(checkin.systolic as i64)
        .bind(checkin.diastolic as i64)
        .bind(checkin.heart_rate as i64)
        .bind(checkin.blood_sugar)
        .bind(checkin.body_temp)
        .bind(&checkin.risk_level)
        .bind(&checkin.submitted_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Get a check-in by ID
    async fn get_checkin(&self, checkin_id: &str) -> Result<Option<DomainCheckIn>> {
        let row = sqlx::query(
            r#"
            SELECT id, profile_id, age, systolic, diastolic, heart_rate, blood_sugar, body_temp, risk_level, submitted_at
            FROM checkins
            WHERE id = ?
            "#,
        )
        .bind(checkin_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| Self::row_to_checkin(&r)))
    }

    /// List check-ins for a profile, most recent first
    async fn list_checkins(
        &self,
        profile_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<DomainCheckIn>> {
        let query = if let Some(limit) = limit {
            sqlx::query(
                r#"
                SELECT id, profile_id, age, systolic, diastolic, heart_rate, blood_sugar, body_temp, risk_level, submitted_at
                FROM checkins
                WHERE profile_id = ?
                ORDER BY ROWID DESC
                LIMIT ?
                "#,
            )
            .bind(profile_id)
            .bind(limit as i64)
        } else {
            sqlx::query(
                r#"
                SELECT id, profile_id, age, systolic, diastolic, heart_rate, blood_sugar, body_temp, risk_level, submitted_at
                FROM checkins
                WHERE profile_id = ?
                ORDER BY ROWID DESC
                "#,
            )
            .bind(profile_id)
        };

        let rows = query.fetch_all(self.db.pool()).await?;

        Ok(rows.iter().map(|r| Self::row_to_checkin(r)).collect())
    }

    /// Delete a check-in from the database
    async fn delete_checkin(&self, checkin_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM checkins WHERE id = ?
            "#,
        )
        .bind(checkin_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_checkin(id: &str, profile_id: &str) -> DomainCheckIn {
        DomainCheckIn {
            id: id.to_string(),
            profile_id: profile_id.to_string(),
            age: 28,
            systolic: 118,
            diastolic: 76,
            heart_rate: 72,
            blood_sugar: 7.2,
            body_temp: 98.4,
            risk_level: "low risk".to_string(),
            submitted_at: "2025-06-01T10:00:00+00:00".to_string(),
        }
    }

    async fn setup_repo() -> CheckInRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        CheckInRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_and_get_checkin() {
        let repo = setup_repo().await;
        let checkin = sample_checkin("checkin::1", "profile::1");

        repo.store_checkin(&checkin).await.expect("Failed to store check-in");

        let loaded = repo
            .get_checkin("checkin::1")
            .await
            .expect("Failed to get check-in")
            .expect("Check-in should exist");
        assert_eq!(loaded, checkin);
    }

    #[tokio::test]
    async fn test_list_checkins_filters_by_profile_most_recent_first() {
        let repo = setup_repo().await;
        repo.store_checkin(&sample_checkin("checkin::1", "profile::1"))
            .await
            .expect("Failed to store check-in");
        repo.store_checkin(&sample_checkin("checkin::2", "profile::2"))
            .await
            .expect("Failed to store check-in");
        repo.store_checkin(&sample_checkin("checkin::3", "profile::1"))
            .await
            .expect("Failed to store check-in");

        let listed = repo
            .list_checkins("profile::1", None)
            .await
            .expect("Failed to list check-ins");

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "checkin::3");
        assert_eq!(listed[1].id, "checkin::1");
    }

    #[tokio::test]
    async fn test_delete_checkin_reports_whether_found() {
        let repo = setup_repo().await;
        repo.store_checkin(&sample_checkin("checkin::1", "profile::1"))
            .await
            .expect("Failed to store check-in");

        assert!(repo.delete_checkin("checkin::1").await.expect("Failed to delete"));
        assert!(!repo.delete_checkin("checkin::1").await.expect("Failed to delete"));
    }
}

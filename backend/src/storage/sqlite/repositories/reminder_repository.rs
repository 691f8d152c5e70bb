use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::reminder::DomainReminder;
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::ReminderStorage;

/// Repository for reminder operations
#[derive(Clone)]
pub struct ReminderRepository {
    db: DbConnection,
}

impl ReminderRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_reminder(row: &sqlx::sqlite::SqliteRow) -> DomainReminder {
        let day_of_week: Option<i64> = row.get("day_of_week");
        DomainReminder {
            id: row.get("id"),
            profile_id: row.get("profile_id"),
            title: row.get("title"),
            time_of_day: row.get("time_of_day"),
            day_of_week: day_of_week.map(|d| d as u8),
            is_active: row.get("is_active"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}

#[async_trait]
impl ReminderStorage for ReminderRepository {
    /// Store a reminder in the database
    async fn store_reminder(&self, reminder: &DomainReminder) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reminders (id, profile_id, title, time_of_day, day_of_week, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&reminder.id)
        .bind(&reminder.profile_id)
        .bind(&reminder.title)
        .bind(&reminder.time_of_day)
        .bind(reminder.day_of_week.map(|d| d as i64))
        .bind(reminder.is_active)
        .bind(&reminder.created_at)
        .bind(&reminder.updated_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Get a reminder by ID
    async fn get_reminder(&self, reminder_id: &str) -> Result<Option<DomainReminder>> {
        let row = sqlx::query(
            r#"
            SELECT id, profile_id, title, time_of_day, day_of_week, is_active, created_at, updated_at
            FROM reminders
            WHERE id = ?
            "#,
        )
        .bind(reminder_id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(|r| Self::row_to_reminder(&r)))
    }

    /// List reminders for a profile ordered by time of day
    async fn list_reminders(&self, profile_id: &str) -> Result<Vec<DomainReminder>> {
        let rows = sqlx::query(
            r#"
            SELECT id, profile_id, title, time_of_day, day_of_week, is_active, created_at, updated_at
            FROM reminders
            WHERE profile_id = ?
            ORDER BY time_of_day ASC
            "#,
        )
        .bind(profile_id)
        .fetch_all(self.db.pool())
        .await?;

        Ok(rows.iter().map(|r| Self::row_to_reminder(r)).collect())
    }

    /// Update a reminder in the database
    async fn update_reminder(&self, reminder: &DomainReminder) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE reminders
            SET title = ?, time_of_day = ?, day_of_week = ?, is_active = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&reminder.title)
        .bind(&reminder.time_of_day)
        .bind(reminder.day_of_week.map(|d| d as i64))
        .bind(reminder.is_active)
        .bind(&reminder.updated_at)
        .bind(&reminder.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Delete a reminder from the database
    async fn delete_reminder(&self, reminder_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reminders WHERE id = ?
            "#,
        )
        .bind(reminder_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

use anyhow::Result;
use async_trait::async_trait;
use sqlx::Row;

use crate::domain::models::assessment::{DomainAssessment, ScoreSource};
use crate::storage::sqlite::connection::DbConnection;
use crate::storage::traits::AssessmentStorage;

/// Repository for assessment record operations
///
/// Answer and action lists are stored as JSON text columns; sqlite has
/// no array type and nothing queries inside them.
#[derive(Clone)]
pub struct AssessmentRepository {
    db: DbConnection,
}

impl AssessmentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_assessment(row: &sqlx::sqlite::SqliteRow) -> Result<DomainAssessment> {
        let responses_raw: String = row.get("responses");
        let actions_raw: String = row.get("actions");
        let additional_raw: String = row.get("additional_actions");
        let source_raw: String = row.get("score_source");

        let score_source = ScoreSource::from_str(&source_raw)
            .ok_or_else(|| anyhow::anyhow!("Unknown score source in storage: {}", source_raw))?;

        Ok(DomainAssessment {
            id: row.get("id"),
            profile_id: row.get("profile_id"),
            responses: serde_json::from_str(&responses_raw)?,
            epds_score: row.get("epds_score"),
            risk_level: row.get("risk_level"),
            assessment: row.get("assessment"),
            anxiety_flag: row.get("anxiety_flag"),
            actions: serde_json::from_str(&actions_raw)?,
            additional_actions: serde_json::from_str(&additional_raw)?,
            score_source,
            submitted_at: row.get("submitted_at"),
        })
    }
}

#[async_trait]
impl AssessmentStorage for AssessmentRepository {
    /// Store an assessment record in the database
    async fn store_assessment(&self, assessment: &DomainAssessment) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO assessments (id, profile_id, responses, epds_score, risk_level, assessment, anxiety_flag, actions, additional_actions, score_source, submitted_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&assessment.id)
        .bind(&assessment.profile_id)
        .bind(serde_json::to_string(&assessment.responses)?)
        .bind(assessment.epds_score)
        .bind(&assessment.risk_level)
        .bind(&assessment.assessment)
        .bind(assessment.anxiety_flag)
        .bind(serde_json::to_string(&assessment.actions)?)
        .bind(serde_json::to_string(&assessment.additional_actions)?)
        .bind(assessment.score_source.as_str())
        .bind(&assessment.submitted_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Get an assessment by ID
    async fn get_assessment(&self, assessment_id: &str) -> Result<Option<DomainAssessment>> {
        let row = sqlx::query(
            r#"
            SELECT id, profile_id, responses, epds_score, risk_level, assessment, anxiety_flag, actions, additional_actions, score_source, submitted_at
            FROM assessments
            WHERE id = ?
            "#,
        )
        .bind(assessment_id)
        .fetch_optional(self.db.pool())
        .await?;

        match row {
            Some(r) => Ok(Some(Self::row_to_assessment(&r)?)),
            None => Ok(None),
        }
    }

    /// List assessments for a profile, most recent first
    async fn list_assessments(
        &self,
        profile_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<DomainAssessment>> {
        let query = if let Some(limit) = limit {
            sqlx::query(
                r#"
                SELECT id, profile_id, responses, epds_score, risk_level, assessment, anxiety_flag, actions, additional_actions, score_source, submitted_at
                FROM assessments
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
                SELECT id, profile_id, responses, epds_score, risk_level, assessment, anxiety_flag, actions, additional_actions, score_source, submitted_at
                FROM assessments
                WHERE profile_id = ?
                ORDER BY ROWID DESC
                "#,
            )
            .bind(profile_id)
        };

        let rows = query.fetch_all(self.db.pool()).await?;

        rows.iter().map(Self::row_to_assessment).collect()
    }

    /// Delete an assessment from the database
    async fn delete_assessment(&self, assessment_id: &str) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM assessments WHERE id = ?
            "#,
        )
        .bind(assessment_id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_assessment(id: &str, profile_id: &str, score: i64) -> DomainAssessment {
        DomainAssessment {
            id: id.to_string(),
            profile_id: profile_id.to_string(),
            responses: vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1],
            epds_score: score,
            risk_level: "moderate".to_string(),
            assessment: Some("Some signs of distress".to_string()),
            anxiety_flag: Some(true),
            actions: vec!["Contact your provider".to_string()],
            additional_actions: vec![],
            score_source: ScoreSource::Remote,
            submitted_at: "2025-06-01T10:00:00+00:00".to_string(),
        }
    }

    async fn setup_repo() -> AssessmentRepository {
        let db = DbConnection::init_test()
            .await
            .expect("Failed to create test database");
        AssessmentRepository::new(db)
    }

    #[tokio::test]
    async fn test_store_and_get_assessment() {
        let repo = setup_repo().await;
        let assessment = sample_assessment("assessment::1", "profile::1", 13);

        repo.store_assessment(&assessment)
            .await
            .expect("Failed to store assessment");

        let loaded = repo
            .get_assessment("assessment::1")
            .await
            .expect("Failed to get assessment")
            .expect("Assessment should exist");
        assert_eq!(loaded, assessment);
    }

    #[tokio::test]
    async fn test_list_assessments_most_recent_first() {
        let repo = setup_repo().await;
        for (i, id) in ["assessment::1", "assessment::2", "assessment::3"].iter().enumerate() {
            repo.store_assessment(&sample_assessment(id, "profile::1", i as i64))
                .await
                .expect("Failed to store assessment");
        }

        let listed = repo
            .list_assessments("profile::1", None)
            .await
            .expect("Failed to list assessments");

        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].id, "assessment::3");
        assert_eq!(listed[2].id, "assessment::1");
    }

    #[tokio::test]
    async fn test_list_assessments_respects_limit_and_owner() {
        let repo = setup_repo().await;
        repo.store_assessment(&sample_assessment("assessment::1", "profile::1", 4))
            .await
            .expect("Failed to store assessment");
        repo.store_assessment(&sample_assessment("assessment::2", "profile::1", 9))
            .await
            .expect("Failed to store assessment");
        repo.store_assessment(&sample_assessment("assessment::3", "profile::2", 11))
            .await
            .expect("Failed to store assessment");

        let limited = repo
            .list_assessments("profile::1", Some(1))
            .await
            .expect("Failed to list assessments");
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "assessment::2");

        let other_owner = repo
            .list_assessments("profile::2", None)
            .await
            .expect("Failed to list assessments");
        assert_eq!(other_owner.len(), 1);
        assert_eq!(other_owner[0].id, "assessment::3");
    }

    #[tokio::test]
    async fn test_delete_assessment_reports_whether_found() {
        let repo = setup_repo().await;
        repo.store_assessment(&sample_assessment("assessment::1", "profile::1", 7))
            .await
            .expect("Failed to store assessment");

        let deleted = repo
            .delete_assessment("assessment::1")
            .await
            .expect("Failed to delete assessment");
        assert!(deleted);

        let deleted_again = repo
            .delete_assessment("assessment::1")
            .await
            .expect("Failed to delete assessment");
        assert!(!deleted_again);
    }

    #[tokio::test]
    async fn test_local_sum_source_round_trips() {
        let repo = setup_repo().await;
        let mut assessment = sample_assessment("assessment::1", "profile::1", 0);
        assessment.score_source = ScoreSource::LocalSum;
        assessment.risk_level = "unscored".to_string();
        assessment.anxiety_flag = None;

        repo.store_assessment(&assessment)
            .await
            .expect("Failed to store assessment");

        let loaded = repo
            .get_assessment("assessment::1")
            .await
            .expect("Failed to get assessment")
            .expect("Assessment should exist");
        assert_eq!(loaded.score_source, ScoreSource::LocalSum);
        assert_eq!(loaded.anxiety_flag, None);
    }
}

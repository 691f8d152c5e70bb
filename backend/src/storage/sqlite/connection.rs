use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:wellness.db";

/// DbConnection manages database operations
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // Create profiles table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                stage TEXT NOT NULL,
                due_date TEXT,
                current_week INTEGER,
                week_recorded_at TEXT,
                baby_birthdate TEXT,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for ordering profiles by name
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_profiles_name
            ON profiles(name);
            "#,
        )
        .execute(pool)
        .await?;

        // Create active_profile table (single row to track the currently active profile)
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS active_profile (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                profile_id TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (profile_id) REFERENCES profiles (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create assessments table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS assessments (
                id TEXT PRIMARY KEY,
                profile_id TEXT NOT NULL,
                responses TEXT NOT NULL,
                epds_score INTEGER NOT NULL,
                risk_level TEXT NOT NULL,
                assessment TEXT,
                anxiety_flag BOOLEAN,
                actions TEXT NOT NULL,
                additional_actions TEXT NOT NULL,
                score_source TEXT NOT NULL,
                submitted_at TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (profile_id) REFERENCES profiles (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for profile_id filtering
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_assessments_profile_id
            ON assessments(profile_id);
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for ordering by created_at (for recency queries)
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_assessments_created_at
            ON assessments(created_at DESC);
            "#,
        )
        .execute(pool)
        .await?;

        // Create checkins table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS checkins (
                id TEXT PRIMARY KEY,
                profile_id TEXT NOT NULL,
                age INTEGER NOT NULL,
                systolic INTEGER NOT NULL,
                diastolic INTEGER NOT NULL,
                heart_rate INTEGER NOT NULL,
                blood_sugar REAL NOT NULL,
                body_temp REAL NOT NULL,
                risk_level TEXT NOT NULL,
                submitted_at TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (profile_id) REFERENCES profiles (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for profile_id filtering
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_checkins_profile_id
            ON checkins(profile_id);
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for ordering by created_at (for recency queries)
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_checkins_created_at
            ON checkins(created_at DESC);
            "#,
        )
        .execute(pool)
        .await?;

        // Create reminders table
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reminders (
                id TEXT PRIMARY KEY,
                profile_id TEXT NOT NULL,
                title TEXT NOT NULL,
                time_of_day TEXT NOT NULL,
                day_of_week INTEGER CHECK (day_of_week >= 0 AND day_of_week <= 6),
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                FOREIGN KEY (profile_id) REFERENCES profiles (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Create index for profile_id lookup
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_reminders_profile_id
            ON reminders(profile_id);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

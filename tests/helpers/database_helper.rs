//! Test database helper utilities
//!
//! PostgreSQL tests need `TEST_DATABASE_URL`; without it they are skipped.

use sqlx::PgPool;
use std::sync::Once;
use EduCenter::database::{run_migrations, DatabaseService};

static INIT: Once = Once::new();

/// Migrated test database
pub struct TestDatabase {
    pub pool: PgPool,
    pub database_url: String,
}

impl TestDatabase {
    /// Connect to `TEST_DATABASE_URL`, or `None` when it is not set
    pub async fn from_env() -> Option<Self> {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt::try_init();
        });

        let database_url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("TEST_DATABASE_URL not set, skipping PostgreSQL test");
                return None;
            }
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to test database");
        run_migrations(&pool).await.expect("Failed to run migrations");

        let database = Self { pool, database_url };
        database.cleanup().await.expect("Failed to clean test database");
        Some(database)
    }

    pub fn service(&self) -> DatabaseService {
        DatabaseService::new(self.pool.clone())
    }

    /// Clean all test data from the database
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        // Delete in reverse order of dependencies
        sqlx::query("DELETE FROM group_students").execute(&self.pool).await?;
        sqlx::query("UPDATE users SET group_id = NULL").execute(&self.pool).await?;
        sqlx::query("DELETE FROM groups").execute(&self.pool).await?;
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;
        sqlx::query("DELETE FROM courses").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn count_records(&self, table: &str) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}

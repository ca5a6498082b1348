use crate::database::EmailRepository;
use crate::domain::EmailRecord;
use crate::features::users::model::DbEmailRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub struct SqliteRepository {
    pool: Pool<Sqlite>,
}

impl SqliteRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailRepository for SqliteRepository {
    async fn list_emails(&self) -> Result<Vec<EmailRecord>> {
        let rows = sqlx::query_as::<_, DbEmailRecord>("SELECT id, email FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list email records")?;

        Ok(rows.into_iter().map(EmailRecord::from).collect())
    }

    async fn create_email(&self, email: &str) -> Result<EmailRecord> {
        let row = sqlx::query_as::<_, DbEmailRecord>(
            r#"
            INSERT INTO users (email)
            VALUES (?)
            RETURNING id, email
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .context("Failed to insert email record")?;

        Ok(row.into())
    }
}

/// Opens a pool on `database_url`, creating the database file first if it
/// doesn't exist yet, and brings the schema up to date.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<Pool<Sqlite>> {
    let exists = Sqlite::database_exists(database_url).await.unwrap_or(false);
    if !exists {
        tracing::info!(database_url, "database not found, creating");
        Sqlite::create_database(database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", database_url))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .with_context(|| format!("Failed to create pool on {}", database_url))?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::debug!("migrations applied");
    Ok(())
}

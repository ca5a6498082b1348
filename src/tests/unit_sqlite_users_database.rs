use crate::database::sqlite::{connect, run_migrations, SqliteRepository};
use crate::database::EmailRepository;
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashSet;

// create a sqlite database in memory to test against
async fn setup_test_db() -> SqliteRepository {
    // a single connection, every new connection would get its own empty memory db
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    run_migrations(&pool).await.expect("Failed to run migrations");

    SqliteRepository::new(pool)
}

#[tokio::test]
async fn test_sqlite_empty_list() {
    let repo = setup_test_db().await;

    let emails = repo.list_emails().await.expect("Should query");

    assert!(emails.is_empty());
}

// create then list: the record is there and its id is unique
#[tokio::test]
async fn test_sqlite_create_and_list() {
    let repo = setup_test_db().await;

    let created = repo
        .create_email("a@example.com")
        .await
        .expect("Should insert");
    assert_eq!(created.email, "a@example.com");

    let emails = repo.list_emails().await.unwrap();
    assert_eq!(emails, vec![created]);
}

// duplicates are allowed, ids increase in insertion order
#[tokio::test]
async fn test_sqlite_duplicates_get_distinct_ids() {
    let repo = setup_test_db().await;

    for email in ["dup@example.com", "other@example.com", "dup@example.com"] {
        repo.create_email(email).await.unwrap();
    }

    let emails = repo.list_emails().await.unwrap();
    let ids: Vec<i64> = emails.iter().map(|r| r.id).collect();
    let unique: HashSet<i64> = ids.iter().copied().collect();

    assert_eq!(emails.len(), 3);
    assert_eq!(unique.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(emails[0].email, "dup@example.com");
    assert_eq!(emails[2].email, "dup@example.com");
}

// a closed pool behaves like an unavailable store
#[tokio::test]
async fn test_sqlite_closed_pool_errors() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool.close().await;
    let repo = SqliteRepository::new(pool);

    assert!(repo.list_emails().await.is_err());
    assert!(repo.create_email("a@example.com").await.is_err());
}

// connect() creates a missing database file and the data survives a reconnect
#[tokio::test]
async fn test_sqlite_connect_creates_database_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emails.db");
    let url = format!("sqlite://{}", path.display());
    assert!(!path.exists());

    let pool = connect(&url, 1).await.expect("Should create database");
    assert!(path.exists());
    SqliteRepository::new(pool.clone())
        .create_email("persisted@example.com")
        .await
        .unwrap();
    pool.close().await;

    // running migrations again on an existing db is fine
    let pool = connect(&url, 1).await.expect("Should reopen database");
    let emails = SqliteRepository::new(pool).list_emails().await.unwrap();
    assert_eq!(emails.len(), 1);
    assert_eq!(emails[0].email, "persisted@example.com");
}

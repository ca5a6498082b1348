use crate::domain::EmailRecord;
use anyhow::Result;
use async_trait::async_trait;

pub mod sqlite;

// shared across request handlers behind an Arc, so it has to be Send + Sync.
// sqlx::Pool already is.
#[async_trait]
pub trait EmailRepository: Send + Sync {
    /// All records in insertion order. An empty store is an empty Vec.
    async fn list_emails(&self) -> Result<Vec<EmailRecord>>;

    /// Stores a new record and returns it with the id the store assigned.
    async fn create_email(&self, email: &str) -> Result<EmailRecord>;
}

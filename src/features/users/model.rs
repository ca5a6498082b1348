use crate::domain::EmailRecord;
use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Debug, Eq, PartialEq, Clone, Display)]
#[display("{}", email)]
pub struct DbEmailRecord {
    pub id: i64,
    pub email: String,
}

impl From<DbEmailRecord> for EmailRecord {
    fn from(row: DbEmailRecord) -> Self {
        EmailRecord {
            id: row.id,
            email: row.email,
        }
    }
}

// body of POST /users. only presence of `email` is checked, never its format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmailRequest {
    pub email: String,
}

use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

// the only entity in the system. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[display("{}", email)]
pub struct EmailRecord {
    pub id: i64,
    pub email: String,
}

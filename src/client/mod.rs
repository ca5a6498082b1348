use crate::domain::EmailRecord;
use async_trait::async_trait;
use thiserror::Error;

pub mod http;
pub mod state;
pub mod view;

pub use http::HttpEmailApi;
pub use state::{ClientState, EmailManager, SubmitOutcome};
pub use view::{render, View, ViewContent};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("response was not a list of email records")]
    InvalidFormat,
}

// what the client needs from the API. the HTTP implementation lives in `http`,
// tests swap in their own
#[async_trait]
pub trait EmailApi: Send + Sync {
    async fn list(&self) -> Result<Vec<EmailRecord>, ClientError>;
    async fn create(&self, email: &str) -> Result<EmailRecord, ClientError>;
}

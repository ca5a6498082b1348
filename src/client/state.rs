use crate::client::view::{render, View};
use crate::client::{ClientError, EmailApi};
use crate::domain::EmailRecord;

pub const FETCH_ERROR: &str = "Failed to fetch emails";
pub const FORMAT_ERROR: &str = "Invalid data format from server";
pub const ADD_ERROR: &str = "Failed to add email";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientState {
    pub input: String,
    pub emails: Vec<EmailRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank, nothing was sent.
    Skipped,
    Added(EmailRecord),
    Failed,
}

/// Holds the form state and drives it against an [`EmailApi`]. Requests are
/// issued one at a time; every method takes `&mut self`.
pub struct EmailManager {
    api: Box<dyn EmailApi>,
    state: ClientState,
}

impl EmailManager {
    pub fn new(api: Box<dyn EmailApi>) -> Self {
        Self {
            api,
            state: ClientState::default(),
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn view(&self) -> View {
        render(&self.state)
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.state.input = value.into();
    }

    /// Marks a list fetch as pending and clears any previous error.
    pub fn start_loading(&mut self) {
        self.state.loading = true;
        self.state.error = None;
    }

    pub async fn load(&mut self) {
        self.start_loading();
        let result = self.api.list().await;
        self.finish_loading(result);
    }

    fn finish_loading(&mut self, result: Result<Vec<EmailRecord>, ClientError>) {
        match result {
            Ok(emails) => {
                tracing::debug!(count = emails.len(), "fetched emails");
                self.state.emails = emails;
            }
            Err(ClientError::InvalidFormat) => {
                tracing::warn!("list response was not an array");
                self.state.emails.clear();
                self.state.error = Some(FORMAT_ERROR.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "error fetching emails");
                self.state.emails.clear();
                self.state.error = Some(FETCH_ERROR.to_string());
            }
        }
        self.state.loading = false;
    }

    /// Sends the current input. Blank input is a no-op; on success the input is
    /// cleared and the list re-fetched, on failure the input is kept.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.state.input.trim().is_empty() {
            return SubmitOutcome::Skipped;
        }

        match self.api.create(&self.state.input).await {
            Ok(record) => {
                self.state.input.clear();
                self.load().await;
                SubmitOutcome::Added(record)
            }
            Err(err) => {
                tracing::warn!(error = %err, "error adding email");
                self.state.error = Some(ADD_ERROR.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}

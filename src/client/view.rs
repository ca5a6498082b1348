use crate::client::state::ClientState;
use std::fmt;

pub const TITLE: &str = "Email Manager 📧";
pub const LOADING_TEXT: &str = "Loading emails...";
pub const EMPTY_TEXT: &str = "No emails found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewContent {
    Loading,
    Error(String),
    List(Vec<String>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub count: usize,
    pub content: ViewContent,
}

/// Pure mapping from state to what is shown. Loading wins over an error, an
/// error wins over the list.
pub fn render(state: &ClientState) -> View {
    let content = if state.loading {
        ViewContent::Loading
    } else if let Some(message) = &state.error {
        ViewContent::Error(message.clone())
    } else if !state.emails.is_empty() {
        ViewContent::List(state.emails.iter().map(|r| r.email.clone()).collect())
    } else {
        ViewContent::Empty
    };

    View {
        count: state.emails.len(),
        content,
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved Emails ({})", self.count)?;
        match &self.content {
            ViewContent::Loading => writeln!(f, "  {}", LOADING_TEXT),
            ViewContent::Error(message) => writeln!(f, "  error: {}", message),
            ViewContent::List(emails) => {
                for email in emails {
                    writeln!(f, "  - {}", email)?;
                }
                Ok(())
            }
            ViewContent::Empty => writeln!(f, "  {}", EMPTY_TEXT),
        }
    }
}

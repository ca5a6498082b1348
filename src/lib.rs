use crate::database::EmailRepository;
use std::sync::Arc;

pub mod client;
pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod features;
pub mod logging;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn EmailRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmailRepository>) -> Self {
        Self { repo }
    }
}

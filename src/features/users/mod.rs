pub mod model;

use crate::domain::EmailRecord;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use model::CreateEmailRequest;

pub fn users_router() -> Router<AppState> {
    Router::new().route("/users", get(list_users_handler).post(create_user_handler))
}

async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmailRecord>>, ApiError> {
    let emails = state.repo.list_emails().await?;
    Ok(Json(emails))
}

async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmailRequest>, JsonRejection>,
) -> Result<Json<EmailRecord>, ApiError> {
    // a bad body is reported like any other failure
    let Json(request) = payload.map_err(|rejection| {
        anyhow::anyhow!("rejected create request body: {}", rejection.body_text())
    })?;

    let record = state.repo.create_email(&request.email).await?;
    tracing::info!(id = record.id, email = %record, "created email record");

    Ok(Json(record))
}

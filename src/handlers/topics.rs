use crate::error::AppError;
use crate::response;
use crate::service::TopicService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let topics = TopicService::list(&state.pool).await?;
    Ok(response::ok("topics", topics))
}

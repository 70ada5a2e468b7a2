use crate::error::AppError;
use crate::response;
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(response::ok("users", users))
}

pub async fn read(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::find(&state.pool, &username).await?;
    Ok(response::ok("user", user))
}

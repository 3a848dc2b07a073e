use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{instrument, warn};

use crate::{
    error::{get_only, ApiError},
    state::AppState,
    users::dto::{PublicUser, UserResponse},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/user", get(get_user_by_query).fallback(get_only))
        .route("/user/:user_id", get(get_user).fallback(get_only))
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserQuery {
    pub user_id: Option<String>,
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    lookup(&state, &user_id)
}

#[instrument(skip(state))]
pub async fn get_user_by_query(
    State(state): State<AppState>,
    Query(query): Query<GetUserQuery>,
) -> Result<Json<UserResponse>, ApiError> {
    let user_id = query
        .user_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::Validation("User ID is required".into()))?;
    lookup(&state, &user_id)
}

fn lookup(state: &AppState, user_id: &str) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.find_by_id(user_id).ok_or_else(|| {
        warn!(%user_id, "user lookup failed");
        ApiError::NotFound("User not found".into())
    })?;

    Ok(Json(UserResponse {
        success: true,
        user: PublicUser::from(user),
    }))
}

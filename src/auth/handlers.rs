use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::dto::{SignupRequest, SignupResponse},
    error::{post_only, ApiError},
    state::AppState,
};

const ALLOWED_EMAIL_SUFFIX: &str = "@college.harvard.edu";

pub fn signup_routes() -> Router<AppState> {
    Router::new().route("/auth/signup", post(signup).fallback(post_only))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<SignupResponse>, ApiError> {
    // an unreadable body counts as an empty one
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("signup missing email or password");
        return Err(ApiError::Validation(
            "Email and password are required".into(),
        ));
    }

    if !payload.email.ends_with(ALLOWED_EMAIL_SUFFIX) {
        warn!(email = %payload.email, "signup email outside allowed domain");
        return Err(ApiError::Validation(
            "Please use a valid Harvard College email (@college.harvard.edu)".into(),
        ));
    }

    if state.users.find_by_email(&payload.email).is_some() {
        warn!(email = %payload.email, "signup email already registered");
        return Err(ApiError::Conflict(
            "An account with this email already exists".into(),
        ));
    }

    let user = state.users.create(&payload.email, &payload.password);

    info!(user_id = %user.id, email = %user.email, "account created");
    Ok(Json(SignupResponse {
        success: true,
        message: "Account created successfully",
        user_id: user.id,
    }))
}

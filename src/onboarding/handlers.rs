use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    error::{post_only, ApiError},
    onboarding::dto::{CompleteOnboardingRequest, OnboardingResponse},
    state::AppState,
    users::{repo::NewProfile, PublicUser},
};

pub fn onboarding_routes() -> Router<AppState> {
    Router::new().route("/onboarding/complete", post(complete).fallback(post_only))
}

#[instrument(skip(state, payload))]
pub async fn complete(
    State(state): State<AppState>,
    payload: Result<Json<CompleteOnboardingRequest>, JsonRejection>,
) -> Result<Json<OnboardingResponse>, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();

    if !payload.has_all_fields() {
        warn!("onboarding payload missing required fields");
        return Err(ApiError::Validation(
            "Missing required onboarding information".into(),
        ));
    }

    let user = state
        .users
        .update_profile(
            &payload.user_id,
            NewProfile {
                name: payload.name,
                gender: payload.gender,
                sport_type: payload.sport_type,
                training_frequency: payload.training_frequency,
                diet_goal: payload.diet_goal,
            },
        )
        .ok_or_else(|| {
            warn!(user_id = %payload.user_id, "onboarding for unknown user");
            ApiError::NotFound("User not found".into())
        })?;

    info!(user_id = %user.id, "onboarding completed");
    Ok(Json(OnboardingResponse {
        success: true,
        message: "Onboarding completed successfully",
        user: PublicUser::from(user),
    }))
}

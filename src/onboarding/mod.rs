use axum::Router;

use crate::state::AppState;

mod dto;
mod handlers;

pub fn router() -> Router<AppState> {
    handlers::onboarding_routes()
}

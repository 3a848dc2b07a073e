use axum::Router;

use crate::state::AppState;

mod dto;
mod handlers;
pub mod repo;

pub use dto::PublicUser;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Request-level failures, converted to a JSON body at the handler boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed { allow: &'static str },
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, allow) = match &self {
            ApiError::Validation(_) | ApiError::Conflict(_) => (StatusCode::BAD_REQUEST, None),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, None),
            ApiError::MethodNotAllowed { allow } => (StatusCode::METHOD_NOT_ALLOWED, Some(*allow)),
        };

        let body = ErrorBody {
            success: false,
            message: self.to_string(),
        };

        let mut response = (status, Json(body)).into_response();
        if let Some(allow) = allow {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(allow));
        }
        response
    }
}

pub async fn post_only() -> ApiError {
    ApiError::MethodNotAllowed { allow: "POST" }
}

pub async fn get_only() -> ApiError {
    ApiError::MethodNotAllowed { allow: "GET" }
}

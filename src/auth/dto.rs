use serde::{Deserialize, Serialize};

/// Request body for signup. Fields default to empty so a missing key and an
/// empty value hit the same validation path.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub success: bool,
    pub message: &'static str,
    pub user_id: String,
}

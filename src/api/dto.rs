use serde::{Deserialize, Serialize};

use crate::models::{Role, SessionStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct UpdateSessionStatusRequest {
    pub status: SessionStatus,
}

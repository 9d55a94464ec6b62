use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub skills: Vec<String>,
    pub hourly_rate: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReviewRequest {
    pub session_id: String,
    pub rating: i32,
    pub comment: String,
}

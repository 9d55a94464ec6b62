use serde::{Deserialize, Serialize};

/// A booked (or requested) mentorship session. Status transitions are
/// server-authoritative; the client only reflects the reply of a
/// status-update call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub mentor_id: String,
    pub mentee_id: String,
    pub topic: String,
    pub scheduled_at: String,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionRequest {
    pub mentor_id: String,
    pub topic: String,
    pub scheduled_at: String,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{InterviewType, SessionStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: InterviewType,
    pub status: SessionStatus,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub mentor_id: Option<i64>,
    #[serde(default)]
    pub mentor_name: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub started_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub peer_user_id: Option<i64>,
    #[serde(default)]
    pub peer_user_name: Option<String>,
    #[serde(default, rename = "isPeerInterview", alias = "peerInterview")]
    pub is_peer_interview: bool,
}

/// New interview session. Duration defaults to 60 minutes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: InterviewType,
    pub scheduled_at: NaiveDateTime,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mentor_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_user_id: Option<i64>,
    #[serde(rename = "isPeerInterview")]
    pub is_peer_interview: bool,
}

impl CreateInterviewRequest {
    pub const DEFAULT_DURATION_MINUTES: u32 = 60;

    pub fn new(title: impl Into<String>, kind: InterviewType, scheduled_at: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            description: None,
            kind,
            scheduled_at,
            duration_minutes: Self::DEFAULT_DURATION_MINUTES,
            mentor_id: None,
            peer_user_id: None,
            is_peer_interview: false,
        }
    }
}

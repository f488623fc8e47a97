use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::query::{QueryParams, ToQuery};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponseRequest {
    pub question_id: i64,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_session_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_seconds: Option<u32>,
}

impl SubmitResponseRequest {
    pub fn new(question_id: i64, response: impl Into<String>) -> Self {
        Self {
            question_id,
            response: response.into(),
            interview_session_id: None,
            audio_url: None,
            response_time_seconds: None,
        }
    }
}

/// A recorded behavioral answer and, once analyzed, the backend's scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralResponse {
    pub id: i64,
    #[serde(default)]
    pub question_id: Option<i64>,
    #[serde(default)]
    pub interview_session_id: Option<i64>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub content_analysis: Option<String>,
    #[serde(default)]
    pub tone_analysis: Option<String>,
    #[serde(default)]
    pub improvement_suggestions: Option<String>,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub response_time_seconds: Option<u32>,
    #[serde(default)]
    pub submitted_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub analyzed_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub mentor_score: Option<f64>,
    #[serde(default)]
    pub mentor_feedback: Option<String>,
    #[serde(default, rename = "isReviewedByMentor", alias = "reviewedByMentor")]
    pub is_reviewed_by_mentor: bool,
}

impl BehavioralResponse {
    pub fn is_analyzed(&self) -> bool {
        self.analyzed_at.is_some() || self.overall_score.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResponseFilter {
    pub question_id: Option<i64>,
    pub interview_session_id: Option<i64>,
}

impl ToQuery for ResponseFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("questionId", self.question_id)
            .with_opt("interviewSessionId", self.interview_session_id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_submit_request_minimal_shape() {
        let request = SubmitResponseRequest::new(12, "I led the migration...");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"questionId": 12, "response": "I led the migration..."})
        );
    }

    #[test]
    fn test_response_analysis_state() {
        let pending: BehavioralResponse =
            serde_json::from_value(json!({"id": 1, "response": "..."})).unwrap();
        assert!(!pending.is_analyzed());

        let analyzed: BehavioralResponse = serde_json::from_value(json!({
            "id": 2,
            "sentimentLabel": "POSITIVE",
            "overallScore": 8.2,
            "analyzedAt": "2026-10-02T09:15:00"
        }))
        .unwrap();
        assert!(analyzed.is_analyzed());
        assert_eq!(analyzed.sentiment_label.as_deref(), Some("POSITIVE"));
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{ProgrammingLanguage, SubmissionStatus};
use crate::query::{QueryParams, ToQuery};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitCodeRequest {
    pub question_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_session_id: Option<i64>,
    pub code: String,
    pub language: ProgrammingLanguage,
}

/// Ad-hoc run of code against custom input; nothing is recorded.
#[derive(Debug, Clone, Serialize)]
pub struct TestCodeRequest {
    pub code: String,
    pub language: ProgrammingLanguage,
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodingSubmission {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub question_id: Option<i64>,
    #[serde(default)]
    pub interview_session_id: Option<i64>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub language: Option<ProgrammingLanguage>,
    #[serde(default)]
    pub status: Option<SubmissionStatus>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub execution_time_ms: Option<u64>,
    #[serde(default)]
    pub memory_usage_kb: Option<u64>,
    #[serde(default)]
    pub compilation_error: Option<String>,
    #[serde(default)]
    pub runtime_error: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub test_cases_passed: Option<u32>,
    #[serde(default)]
    pub total_test_cases: Option<u32>,
    #[serde(default)]
    pub submitted_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub evaluated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionFilter {
    pub question_id: Option<i64>,
    pub interview_session_id: Option<i64>,
}

impl ToQuery for SubmissionFilter {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("questionId", self.question_id)
            .with_opt("interviewSessionId", self.interview_session_id)
    }
}

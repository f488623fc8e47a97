//! Code submission and test-run endpoints.

use reqwest::Method;
use serde_json::Value;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::query::ToQuery;
use crate::types::{CodingSubmission, SubmissionFilter, SubmitCodeRequest, TestCodeRequest};

pub struct CodingApi<'a> {
    gateway: &'a ApiGateway,
}

impl<'a> CodingApi<'a> {
    pub(crate) fn new(gateway: &'a ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn submit(&self, request: &SubmitCodeRequest) -> ApiResult<CodingSubmission> {
        self.gateway
            .send_json(Method::POST, "/coding/submit", request)
            .await
    }

    /// Runs code against custom input. The execution report is backend-defined.
    pub async fn test(&self, request: &TestCodeRequest) -> ApiResult<Value> {
        self.gateway
            .send_json(Method::POST, "/coding/test", request)
            .await
    }

    pub async fn submissions(&self, filter: &SubmissionFilter) -> ApiResult<Vec<CodingSubmission>> {
        self.gateway
            .get("/coding/submissions", Some(&filter.to_query()))
            .await
    }

    pub async fn submission(&self, id: i64) -> ApiResult<CodingSubmission> {
        self.gateway
            .get(&format!("/coding/submissions/{id}"), None)
            .await
    }
}

//! Behavioral response recording and analysis endpoints.

use reqwest::Method;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::query::ToQuery;
use crate::types::{BehavioralResponse, ResponseFilter, SubmitResponseRequest};

pub struct BehavioralApi<'a> {
    gateway: &'a ApiGateway,
}

impl<'a> BehavioralApi<'a> {
    pub(crate) fn new(gateway: &'a ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn submit(&self, request: &SubmitResponseRequest) -> ApiResult<BehavioralResponse> {
        self.gateway
            .send_json(Method::POST, "/behavioral/submit", request)
            .await
    }

    pub async fn responses(&self, filter: &ResponseFilter) -> ApiResult<Vec<BehavioralResponse>> {
        self.gateway
            .get("/behavioral/responses", Some(&filter.to_query()))
            .await
    }

    pub async fn response(&self, id: i64) -> ApiResult<BehavioralResponse> {
        self.gateway
            .get(&format!("/behavioral/responses/{id}"), None)
            .await
    }

    /// Asks the backend to analyze a response; returns the updated record.
    pub async fn analyze(&self, id: i64) -> ApiResult<BehavioralResponse> {
        self.gateway
            .call(Method::POST, &format!("/behavioral/responses/{id}/analyze"))
            .await
    }
}

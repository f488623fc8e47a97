//! Interview scheduling and lifecycle endpoints.

use reqwest::Method;
use serde::Serialize;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::query::QueryParams;
use crate::types::{CreateInterviewRequest, Interview, SessionStatus};

#[derive(Serialize)]
struct CompleteRequest<'a> {
    feedback: &'a str,
}

pub struct InterviewsApi<'a> {
    gateway: &'a ApiGateway,
}

impl<'a> InterviewsApi<'a> {
    pub(crate) fn new(gateway: &'a ApiGateway) -> Self {
        Self { gateway }
    }

    pub async fn create(&self, request: &CreateInterviewRequest) -> ApiResult<Interview> {
        self.gateway
            .send_json(Method::POST, "/interviews", request)
            .await
    }

    /// The caller's own interviews, optionally narrowed to one status.
    pub async fn list(&self, status: Option<SessionStatus>) -> ApiResult<Vec<Interview>> {
        let query = QueryParams::new().with_opt("status", status);
        self.gateway.get("/interviews", Some(&query)).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Interview> {
        self.gateway.get(&format!("/interviews/{id}"), None).await
    }

    pub async fn start(&self, id: i64) -> ApiResult<Interview> {
        self.gateway
            .call(Method::PUT, &format!("/interviews/{id}/start"))
            .await
    }

    pub async fn complete(&self, id: i64, feedback: &str) -> ApiResult<Interview> {
        self.gateway
            .send_json(
                Method::PUT,
                &format!("/interviews/{id}/complete"),
                &CompleteRequest { feedback },
            )
            .await
    }

    pub async fn cancel(&self, id: i64) -> ApiResult<()> {
        self.gateway
            .request(Method::DELETE, &format!("/interviews/{id}"), None, None)
            .await
            .map(|_| ())
    }

    /// Open peer interviews other users can join.
    pub async fn available(&self) -> ApiResult<Vec<Interview>> {
        self.gateway.get("/interviews/available", None).await
    }

    pub async fn join(&self, id: i64) -> ApiResult<Interview> {
        self.gateway
            .call(Method::POST, &format!("/interviews/{id}/join"))
            .await
    }
}

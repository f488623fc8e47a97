//! Admin-only endpoints.

use reqwest::Method;
use serde_json::Value;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::query::ToQuery;
use crate::types::{AdminUserUpdate, UserFilter, UserProfile};

pub struct AdminApi<'a> {
    gateway: &'a ApiGateway,
}

impl<'a> AdminApi<'a> {
    pub(crate) fn new(gateway: &'a ApiGateway) -> Self {
        Self { gateway }
    }

    /// Dashboard figures, passed through verbatim.
    pub async fn dashboard(&self) -> ApiResult<Value> {
        self.gateway.get("/admin/dashboard", None).await
    }

    pub async fn users(&self, filter: &UserFilter) -> ApiResult<Vec<UserProfile>> {
        self.gateway
            .get("/admin/users", Some(&filter.to_query()))
            .await
    }

    pub async fn update_user(&self, id: i64, update: &AdminUserUpdate) -> ApiResult<UserProfile> {
        self.gateway
            .send_json(Method::PUT, &format!("/admin/users/{id}"), update)
            .await
    }

    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.gateway
            .request(Method::DELETE, &format!("/admin/users/{id}"), None, None)
            .await
            .map(|_| ())
    }

    pub async fn system_stats(&self) -> ApiResult<Value> {
        self.gateway.get("/admin/stats", None).await
    }
}

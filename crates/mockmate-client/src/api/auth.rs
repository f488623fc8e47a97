//! Account, session and profile endpoints.

use bytes::Bytes;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::gateway::ApiGateway;
use crate::query::QueryParams;
use crate::transport::FilePart;
use crate::types::{AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest, UserProfile};

/// Leaderboard size when none is given.
pub const DEFAULT_LEADERBOARD_LIMIT: u32 = 10;

#[derive(Debug, Deserialize)]
struct RefreshResponse {
    token: String,
}

pub struct AuthApi<'a> {
    gateway: &'a ApiGateway,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(gateway: &'a ApiGateway) -> Self {
        Self { gateway }
    }

    /// Signs in and stores the returned credential.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<AuthResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .gateway
            .send_json(Method::POST, "/auth/login", &request)
            .await?;
        self.gateway.store_token(&response.token)?;
        Ok(response)
    }

    /// Creates an account and stores the returned credential.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self
            .gateway
            .send_json(Method::POST, "/auth/register", request)
            .await?;
        self.gateway.store_token(&response.token)?;
        Ok(response)
    }

    /// Invalidates the session. The local credential is cleared even when
    /// the backend call fails.
    pub async fn logout(&self) -> ApiResult<Value> {
        let result = self
            .gateway
            .request(Method::POST, "/auth/logout", None, None)
            .await;
        self.gateway.clear_token()?;
        result
    }

    /// Exchanges the current credential for a fresh one.
    pub async fn refresh(&self) -> ApiResult<String> {
        let response: RefreshResponse = self.gateway.call(Method::POST, "/auth/refresh").await?;
        self.gateway.store_token(&response.token)?;
        Ok(response.token)
    }

    pub async fn profile(&self) -> ApiResult<UserProfile> {
        self.gateway.get("/user/profile", None).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<UserProfile> {
        self.gateway
            .send_json(Method::PUT, "/user/profile", update)
            .await
    }

    /// Uploads an avatar as multipart field `file`; returns the backend's reply.
    pub async fn upload_profile_image(
        &self,
        file_name: &str,
        mime_type: Option<&str>,
        bytes: Bytes,
    ) -> ApiResult<Value> {
        let mut part = FilePart::new("file", file_name, bytes);
        if let Some(mime) = mime_type {
            part = part.mime_type(mime);
        }
        self.gateway
            .upload("/user/profile/upload-image", part)
            .await
    }

    /// Ranked users, as computed by the backend.
    pub async fn leaderboard(&self, limit: Option<u32>) -> ApiResult<Vec<UserProfile>> {
        let query =
            QueryParams::new().with("limit", limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT));
        self.gateway.get("/user/leaderboard", Some(&query)).await
    }

    /// Aggregate statistics for the signed-in user, passed through verbatim.
    pub async fn stats(&self) -> ApiResult<Value> {
        self.gateway.get("/user/stats", None).await
    }

    pub async fn mentors(&self) -> ApiResult<Vec<UserProfile>> {
        self.gateway.get("/user/mentors", None).await
    }
}

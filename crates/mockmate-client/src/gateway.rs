//! The API gateway: the single choke point for backend traffic.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::{AdminApi, AuthApi, BehavioralApi, CodingApi, InterviewsApi, QuestionsApi};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::middleware::{self, Layered};
use crate::navigation::Navigator;
use crate::query::QueryParams;
use crate::token::TokenStore;
use crate::transport::{ApiRequest, FilePart, ReqwestTransport, Transport};

/// Typed client for the Mock-Mate backend.
///
/// Owns its configuration, the credential store and the login-redirect
/// callback. Every call runs through the policy stack from
/// [`crate::middleware::layer`]; there is no way to issue a request that
/// skips it. Cloning is cheap and clones share the same store.
#[derive(Clone)]
pub struct ApiGateway {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenStore>,
    base_url: String,
}

impl ApiGateway {
    /// Builds a gateway over a reqwest transport.
    pub fn new(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiResult<Self> {
        let base = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(
            base,
            config.base_url.clone(),
            tokens,
            navigator,
        ))
    }

    /// Builds a gateway over any base transport. The gateway policies are
    /// layered on top of `base`.
    pub fn with_transport<T: Transport + 'static>(
        base: T,
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let stack: Layered<T> = middleware::layer(base, Arc::clone(&tokens), navigator);
        Self {
            transport: Arc::new(stack),
            tokens,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_authenticated(&self) -> bool {
        self.tokens.get().is_some()
    }

    /// Issues `method base_url+path[?query]` and decodes the body as JSON.
    ///
    /// An empty 2xx body decodes to `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: Option<&QueryParams>,
    ) -> ApiResult<Value> {
        let full_path = match query {
            Some(query) => query.append_to(path),
            None => path.to_string(),
        };
        let mut request = ApiRequest::new(method, full_path);
        if let Some(body) = body {
            request = request.json(body.clone());
        }
        self.dispatch(request).await
    }

    /// `GET` decoded into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> ApiResult<T> {
        let value = self.request(Method::GET, path, None, query).await?;
        decode_as(value)
    }

    /// Sends `body` as JSON and decodes the response into `T`.
    pub async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)
            .map_err(|err| ApiError::config(format!("Failed to encode request body: {err}")))?;
        let value = self.request(method, path, Some(&body), None).await?;
        decode_as(value)
    }

    /// Sends a bodiless request and decodes the response into `T`.
    pub async fn call<T: DeserializeOwned>(&self, method: Method, path: &str) -> ApiResult<T> {
        let value = self.request(method, path, None, None).await?;
        decode_as(value)
    }

    /// Multipart `POST` of a single file.
    pub async fn upload<T: DeserializeOwned>(&self, path: &str, file: FilePart) -> ApiResult<T> {
        let request = ApiRequest::new(Method::POST, path).multipart(file);
        let value = self.dispatch(request).await?;
        decode_as(value)
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn interviews(&self) -> InterviewsApi<'_> {
        InterviewsApi::new(self)
    }

    pub fn questions(&self) -> QuestionsApi<'_> {
        QuestionsApi::new(self)
    }

    pub fn coding(&self) -> CodingApi<'_> {
        CodingApi::new(self)
    }

    pub fn behavioral(&self) -> BehavioralApi<'_> {
        BehavioralApi::new(self)
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi::new(self)
    }

    pub(crate) fn store_token(&self, token: &str) -> ApiResult<()> {
        self.tokens.set(token).map_err(|err| ApiError::storage(&err))
    }

    pub(crate) fn clear_token(&self) -> ApiResult<bool> {
        self.tokens.clear().map_err(|err| ApiError::storage(&err))
    }

    async fn dispatch(&self, request: ApiRequest) -> ApiResult<Value> {
        tracing::debug!(method = %request.method, path = %request.path, "Mock-Mate API request");
        let response = self.transport.send(request).await?;
        decode_body(&response.body)
    }
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

fn decode_body(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|err| {
        let preview: String = String::from_utf8_lossy(body).chars().take(200).collect();
        ApiError::decode(format!("Response is not valid JSON: {err}")).with_details(preview)
    })
}

fn decode_as<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value)
        .map_err(|err| ApiError::decode(format!("Unexpected response shape: {err}")))
}

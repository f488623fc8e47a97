//! Minimal request/response transport.
//!
//! A [`Transport`] moves one [`ApiRequest`] to the backend and hands back the
//! raw [`ApiResponse`], whatever its status. Cross-cutting policy (auth
//! header, status normalization, session expiry) is layered on top by the
//! decorators in [`crate::middleware`].

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Boxed future returned by [`Transport::send`].
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = ApiResult<ApiResponse>> + Send + 'a>>;

/// Moves a single request to the backend.
pub trait Transport: Send + Sync {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        (**self).send(request)
    }
}

/// Outgoing request. `path` is relative to the base URL and already carries
/// its query string.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    #[must_use]
    pub fn multipart(mut self, part: FilePart) -> Self {
        self.body = RequestBody::Multipart(part);
        self
    }
}

#[derive(Debug, Clone)]
pub enum RequestBody {
    Empty,
    /// Serialized with `Content-Type: application/json`
    Json(Value),
    /// Single-file `multipart/form-data` upload
    Multipart(FilePart),
}

/// One file field of a multipart upload.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Bytes,
}

impl FilePart {
    pub fn new(field: impl Into<String>, file_name: impl Into<String>, bytes: Bytes) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    #[must_use]
    pub fn mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }
}

/// Raw backend response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|err| ApiError::config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .http
            .request(request.method, url)
            .headers(request.headers);

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(file) => {
                let mut part = Part::bytes(file.bytes.to_vec()).file_name(file.file_name);
                if let Some(mime) = file.mime_type.as_deref() {
                    part = part.mime_str(mime).map_err(|err| {
                        ApiError::config(format!("Invalid upload mime type '{mime}': {err}"))
                    })?;
                }
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        let response = builder.send().await.map_err(|err| {
            let summary = if err.is_timeout() {
                "Request to Mock-Mate API timed out"
            } else {
                "Could not reach Mock-Mate API"
            };
            ApiError::network(summary).with_details(err.to_string())
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            ApiError::network("Failed to read Mock-Mate API response").with_details(err.to_string())
        })?;

        Ok(ApiResponse { status, body })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        Box::pin(self.execute(request))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! Scripted in-memory transport for unit tests.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::{ApiRequest, ApiResponse, ApiResult, Transport, TransportFuture};

    #[derive(Default)]
    pub struct ScriptedTransport {
        replies: Mutex<VecDeque<ApiResult<ApiResponse>>>,
        seen: Mutex<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        pub fn new(replies: impl IntoIterator<Item = ApiResult<ApiResponse>>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().collect()),
                seen: Mutex::default(),
            }
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Transport for ScriptedTransport {
        fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
            self.seen.lock().unwrap().push(request);
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted transport ran out of replies");
            Box::pin(std::future::ready(reply))
        }
    }
}

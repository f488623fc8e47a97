//! Transport decorators enforcing the gateway's cross-cutting policies.
//!
//! Each layer wraps an inner [`Transport`] and is usable on its own. The
//! gateway always assembles them as
//! `SessionGuard(NormalizeStatus(BearerAuth(base)))`, so a 401 is turned
//! into a session expiry before any caller sees it.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::error::{ApiError, ApiErrorKind};
use crate::navigation::Navigator;
use crate::token::TokenStore;
use crate::transport::{ApiRequest, Transport, TransportFuture};

/// Sets `Authorization: Bearer <token>` when a token is stored, and strips
/// any caller-supplied `Authorization` header otherwise.
pub struct BearerAuth<T> {
    inner: T,
    tokens: Arc<dyn TokenStore>,
}

impl<T> BearerAuth<T> {
    pub fn new(inner: T, tokens: Arc<dyn TokenStore>) -> Self {
        Self { inner, tokens }
    }
}

impl<T: Transport> Transport for BearerAuth<T> {
    fn send(&self, mut request: ApiRequest) -> TransportFuture<'_> {
        match self.tokens.get() {
            Some(token) => match HeaderValue::from_str(&format!("Bearer {token}")) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    request.headers.insert(AUTHORIZATION, value);
                }
                Err(err) => {
                    let error = ApiError::config("Stored credential is not a valid header value")
                        .with_details(err.to_string());
                    return Box::pin(std::future::ready(Err(error)));
                }
            },
            None => {
                request.headers.remove(AUTHORIZATION);
            }
        }
        self.inner.send(request)
    }
}

/// Turns non-2xx responses into [`ApiErrorKind::Http`] errors.
pub struct NormalizeStatus<T> {
    inner: T,
}

impl<T> NormalizeStatus<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Transport> Transport for NormalizeStatus<T> {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        let method = request.method.clone();
        let path = request.path.clone();
        let pending = self.inner.send(request);
        Box::pin(async move {
            let response = pending.await?;
            if response.status.is_success() {
                return Ok(response);
            }
            let status = response.status.as_u16();
            if response.status != StatusCode::UNAUTHORIZED {
                tracing::warn!(%method, %path, status, "Mock-Mate API rejected request");
            }
            Err(ApiError::http(status, &response.body_text()))
        })
    }
}

/// Intercepts 401 errors: clears the stored token, redirects to login once,
/// and reports [`ApiErrorKind::SessionExpired`] instead of the raw error.
pub struct SessionGuard<T> {
    inner: T,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
}

impl<T> SessionGuard<T> {
    pub fn new(inner: T, tokens: Arc<dyn TokenStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            inner,
            tokens,
            navigator,
        }
    }

    fn expire_session(&self, path: &str) -> ApiError {
        tracing::warn!(%path, "Session expired; clearing credential");
        if let Err(err) = self.tokens.clear() {
            tracing::warn!("Failed to clear stored credential: {err:#}");
        }
        self.navigator.redirect_to_login();
        ApiError::session_expired()
    }
}

impl<T: Transport> Transport for SessionGuard<T> {
    fn send(&self, request: ApiRequest) -> TransportFuture<'_> {
        let path = request.path.clone();
        let pending = self.inner.send(request);
        Box::pin(async move {
            match pending.await {
                Err(err) if err.kind == (ApiErrorKind::Http { status: 401 }) => {
                    Err(self.expire_session(&path))
                }
                other => other,
            }
        })
    }
}

/// The full policy stack the gateway installs over a base transport.
pub type Layered<T> = SessionGuard<NormalizeStatus<BearerAuth<T>>>;

/// Wraps `base` with every gateway policy in the required order.
pub fn layer<T: Transport>(
    base: T,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
) -> Layered<T> {
    let authed = BearerAuth::new(base, Arc::clone(&tokens));
    SessionGuard::new(NormalizeStatus::new(authed), tokens, navigator)
}

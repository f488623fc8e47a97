//! Mock-Mate API gateway client.
//!
//! [`ApiGateway`] is the single point through which the Mock-Mate front end
//! talks to its REST backend. It attaches the stored bearer credential to
//! every request, normalizes failures into [`ApiError`], and handles session
//! expiry (401) globally by clearing the credential and asking the host's
//! [`Navigator`] to show the login screen.
//!
//! ```ignore
//! use std::sync::Arc;
//! use mockmate_client::{ApiGateway, ClientConfig, FileTokenStore, NoopNavigator};
//!
//! let gateway = ApiGateway::new(
//!     &ClientConfig::load()?,
//!     Arc::new(FileTokenStore::open_default()?),
//!     Arc::new(NoopNavigator),
//! )?;
//! let stats = gateway.auth().stats().await?;
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod gateway;
pub mod middleware;
pub mod navigation;
pub mod query;
pub mod token;
pub mod transport;
pub mod types;

pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use fetch::{Query, QuerySlot, Ticket};
pub use gateway::ApiGateway;
pub use navigation::{CountingNavigator, Navigator, NoopNavigator};
pub use query::{QueryParams, ToQuery};
pub use reqwest::Method;
pub use token::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use transport::{ApiRequest, ApiResponse, FilePart, ReqwestTransport, Transport};

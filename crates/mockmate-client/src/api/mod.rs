//! Call groups: thin, typed bindings of backend endpoints.
//!
//! Each group borrows the gateway, builds path, query and body from typed
//! parameters and delegates to it. Groups hold no state of their own.

mod admin;
mod auth;
mod behavioral;
mod coding;
mod interviews;
mod questions;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use behavioral::BehavioralApi;
pub use coding::CodingApi;
pub use interviews::InterviewsApi;
pub use questions::QuestionsApi;

//! CLI command handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use mockmate_client::{ApiGateway, ClientConfig, FileTokenStore};
use serde::Serialize;

pub mod admin;
pub mod auth;
pub mod behavioral;
pub mod coding;
pub mod config;
pub mod interviews;
pub mod questions;

/// Printed when the backend rejects the stored credential.
pub const SESSION_EXPIRED_HINT: &str = "session expired, run `mockmate login`";

/// Gateway over the configured backend and the on-disk credential.
pub fn gateway() -> Result<ApiGateway> {
    let config = ClientConfig::load().context("load config")?;
    let tokens = FileTokenStore::open_default().context("open credential store")?;
    let navigator = || eprintln!("{SESSION_EXPIRED_HINT}");
    let gateway = ApiGateway::new(&config, Arc::new(tokens), Arc::new(navigator))?;
    tracing::debug!(base_url = gateway.base_url(), "gateway ready");
    Ok(gateway)
}

/// Pretty-prints a backend record on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("render response")?;
    println!("{rendered}");
    Ok(())
}

//! Admin command handlers.

use anyhow::Result;
use mockmate_client::ApiGateway;
use mockmate_client::types::{Role, UserFilter};

use super::print_json;

pub async fn dashboard(gateway: &ApiGateway) -> Result<()> {
    let figures = gateway.admin().dashboard().await?;
    print_json(&figures)
}

pub async fn users(
    gateway: &ApiGateway,
    role: Option<Role>,
    search: Option<String>,
    page: Option<u32>,
    size: Option<u32>,
) -> Result<()> {
    let filter = UserFilter {
        role,
        search,
        page,
        size,
    };
    let users = gateway.admin().users(&filter).await?;
    print_json(&users)
}

pub async fn stats(gateway: &ApiGateway) -> Result<()> {
    let stats = gateway.admin().system_stats().await?;
    print_json(&stats)
}

pub async fn delete_user(gateway: &ApiGateway, id: i64) -> Result<()> {
    gateway.admin().delete_user(id).await?;
    println!("✓ Deleted user {id}");
    Ok(())
}

//! Session and account command handlers.

use anyhow::Result;
use mockmate_client::ApiGateway;
use mockmate_client::config::paths;
use mockmate_client::token::mask_token;
use mockmate_client::types::{AuthResponse, RegisterRequest, Role};

use super::print_json;

pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

pub async fn login(gateway: &ApiGateway, username: &str, password: &str) -> Result<()> {
    let auth = gateway.auth().login(username, password).await?;
    let name = auth.username.as_deref().unwrap_or(username);
    match auth.role {
        Some(role) => println!("✓ Logged in as {name} ({role})"),
        None => println!("✓ Logged in as {name}"),
    }
    print_saved(&auth);
    Ok(())
}

fn print_saved(auth: &AuthResponse) {
    println!("  Token: {}", mask_token(&auth.token));
    println!("  Credentials saved to: {}", paths::credentials_path().display());
}

pub async fn register(gateway: &ApiGateway, registration: Registration) -> Result<()> {
    let Registration {
        username,
        email,
        password,
        first_name,
        last_name,
        role,
    } = registration;
    let request = RegisterRequest {
        username,
        email,
        password,
        first_name,
        last_name,
        role,
        ..RegisterRequest::default()
    };
    let auth = gateway.auth().register(&request).await?;
    println!(
        "✓ Registered and logged in as {}",
        auth.username.as_deref().unwrap_or(&request.username)
    );
    print_saved(&auth);
    Ok(())
}

pub async fn logout(gateway: &ApiGateway) -> Result<()> {
    if !gateway.is_authenticated() {
        println!("Not logged in.");
        return Ok(());
    }
    match gateway.auth().logout().await {
        Ok(_) => println!("✓ Logged out"),
        Err(err) if err.is_session_expired() => println!("✓ Logged out"),
        Err(err) => {
            tracing::warn!(error = %err, "logout call failed");
            println!("✓ Logged out (the server did not confirm: {err})");
        }
    }
    Ok(())
}

pub async fn whoami(gateway: &ApiGateway) -> Result<()> {
    let profile = gateway.auth().profile().await?;
    print_json(&profile)
}

pub async fn stats(gateway: &ApiGateway) -> Result<()> {
    let stats = gateway.auth().stats().await?;
    print_json(&stats)
}

pub async fn leaderboard(gateway: &ApiGateway, limit: Option<u32>) -> Result<()> {
    let ranking = gateway.auth().leaderboard(limit).await?;
    print_json(&ranking)
}

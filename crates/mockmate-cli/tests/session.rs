//! End-to-end CLI runs against a mocked Mock-Mate backend.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Creates a temp MOCKMATE_HOME directory for test isolation.
fn temp_home() -> TempDir {
    TempDir::new().expect("create temp mockmate home")
}

fn write_token(home: &Path, token: &str) {
    fs::write(
        home.join("credentials.json"),
        json!({ "token": token }).to_string(),
    )
    .unwrap();
}

fn stored_token(home: &Path) -> Option<String> {
    let contents = fs::read_to_string(home.join("credentials.json")).ok()?;
    let parsed: Value = serde_json::from_str(&contents).ok()?;
    parsed["token"].as_str().map(str::to_string)
}

#[tokio::test]
async fn test_login_stores_credential() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "ada", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-cli",
            "type": "Bearer",
            "username": "ada",
            "role": "MENTOR"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("mockmate")
        .env("MOCKMATE_HOME", home.path())
        .env("MOCKMATE_API_URL", server.uri())
        .env("MOCKMATE_PASSWORD", "hunter2")
        .args(["login", "--username", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as ada (MENTOR)"));

    assert_eq!(stored_token(home.path()).as_deref(), Some("jwt-cli"));
}

#[tokio::test]
async fn test_login_output_masks_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;
    let token = "eyJhbGciOiJIUzI1NiJ9.payload.signature";

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": token,
            "username": "ada"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = home.path().join("credentials.json");
    cargo_bin_cmd!("mockmate")
        .env("MOCKMATE_HOME", home.path())
        .env("MOCKMATE_API_URL", server.uri())
        .env("MOCKMATE_PASSWORD", "hunter2")
        .args(["login", "--username", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Token: eyJhbGciOiJI..."))
        .stdout(predicate::str::contains(token).not())
        .stdout(predicate::str::contains(format!(
            "Credentials saved to: {}",
            credentials.display()
        )));

    assert_eq!(stored_token(home.path()).as_deref(), Some(token));
}

#[tokio::test]
async fn test_whoami_sends_stored_credential() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_token(home.path(), "jwt-stored");
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .and(header("authorization", "Bearer jwt-stored"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "username": "ada",
            "email": "ada@example.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("mockmate")
        .env("MOCKMATE_HOME", home.path())
        .env("MOCKMATE_API_URL", server.uri())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"username\": \"ada\""));
}

#[tokio::test]
async fn test_expired_session_prints_hint_and_clears_credential() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_token(home.path(), "jwt-expired");
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/stats"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("mockmate")
        .env("MOCKMATE_HOME", home.path())
        .env("MOCKMATE_API_URL", server.uri())
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("session expired, run `mockmate login`"));

    assert!(!home.path().join("credentials.json").exists());
}

#[tokio::test]
async fn test_server_error_exits_with_status_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_token(home.path(), "jwt-live");
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/dashboard"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&server)
        .await;

    cargo_bin_cmd!("mockmate")
        .env("MOCKMATE_HOME", home.path())
        .env("MOCKMATE_API_URL", server.uri())
        .args(["admin", "dashboard"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("HTTP 500: db down"));

    assert_eq!(stored_token(home.path()).as_deref(), Some("jwt-live"));
}

#[tokio::test]
async fn test_question_list_passes_filters() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/questions"))
        .and(query_param("category", "CODING"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 5, "title": "Two sum", "type": "CODING", "difficulty": "EASY"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("mockmate")
        .env("MOCKMATE_HOME", home.path())
        .env("MOCKMATE_API_URL", server.uri())
        .args(["questions", "list", "--category", "CODING", "--limit", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Two sum"));
}

#[tokio::test]
async fn test_logout_removes_credential() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    write_token(home.path(), "jwt-live");
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer jwt-live"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    cargo_bin_cmd!("mockmate")
        .env("MOCKMATE_HOME", home.path())
        .env("MOCKMATE_API_URL", server.uri())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    assert!(!home.path().join("credentials.json").exists());
}

//! Login, logout, refresh and upload against a mocked backend, using the
//! on-disk credential store.

use std::sync::Arc;

use bytes::Bytes;
use mockmate_client::types::RegisterRequest;
use mockmate_client::{
    ApiErrorKind, ApiGateway, ClientConfig, CountingNavigator, FileTokenStore, TokenStore,
};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn gateway_with_file_store(server: &MockServer, dir: &TempDir) -> (ApiGateway, Arc<FileTokenStore>) {
    let store = Arc::new(FileTokenStore::open(dir.path().join("credentials.json")).unwrap());
    let config = ClientConfig::new(&server.uri()).unwrap();
    let gateway = ApiGateway::new(
        &config,
        Arc::<FileTokenStore>::clone(&store),
        Arc::new(CountingNavigator::new()),
    )
    .unwrap();
    (gateway, store)
}

#[tokio::test]
async fn test_login_persists_token_for_next_process() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let (gateway, _) = gateway_with_file_store(&server, &dir);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "ada", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-fresh",
            "type": "Bearer",
            "username": "ada",
            "role": "STUDENT",
            "id": 7
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user/profile"))
        .and(header("authorization", "Bearer jwt-fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "username": "ada"})))
        .expect(1)
        .mount(&server)
        .await;

    let auth = gateway.auth().login("ada", "hunter2").await.unwrap();
    assert_eq!(auth.token, "jwt-fresh");
    assert!(gateway.is_authenticated());

    // A second store over the same file sees the credential.
    let reopened = FileTokenStore::open(dir.path().join("credentials.json")).unwrap();
    assert_eq!(reopened.get().as_deref(), Some("jwt-fresh"));

    let profile = gateway.auth().profile().await.unwrap();
    assert_eq!(profile.username, "ada");
}

#[tokio::test]
async fn test_failed_login_stores_nothing() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let (gateway, store) = gateway_with_file_store(&server, &dir);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = gateway.auth().login("ada", "wrong").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Http { status: 400 });
    assert_eq!(err.message, "HTTP 400: Invalid credentials");
    assert_eq!(store.get(), None);
    assert!(!dir.path().join("credentials.json").exists());
}

#[tokio::test]
async fn test_login_with_unwritable_store_is_storage_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("home-is-a-file");
    std::fs::write(&blocker, "plain file").unwrap();

    let store = Arc::new(FileTokenStore::open(blocker.join("credentials.json")).unwrap());
    let gateway = ApiGateway::new(
        &ClientConfig::new(&server.uri()).unwrap(),
        Arc::<FileTokenStore>::clone(&store),
        Arc::new(CountingNavigator::new()),
    )
    .unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-lost"})))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway.auth().login("ada", "hunter2").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Storage);
    assert!(err.details.is_some());
    assert!(!gateway.is_authenticated());
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn test_register_stores_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let (gateway, store) = gateway_with_file_store(&server, &dir);

    Mock::given(method("POST"))
        .and(path("/auth/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-new"})))
        .expect(1)
        .mount(&server)
        .await;

    let request = RegisterRequest {
        username: "grace".to_string(),
        email: "grace@example.com".to_string(),
        password: "secret".to_string(),
        ..RegisterRequest::default()
    };
    let auth = gateway.auth().register(&request).await.unwrap();
    assert_eq!(auth.token_type, "Bearer");
    assert_eq!(store.get().as_deref(), Some("jwt-new"));
}

#[tokio::test]
async fn test_logout_clears_token_even_when_backend_fails() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let (gateway, store) = gateway_with_file_store(&server, &dir);
    store.set("jwt-old").unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer jwt-old"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = gateway.auth().logout().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(store.get(), None);
    assert!(!dir.path().join("credentials.json").exists());
}

#[tokio::test]
async fn test_refresh_replaces_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let (gateway, store) = gateway_with_file_store(&server, &dir);
    store.set("jwt-old").unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(header("authorization", "Bearer jwt-old"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-rotated"})))
        .expect(1)
        .mount(&server)
        .await;

    let token = gateway.auth().refresh().await.unwrap();
    assert_eq!(token, "jwt-rotated");
    assert_eq!(store.get().as_deref(), Some("jwt-rotated"));
}

#[tokio::test]
async fn test_profile_image_upload_is_multipart() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let (gateway, store) = gateway_with_file_store(&server, &dir);
    store.set("jwt").unwrap();

    Mock::given(method("POST"))
        .and(path("/user/profile/upload-image"))
        .and(header("authorization", "Bearer jwt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"profileImageUrl": "/uploads/avatar.png"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reply = gateway
        .auth()
        .upload_profile_image(
            "avatar.png",
            Some("image/png"),
            Bytes::from_static(b"\x89PNG-bytes"),
        )
        .await
        .unwrap();
    assert_eq!(reply["profileImageUrl"], "/uploads/avatar.png");

    let received = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&received[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"avatar.png\""));
    assert!(body.contains("PNG-bytes"));
}

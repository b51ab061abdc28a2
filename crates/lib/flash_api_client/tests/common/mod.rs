//! Shared helpers for the client integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use base64::Engine;
use flash_api_client::{ClientConfig, FlashClient};
use flash_core::auth::NoopCredentialStorage;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Sign an access token the way the notes service does (HS256, `sub` = username).
pub fn token_for(username: &str) -> String {
    encode(
        &Header::default(),
        &json!({ "sub": username, "exp": 4_102_444_800_i64 }),
        &EncodingKey::from_secret(b"integration-secret"),
    )
    .expect("encode token")
}

/// Three segments, but the payload is not JSON.
pub fn non_json_token() -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!(
        "{}.{}.signature",
        engine.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        engine.encode(b"definitely not json")
    )
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn note_json(id: i64, title: &str, content: &str, summary: Option<&str>) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": content,
        "summary": summary,
        "created_at": "2025-06-01T12:00:00.000001"
    })
}

/// Start a mock service and bootstrap a client session against it.
pub async fn setup() -> (MockServer, FlashClient) {
    let server = MockServer::start().await;
    let client = FlashClient::bootstrap(
        &ClientConfig::new(server.uri()),
        Arc::new(NoopCredentialStorage),
    )
    .expect("bootstrap client");
    (server, client)
}

/// `Authorization` header values of every request the server has seen, in order.
pub async fn authorization_headers(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|r| {
            r.headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .collect()
}

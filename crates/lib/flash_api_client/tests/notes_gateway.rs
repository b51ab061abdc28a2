//! Notes CRUD calls against a mock notes service.

mod common;

use std::sync::Arc;

use common::{bearer, note_json, setup, token_for};
use flash_api_client::{ApiError, ClientConfig, FlashClient};
use flash_core::auth::NoopCredentialStorage;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn create_posts_title_and_content_and_returns_summary() {
    let (server, flash) = setup().await;
    let token = token_for("alice");
    let auth = bearer(&token);
    Mock::given(method("POST"))
        .and(path("/notes"))
        .and(header("authorization", auth.as_str()))
        .and(body_json(json!({ "title": "Standup", "content": "Ship the release" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json(
            11,
            "Standup",
            "Ship the release",
            Some("Release shipping today."),
        )))
        .expect(1)
        .mount(&server)
        .await;
    flash.store.login(token);

    let note = flash
        .notes
        .create("Standup", "Ship the release")
        .await
        .expect("create");

    assert_eq!(note.id, 11);
    assert_eq!(note.summary.as_deref(), Some("Release shipping today."));
}

#[tokio::test]
async fn list_preserves_service_order() {
    let (server, flash) = setup().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            note_json(3, "newest", "c", None),
            note_json(1, "oldest", "a", Some("s")),
            note_json(2, "middle", "b", None),
        ])))
        .mount(&server)
        .await;

    let notes = flash.notes.list().await.expect("list");

    let ids = notes.iter().map(|n| n.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[tokio::test]
async fn get_returns_a_single_note() {
    let (server, flash) = setup().await;
    Mock::given(method("GET"))
        .and(path("/notes/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json(5, "five", "v", None)))
        .mount(&server)
        .await;

    let note = flash.notes.get(5).await.expect("get");

    assert_eq!(note.title, "five");
}

#[tokio::test]
async fn missing_note_reports_service_detail() {
    let (server, flash) = setup().await;
    Mock::given(method("GET"))
        .and(path("/notes/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Note not found" })))
        .mount(&server)
        .await;

    let err = flash.notes.get(404).await.expect_err("missing");

    match err {
        ApiError::Status { status, detail } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(detail, "Note not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn delete_targets_the_note_path() {
    let (server, flash) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/notes/3"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Note deleted successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    flash.notes.delete(3).await.expect("delete");
}

#[tokio::test]
async fn unexpected_body_is_a_decode_error() {
    let (server, flash) = setup().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "not": "a list" })))
        .mount(&server)
        .await;

    let err = flash.notes.list().await.expect_err("bad body");

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() {
    let flash = FlashClient::bootstrap(
        &ClientConfig::new("http://127.0.0.1:1"),
        Arc::new(NoopCredentialStorage),
    )
    .expect("bootstrap");

    let err = flash.notes.list().await.expect_err("nothing listens on port 1");

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(err.status().is_none());
}

//! Local note cache semantics: prepend on create, filter on delete.

mod common;

use common::{note_json, setup, token_for};
use flash_api_client::ApiError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_list(server: &MockServer, notes: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(notes))
        .mount(server)
        .await;
}

#[tokio::test]
async fn create_prepends_to_an_empty_cache() {
    let (server, flash) = setup().await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json(1, "T", "C", None)))
        .mount(&server)
        .await;
    flash.store.login(token_for("alice"));
    let notebook = flash.notebook();
    assert!(notebook.is_empty());

    notebook.create("T", "C").await.expect("create");

    let notes = notebook.notes();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "T");
    assert_eq!(notes[0].content, "C");
    // Only the create went out; the cache was not refetched.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_prepends_ahead_of_refreshed_notes() {
    let (server, flash) = setup().await;
    mount_list(
        &server,
        json!([note_json(2, "two", "b", None), note_json(1, "one", "a", None)]),
    )
    .await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json(3, "three", "c", None)))
        .mount(&server)
        .await;
    let notebook = flash.notebook();

    assert_eq!(notebook.refresh().await.expect("refresh"), 2);
    notebook.create("three", "c").await.expect("create");

    let ids = notebook.notes().iter().map(|n| n.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[tokio::test]
async fn blank_fields_are_rejected_before_any_request() {
    let (server, flash) = setup().await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json(1, "T", "C", None)))
        .expect(0)
        .mount(&server)
        .await;
    let notebook = flash.notebook();

    let err = notebook.create("   ", "C").await.expect_err("blank title");
    assert!(matches!(&err, ApiError::Validation(m) if m == "Title and content are required"));
    assert!(notebook.create("T", "").await.is_err());

    assert!(notebook.is_empty());
}

#[tokio::test]
async fn failed_create_leaves_cache_unchanged() {
    let (server, flash) = setup().await;
    mount_list(&server, json!([note_json(1, "one", "a", None)])).await;
    Mock::given(method("POST"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let notebook = flash.notebook();
    notebook.refresh().await.expect("refresh");

    let err = notebook.create("T", "C").await.expect_err("server error");

    assert!(matches!(err, ApiError::Status { .. }));
    let ids = notebook.notes().iter().map(|n| n.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn delete_removes_exactly_that_note() {
    let (server, flash) = setup().await;
    mount_list(
        &server,
        json!([
            note_json(3, "c", "c", None),
            note_json(2, "b", "b", None),
            note_json(1, "a", "a", None),
        ]),
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path("/notes/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;
    let notebook = flash.notebook();
    notebook.refresh().await.expect("refresh");

    notebook.delete(2).await.expect("delete");

    let ids = notebook.notes().iter().map(|n| n.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 1]);
    assert!(notebook.find(2).is_none());
}

#[tokio::test]
async fn failed_delete_keeps_the_note() {
    let (server, flash) = setup().await;
    mount_list(&server, json!([note_json(1, "a", "a", None)])).await;
    Mock::given(method("DELETE"))
        .and(path("/notes/1"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Note not found" })))
        .mount(&server)
        .await;
    let notebook = flash.notebook();
    notebook.refresh().await.expect("refresh");

    assert!(notebook.delete(1).await.is_err());
    assert!(notebook.find(1).is_some());
}

#[tokio::test]
async fn failed_refresh_keeps_previous_cache() {
    let (server, flash) = setup().await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([note_json(1, "a", "a", None)])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/notes"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let notebook = flash.notebook();
    notebook.refresh().await.expect("first refresh");

    assert!(notebook.refresh().await.is_err());
    assert_eq!(notebook.len(), 1);
}

#[tokio::test]
async fn search_and_summary_count_use_the_cache() {
    let (server, flash) = setup().await;
    mount_list(
        &server,
        json!([
            note_json(1, "Groceries", "oat milk, bread", Some("Shopping list.")),
            note_json(2, "Ideas", "A faster GROCERY app", None),
            note_json(3, "Travel", "Pack light", Some("")),
        ]),
    )
    .await;
    let notebook = flash.notebook();
    notebook.refresh().await.expect("refresh");

    let hits = notebook.search("grocer").iter().map(|n| n.id).collect::<Vec<_>>();
    assert_eq!(hits, vec![1, 2]);
    assert!(notebook.search("nothing").is_empty());
    assert_eq!(notebook.summarized_count(), 1);

    notebook.clear();
    assert!(notebook.is_empty());
}

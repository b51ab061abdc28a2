// @zen-component: NOTES-Gateway
//
//! Notes CRUD over the request client.

use flash_core::models::notes::{NewNote, Note};

use crate::client::RequestClient;
use crate::error::ApiResult;

/// Stateless CRUD operations against `/notes`.
///
/// Every call goes straight to the service; failures are returned as-is
/// and never retried.
#[derive(Debug, Clone)]
pub struct NotesGateway {
    client: RequestClient,
}

impl NotesGateway {
    pub fn new(client: RequestClient) -> Self {
        Self { client }
    }

    /// `POST /notes`: returns the stored note, including any summary.
    pub async fn create(&self, title: &str, content: &str) -> ApiResult<Note> {
        self.client
            .post_json("/notes", &NewNote::new(title, content))
            .await
    }

    /// `GET /notes`: the full set, in service order.
    pub async fn list(&self) -> ApiResult<Vec<Note>> {
        self.client.get_json("/notes").await
    }

    /// `GET /notes/{id}`.
    pub async fn get(&self, id: i64) -> ApiResult<Note> {
        self.client.get_json(&format!("/notes/{id}")).await
    }

    /// `DELETE /notes/{id}`.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client.delete(&format!("/notes/{id}")).await
    }
}

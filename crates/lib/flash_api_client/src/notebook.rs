// @zen-component: NOTES-Notebook
//
//! Local note cache reconciled against the notes gateway.
//!
//! The cache is a hint, not a source of truth: it is replaced wholesale by
//! [`Notebook::refresh`] and mutated locally on create (prepend) and delete
//! (filter out). Failed calls leave it untouched.

use flash_core::models::notes::{NewNote, Note};
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::notes::NotesGateway;

/// Ordered, non-authoritative cache of the user's notes.
#[derive(Debug)]
pub struct Notebook {
    gateway: NotesGateway,
    notes: RwLock<Vec<Note>>,
}

impl Notebook {
    pub fn new(gateway: NotesGateway) -> Self {
        Self {
            gateway,
            notes: RwLock::new(Vec::new()),
        }
    }

    /// Replace the cache with the service's full list.
    pub async fn refresh(&self) -> ApiResult<usize> {
        let fetched = self.gateway.list().await?;
        let count = fetched.len();
        *self.notes.write() = fetched;
        debug!(count, "notebook refreshed");
        Ok(count)
    }

    /// Create a note and prepend it to the cache.
    ///
    /// Blank titles or contents are rejected before any request is sent.
    pub async fn create(&self, title: &str, content: &str) -> ApiResult<Note> {
        if !NewNote::new(title, content).is_complete() {
            return Err(ApiError::Validation(
                "Title and content are required".into(),
            ));
        }
        let note = self.gateway.create(title, content).await?;
        self.notes.write().insert(0, note.clone());
        debug!(id = note.id, "note created");
        Ok(note)
    }

    /// Delete a note and drop exactly that id from the cache.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.gateway.delete(id).await?;
        self.notes.write().retain(|n| n.id != id);
        debug!(id, "note deleted");
        Ok(())
    }

    /// Fetch a single note from the service, bypassing the cache.
    pub async fn fetch(&self, id: i64) -> ApiResult<Note> {
        self.gateway.get(id).await
    }

    /// Cached notes, in cache order.
    pub fn notes(&self) -> Vec<Note> {
        self.notes.read().clone()
    }

    pub fn find(&self, id: i64) -> Option<Note> {
        self.notes.read().iter().find(|n| n.id == id).cloned()
    }

    /// Cached notes whose title or content contains `term` (case-insensitive).
    pub fn search(&self, term: &str) -> Vec<Note> {
        self.notes
            .read()
            .iter()
            .filter(|n| n.matches(term))
            .cloned()
            .collect()
    }

    /// Number of cached notes carrying an AI summary.
    pub fn summarized_count(&self) -> usize {
        self.notes.read().iter().filter(|n| n.has_summary()).count()
    }

    pub fn len(&self) -> usize {
        self.notes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.read().is_empty()
    }

    /// Drop every cached note, e.g. after the session ends.
    pub fn clear(&self) {
        self.notes.write().clear();
    }
}

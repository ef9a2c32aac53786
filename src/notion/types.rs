//! Notion types — page request body, client trait, and errors.

use serde_json::{Value, json};

use crate::session::SessionRecord;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by Notion client operations.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Unreachable(String),

    /// Notion answered with a non-success status. `code` and `message` are
    /// copied from the response body, `null` when absent.
    #[error("Notion API rejected request: status {status}")]
    Rejected { status: u16, code: Value, message: Value },

    /// A success response whose body could not be read as a page.
    #[error("invalid page response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// PAGE
// =============================================================================

/// The page Notion created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPage {
    pub id: String,
}

/// Build the pages-creation body for a session record.
///
/// Property names match the Pomodoro database: `Name` (title), `Date`,
/// `Duration (min)` (number), `Type` (select), `Completed At` (rich text).
#[must_use]
pub fn page_request(database_id: &str, record: &SessionRecord) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Name": {
                "title": [{ "text": { "content": record.title } }]
            },
            "Date": {
                "date": { "start": record.date }
            },
            "Duration (min)": {
                "number": record.duration
            },
            "Type": {
                "select": { "name": record.category }
            },
            "Completed At": {
                "rich_text": [{ "text": { "content": record.completed_at } }]
            }
        }
    })
}

// =============================================================================
// CLIENT TRAIT
// =============================================================================

/// Creates pages in Notion. Enables mocking in tests.
#[async_trait::async_trait]
pub trait NotionPages: Send + Sync {
    /// Create one page. Never retried.
    ///
    /// # Errors
    ///
    /// Returns a [`NotionError`] if Notion cannot be reached, rejects the
    /// request, or answers with an unreadable body.
    async fn create_page(&self, token: &str, page: &Value) -> Result<CreatedPage, NotionError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

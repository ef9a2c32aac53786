//! Session relay routes.
//!
//! One POST becomes one Notion page. The body is parsed before the secrets
//! are checked, so a malformed body is reported as such even on an
//! unconfigured relay.

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{Value, json};
use time::OffsetDateTime;
use tracing::{error, info, warn};

use crate::error::RelayError;
use crate::notion::{NotionError, page_request};
use crate::session::{IncomingPayload, SessionRecord};
use crate::state::AppState;

/// `OPTIONS /` — CORS preflight. Never reads the body.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Any method on `/` other than POST or OPTIONS.
pub async fn post_only() -> RelayError {
    RelayError::MethodNotAllowed
}

/// `POST /` — map a session payload to a Notion page and create it.
///
/// Bodies are not size-limited; a body that cannot be read counts as invalid JSON.
pub async fn relay(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, RelayError> {
    let body = body.map_err(|e| {
        warn!(error = %e, "relay request body unreadable");
        RelayError::InvalidJson
    })?;
    let body: Value = serde_json::from_slice(&body).map_err(|_| RelayError::InvalidJson)?;

    let Some(credentials) = state.config.credentials.as_ref() else {
        warn!("relay request rejected: NOTION_TOKEN or NOTION_DB_ID not set");
        return Err(RelayError::NotConfigured);
    };

    let payload = IncomingPayload::from_json(body);
    let record = SessionRecord::from_payload(&payload, OffsetDateTime::now_utc().date());
    let page = page_request(&credentials.database_id, &record);

    match state.notion.create_page(&credentials.token, &page).await {
        Ok(created) => {
            info!(page_id = %created.id, title = %record.title, "session page created");
            Ok(Json(json!({ "ok": true, "page_id": created.id })))
        }
        Err(e) => {
            match &e {
                NotionError::Rejected { status, code, .. } => {
                    warn!(%status, %code, "Notion rejected session page");
                }
                other => error!(error = %other, "Notion request failed"),
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;

//! Notion pages API client.
//!
//! Thin HTTP wrapper for `POST /v1/pages`. Pure parsing in `parse_response`
//! for testability.

use std::time::Duration;

use serde_json::Value;

use super::types::{CreatedPage, NotionError, NotionPages};
use crate::config::ConfigError;

pub const NOTION_VERSION: &str = "2022-06-28";

// =============================================================================
// CLIENT
// =============================================================================

pub struct NotionClient {
    http: reqwest::Client,
    pages_url: String,
}

impl NotionClient {
    /// Build a client posting to `pages_url`. Only connection setup is
    /// bounded; the request itself runs as long as the caller keeps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(pages_url: String, connect_timeout: Duration) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, pages_url })
    }
}

#[async_trait::async_trait]
impl NotionPages for NotionClient {
    async fn create_page(&self, token: &str, page: &Value) -> Result<CreatedPage, NotionError> {
        let response = self
            .http
            .post(&self.pages_url)
            .bearer_auth(token)
            .header("Notion-Version", NOTION_VERSION)
            .json(page)
            .send()
            .await
            .map_err(|e| NotionError::Unreachable(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| NotionError::Unreachable(e.to_string()))?;

        parse_response(status, &text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(serde::Deserialize)]
struct PageResponse {
    id: String,
}

fn parse_response(status: u16, body: &str) -> Result<CreatedPage, NotionError> {
    if !(200..300).contains(&status) {
        let error: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        return Err(NotionError::Rejected {
            status,
            code: error.get("code").cloned().unwrap_or(Value::Null),
            message: error.get("message").cloned().unwrap_or(Value::Null),
        });
    }

    let page: PageResponse = serde_json::from_str(body).map_err(|e| NotionError::InvalidResponse(e.to_string()))?;
    Ok(CreatedPage { id: page.id })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

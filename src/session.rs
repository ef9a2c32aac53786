//! Session payload → Notion record mapping.
//!
//! DESIGN
//! ======
//! Pure functions only. The handler passes today's UTC date in, so every
//! default is deterministic under test. A field counts as absent when it is
//! missing, `null`, `false`, empty text or numeric zero; widgets send sparse
//! payloads and rely on those defaults.

use serde::Deserialize;
use serde_json::{Number, Value};
use time::Date;
use time::macros::format_description;

pub const DEFAULT_LABEL: &str = "Pomodoro";
pub const DEFAULT_CATEGORY: &str = "Work";
pub const DEFAULT_DURATION_MINUTES: u32 = 25;
const TITLE_SEPARATOR: &str = " — ";

// =============================================================================
// INCOMING
// =============================================================================

/// Session-completion payload as posted by the widget. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingPayload {
    pub label: Option<Value>,
    pub session: Option<Value>,
    pub date: Option<Value>,
    pub duration: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<Value>,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<Value>,
}

impl IncomingPayload {
    /// Interpret an already-parsed JSON body. Non-object bodies carry no fields.
    #[must_use]
    pub fn from_json(body: Value) -> Self {
        if body.is_object() {
            serde_json::from_value(body).unwrap_or_default()
        } else {
            Self::default()
        }
    }
}

// =============================================================================
// OUTGOING
// =============================================================================

/// Fixed-shape record written to the Notion database.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub title: String,
    /// `YYYY-MM-DD`, or whatever date text the caller supplied.
    pub date: String,
    pub duration: Number,
    pub category: String,
    pub completed_at: String,
}

impl SessionRecord {
    /// Apply defaults and build the record. `today` is the current UTC date.
    #[must_use]
    pub fn from_payload(payload: &IncomingPayload, today: Date) -> Self {
        let label = present_text(payload.label.as_ref()).unwrap_or_else(|| DEFAULT_LABEL.to_string());
        let session = present_text(payload.session.as_ref()).map(|s| format!("#{s}"));
        let title = build_title(&label, session.as_deref());

        let date = present_text(payload.date.as_ref()).unwrap_or_else(|| iso_date(today));

        let duration = match &payload.duration {
            Some(Value::Number(n)) => n.clone(),
            _ => Number::from(DEFAULT_DURATION_MINUTES),
        };

        let category = present_text(payload.kind.as_ref()).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let completed_at = present_text(payload.completed_at.as_ref()).unwrap_or_default();

        Self { title, date, duration, category, completed_at }
    }
}

/// Join label and session marker, dropping empty parts.
fn build_title(label: &str, session: Option<&str>) -> String {
    [Some(label), session]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(TITLE_SEPARATOR)
}

/// Render a present scalar as text; absent-like values yield `None`.
fn present_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(number_text(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Integral floats print without a fractional part (`3.0` → `3`).
#[allow(clippy::cast_possible_truncation)]
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

/// Format a calendar date as `YYYY-MM-DD`.
#[must_use]
pub fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]")).unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

//! Notion — destination API adapter.
//!
//! DESIGN
//! ======
//! Handlers only see the `NotionPages` trait, so tests swap in a mock to
//! simulate network failures and rejections. `NotionClient` is the reqwest
//! implementation used in production.

pub mod client;
pub mod types;

pub use client::NotionClient;
pub use types::{NotionError, NotionPages, page_request};

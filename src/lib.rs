//! abclient Core Library
//!
//! Client-side core for an audiobook acquisition server: a normalized HTTP
//! API client, a download lifecycle store with a self-terminating polling
//! loop, and search presentation logic (series grouping, batch selection).
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`api`] - HTTP client with normalized error taxonomy
//! - [`model`] - Wire and domain types
//! - [`store`] - Download lifecycle store and notification fan-out
//! - [`search`] - Series grouping and batch selection

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod model;
pub mod search;
pub mod store;

#[cfg(test)]
pub mod test_support;

// Re-export commonly used types
pub use api::{ApiClient, ApiError, ApiResult, ClientConfig, DEFAULT_BASE_URL};
pub use model::{
    BatchCreateDownloadResponse, CreateDownloadRequest, Download, DownloadStatus, SearchResult,
};
pub use search::{SelectionSet, SeriesGroup, group_by_series};
pub use store::{DOWNLOAD_POLL_INTERVAL, DownloadStore, Notification, NotificationKind, Notifier};

//! Typed client for the backend REST API.
//!
//! One [`ApiClient`] instance serves every endpoint group; all failures are
//! normalized into [`ApiError`] at this boundary. Callers never handle raw
//! transport errors.
//!
//! # Example
//!
//! ```no_run
//! use abclient::api::{ApiClient, ClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new(ClientConfig::new("http://localhost:8080")?);
//! let downloads = client.list_downloads().await?;
//! println!("{} downloads tracked", downloads.len());
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod downloads;
mod error;
mod providers;
mod qbittorrent;
mod search;

pub use client::{
    ApiClient, ClientConfig, CONNECT_TIMEOUT_SECS, DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS,
};
pub use config::{PreviewPathRequest, PreviewPathResponse};
pub use error::{ApiError, ApiResult, RemoteError};

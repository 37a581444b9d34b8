//! Download records and status definitions.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Lifecycle status of a download, as reported by the server.
///
/// The happy path is `queued → downloading → completed → organizing →
/// organized`; `failed` is reachable from any non-terminal state. The client
/// never computes transitions itself — it only reflects the latest snapshot
/// fetched from the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    /// Accepted by the server, waiting for the torrent client.
    Queued,
    /// Transfer in progress; `progress` is meaningful.
    Downloading,
    /// Transfer finished, not yet organized.
    Completed,
    /// Server-side organization in progress.
    Organizing,
    /// Organized into the library; terminal.
    Organized,
    /// Failed; terminal. `error_message` carries the reason.
    Failed,
}

impl DownloadStatus {
    /// Returns the wire string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Downloading => "downloading",
            Self::Completed => "completed",
            Self::Organizing => "organizing",
            Self::Organized => "organized",
            Self::Failed => "failed",
        }
    }

    /// True for statuses that keep the polling loop alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Queued | Self::Downloading | Self::Organizing)
    }

    /// True for statuses with no further transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Organized | Self::Failed)
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DownloadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(Self::Queued),
            "downloading" => Ok(Self::Downloading),
            "completed" => Ok(Self::Completed),
            "organizing" => Ok(Self::Organizing),
            "organized" => Ok(Self::Organized),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("invalid download status: {s}")),
        }
    }
}

/// One server-tracked acquisition job.
///
/// Records are created by a create/batch-create call and mutated only by
/// re-fetch; there is no local progress simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Download {
    /// Opaque unique identifier assigned by the server at creation time.
    pub id: String,
    /// Display title, immutable after creation.
    pub title: String,
    /// Display author, immutable after creation.
    pub author: String,
    /// Series name, when the book belongs to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    /// Ordinal within the series.
    #[serde(
        rename = "seriesNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub series_number: Option<String>,
    /// Current lifecycle status.
    pub status: DownloadStatus,
    /// Percentage in 0–100; meaningful only while downloading.
    ///
    /// The wire value is a float; it is clamped into range on decode so a
    /// misbehaving server cannot produce an out-of-range record.
    #[serde(deserialize_with = "clamped_progress")]
    pub progress: u8,
    /// Final library path; populated only once organized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organized_path: Option<String>,
    /// Failure reason; populated only when failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// RFC 3339 creation timestamp, set once by the server.
    pub created_at: String,
    /// RFC 3339 completion timestamp, set once and never cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    /// RFC 3339 organization timestamp, set once and never cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organized_at: Option<String>,
}

fn clamped_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.is_nan() {
        return Ok(0);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(raw.clamp(0.0, 100.0).round() as u8)
}

impl fmt::Display for Download {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Download {{ id: {}, title: {}, status: {} }}",
            self.id, self.title, self.status
        )
    }
}

/// Request body for creating one download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDownloadRequest {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(
        rename = "seriesNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub series_number: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torrent_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnet_link: Option<String>,
}

/// Request body for `POST /api/downloads/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreateDownloadRequest {
    pub downloads: Vec<CreateDownloadRequest>,
}

/// One failed item of a batch request, indexed by position in the original
/// request list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchDownloadError {
    pub index: usize,
    pub request: CreateDownloadRequest,
    pub error: String,
}

/// Partitioned batch response. Partial failure is data, not an error path:
/// `successful.len() + failed.len()` always equals the request size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCreateDownloadResponse {
    #[serde(default)]
    pub successful: Vec<Download>,
    #[serde(default)]
    pub failed: Vec<BatchDownloadError>,
}

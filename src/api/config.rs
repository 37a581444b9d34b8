//! Typed wrappers for the `/api/config` endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::client::ApiClient;
use super::error::ApiResult;

#[derive(Debug, Deserialize)]
struct ConfigValueEnvelope {
    value: String,
}

/// Request body for `POST /api/config/preview-path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewPathRequest {
    pub template: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_number: Option<String>,
    pub title: String,
}

/// Result of rendering a path template against sample metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewPathResponse {
    pub valid: bool,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub error: String,
}

impl ApiClient {
    /// `GET /api/config` — all configuration keys as a flat string map.
    pub async fn get_config(&self) -> ApiResult<HashMap<String, String>> {
        self.get("/api/config", &[]).await
    }

    /// `GET /api/config/{key}` — one value.
    pub async fn get_config_value(&self, key: &str) -> ApiResult<String> {
        let response: ConfigValueEnvelope = self.get(&format!("/api/config/{key}"), &[]).await?;
        Ok(response.value)
    }

    /// `PUT /api/config/{key}` — set one value.
    pub async fn set_config_value(&self, key: &str, value: &str) -> ApiResult<()> {
        self.put_empty(
            &format!("/api/config/{key}"),
            &serde_json::json!({ "value": value }),
        )
        .await
    }

    /// `POST /api/config/preview-path` — dry-run a path template.
    pub async fn preview_path(&self, request: &PreviewPathRequest) -> ApiResult<PreviewPathResponse> {
        self.post("/api/config/preview-path", request).await
    }
}

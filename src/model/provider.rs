//! Search provider configuration DTOs (thin passthrough to the server).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One field of a provider's configuration schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfigField {
    pub name: String,
    pub display_name: String,
    /// Field kind: `string`, `url`, `secret`, `number`, …
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// A provider implementation the server knows how to talk to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderType {
    /// Machine name, e.g. `myanonamouse`.
    #[serde(rename = "type")]
    pub provider_type: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requires_auth: bool,
    #[serde(default)]
    pub config_schema: Vec<ProviderConfigField>,
}

/// A configured provider instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub provider_type: String,
    pub display_name: String,
    pub enabled: bool,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Request body for creating a provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProviderRequest {
    pub provider_type: String,
    pub display_name: String,
    pub enabled: bool,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
}

/// Request body for updating a provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProviderRequest {
    pub display_name: String,
    pub enabled: bool,
    #[serde(default)]
    pub config: HashMap<String, serde_json::Value>,
}

/// Result of a provider or qBittorrent connectivity probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConnectionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

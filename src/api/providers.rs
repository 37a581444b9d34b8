//! Typed wrappers for the search-provider configuration endpoints.
//!
//! Thin passthrough: the server owns all provider state. The list and types
//! endpoints have shipped both bare arrays and named envelopes, so both
//! shapes are accepted.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::model::{
    CreateProviderRequest, ProviderConfig, ProviderType, TestConnectionResponse,
    UpdateProviderRequest,
};

use super::client::ApiClient;
use super::error::ApiResult;

/// A response that is either a bare array or an array behind a named field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MaybeEnveloped<T> {
    Bare(Vec<T>),
    ProviderTypes {
        provider_types: Vec<T>,
    },
    #[serde(rename_all = "camelCase")]
    ProviderTypesCamel {
        provider_types: Vec<T>,
    },
    Providers {
        providers: Vec<T>,
    },
}

impl<T> MaybeEnveloped<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items)
            | Self::ProviderTypes {
                provider_types: items,
            }
            | Self::ProviderTypesCamel {
                provider_types: items,
            }
            | Self::Providers { providers: items } => items,
        }
    }
}

impl ApiClient {
    /// `GET /api/search/providers/types` — provider implementations the
    /// server supports, with their config schemas.
    pub async fn provider_types(&self) -> ApiResult<Vec<ProviderType>> {
        self.get_unwrapped("/api/search/providers/types").await
    }

    /// `GET /api/search/providers/config` — all configured providers.
    pub async fn list_providers(&self) -> ApiResult<Vec<ProviderConfig>> {
        self.get_unwrapped("/api/search/providers/config").await
    }

    /// `GET /api/search/providers/config/{type}` — one configured provider.
    pub async fn get_provider(&self, provider_type: &str) -> ApiResult<ProviderConfig> {
        self.get(&format!("/api/search/providers/config/{provider_type}"), &[])
            .await
    }

    /// `POST /api/search/providers/config` — configure a new provider.
    pub async fn create_provider(
        &self,
        request: &CreateProviderRequest,
    ) -> ApiResult<ProviderConfig> {
        self.post("/api/search/providers/config", request).await
    }

    /// `PUT /api/search/providers/config/{type}` — update a provider.
    pub async fn update_provider(
        &self,
        provider_type: &str,
        request: &UpdateProviderRequest,
    ) -> ApiResult<ProviderConfig> {
        self.put(
            &format!("/api/search/providers/config/{provider_type}"),
            request,
        )
        .await
    }

    /// `DELETE /api/search/providers/config/{type}` — remove a provider.
    pub async fn delete_provider(&self, provider_type: &str) -> ApiResult<()> {
        self.delete_empty(&format!("/api/search/providers/config/{provider_type}"))
            .await
    }

    /// `PATCH /api/search/providers/config/{type}/toggle` — enable/disable.
    pub async fn toggle_provider(&self, provider_type: &str, enabled: bool) -> ApiResult<()> {
        self.patch_empty(
            &format!("/api/search/providers/config/{provider_type}/toggle"),
            &serde_json::json!({ "enabled": enabled }),
        )
        .await
    }

    /// `POST /api/search/providers/config/{type}/test` — connectivity probe.
    pub async fn test_provider(&self, provider_type: &str) -> ApiResult<TestConnectionResponse> {
        self.post(
            &format!("/api/search/providers/config/{provider_type}/test"),
            &serde_json::json!({}),
        )
        .await
    }

    async fn get_unwrapped<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let response: MaybeEnveloped<T> = self.get(path, &[]).await?;
        Ok(response.into_vec())
    }
}

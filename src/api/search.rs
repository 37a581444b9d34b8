//! Typed wrapper for the `/api/search` endpoint.

use serde::Deserialize;

use crate::model::SearchResult;

use super::client::ApiClient;
use super::error::ApiResult;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

impl ApiClient {
    /// `GET /api/search?q=&provider=` — run a provider search.
    ///
    /// `provider` narrows the search to one configured provider; omitted, the
    /// server queries all enabled providers.
    pub async fn search(
        &self,
        query: &str,
        provider: Option<&str>,
    ) -> ApiResult<Vec<SearchResult>> {
        let response: SearchResponse = self
            .get("/api/search", &[("q", Some(query)), ("provider", provider)])
            .await?;
        Ok(response.results)
    }
}

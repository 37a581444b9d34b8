//! Typed wrappers for the `/api/downloads` endpoints.
//!
//! List and single-record endpoints wrap their payloads in named-field
//! envelopes (`{"downloads": [...]}`, `{"download": {...}}`); these wrappers
//! unwrap them so callers only see domain types.

use serde::Deserialize;

use crate::model::{
    BatchCreateDownloadRequest, BatchCreateDownloadResponse, CreateDownloadRequest, Download,
};

use super::client::ApiClient;
use super::error::ApiResult;

#[derive(Debug, Deserialize)]
struct ListDownloadsResponse {
    downloads: Vec<Download>,
}

#[derive(Debug, Deserialize)]
struct DownloadEnvelope {
    download: Download,
}

impl ApiClient {
    /// `GET /api/downloads` — the server's current full list.
    pub async fn list_downloads(&self) -> ApiResult<Vec<Download>> {
        let response: ListDownloadsResponse = self.get("/api/downloads", &[]).await?;
        Ok(response.downloads)
    }

    /// `GET /api/downloads/{id}` — one record.
    pub async fn get_download(&self, id: &str) -> ApiResult<Download> {
        let response: DownloadEnvelope = self.get(&format!("/api/downloads/{id}"), &[]).await?;
        Ok(response.download)
    }

    /// `POST /api/downloads` — create one download.
    pub async fn create_download(&self, request: &CreateDownloadRequest) -> ApiResult<Download> {
        let response: DownloadEnvelope = self.post("/api/downloads", request).await?;
        Ok(response.download)
    }

    /// `POST /api/downloads/batch` — create many downloads in one request.
    ///
    /// Partial failure is returned as data: the response partitions the
    /// request into `successful` and `failed`, never failing the call for
    /// the succeeded subset.
    pub async fn create_batch_downloads(
        &self,
        downloads: Vec<CreateDownloadRequest>,
    ) -> ApiResult<BatchCreateDownloadResponse> {
        let request = BatchCreateDownloadRequest { downloads };
        self.post("/api/downloads/batch", &request).await
    }

    /// `DELETE /api/downloads/{id}` — cancel and discard a download.
    pub async fn cancel_download(&self, id: &str) -> ApiResult<()> {
        self.delete_empty(&format!("/api/downloads/{id}")).await
    }

    /// `POST /api/downloads/{id}/organize` — trigger server-side organization.
    pub async fn organize_download(&self, id: &str) -> ApiResult<()> {
        self.post_empty::<()>(&format!("/api/downloads/{id}/organize"), None)
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::api::ClientConfig;
    use crate::test_support::socket_guard::start_mock_server_or_skip;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, ResponseTemplate};

    fn client_for(uri: &str) -> ApiClient {
        ApiClient::new(ClientConfig::new(uri).unwrap())
    }

    fn download_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "Book",
            "author": "Author",
            "status": status,
            "progress": 0,
            "created_at": "2026-08-01T12:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_list_unwraps_downloads_envelope() {
        let Some(server) = start_mock_server_or_skip().await else {
            return;
        };
        Mock::given(method("GET"))
            .and(path("/api/downloads"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "downloads": [download_json("a", "queued"), download_json("b", "failed")]
            })))
            .mount(&server)
            .await;

        let downloads = client_for(&server.uri()).list_downloads().await.unwrap();
        assert_eq!(downloads.len(), 2);
        assert_eq!(downloads[0].id, "a");
    }

    #[tokio::test]
    async fn test_create_unwraps_download_envelope() {
        let Some(server) = start_mock_server_or_skip().await else {
            return;
        };
        Mock::given(method("POST"))
            .and(path("/api/downloads"))
            .and(body_partial_json(serde_json::json!({"title": "Book"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "download": download_json("new", "queued")
            })))
            .mount(&server)
            .await;

        let request = CreateDownloadRequest {
            title: "Book".into(),
            author: "Author".into(),
            series: None,
            series_number: None,
            category: "Audiobooks".into(),
            torrent_url: None,
            magnet_link: Some("magnet:?xt=...".into()),
        };
        let download = client_for(&server.uri())
            .create_download(&request)
            .await
            .unwrap();
        assert_eq!(download.id, "new");
    }

    #[tokio::test]
    async fn test_batch_wraps_requests_in_downloads_field() {
        let Some(server) = start_mock_server_or_skip().await else {
            return;
        };
        Mock::given(method("POST"))
            .and(path("/api/downloads/batch"))
            .and(body_partial_json(serde_json::json!({
                "downloads": [{"title": "One"}, {"title": "Two"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "successful": [download_json("1", "queued")],
                "failed": [{
                    "index": 1,
                    "request": {"title": "Two", "author": "A", "category": "Audiobooks"},
                    "error": "duplicate download"
                }]
            })))
            .mount(&server)
            .await;

        let make = |title: &str| CreateDownloadRequest {
            title: title.into(),
            author: "A".into(),
            series: None,
            series_number: None,
            category: "Audiobooks".into(),
            torrent_url: None,
            magnet_link: None,
        };
        let response = client_for(&server.uri())
            .create_batch_downloads(vec![make("One"), make("Two")])
            .await
            .unwrap();
        assert_eq!(response.successful.len() + response.failed.len(), 2);
        assert_eq!(response.failed[0].index, 1);
    }

    #[tokio::test]
    async fn test_cancel_accepts_204() {
        let Some(server) = start_mock_server_or_skip().await else {
            return;
        };
        Mock::given(method("DELETE"))
            .and(path("/api/downloads/gone"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        client_for(&server.uri())
            .cancel_download("gone")
            .await
            .unwrap();
    }
}

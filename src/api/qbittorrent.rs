//! qBittorrent connectivity probe.

use crate::model::TestConnectionResponse;

use super::client::ApiClient;
use super::error::ApiResult;

impl ApiClient {
    /// `GET /api/qbittorrent/test` — can the server reach its torrent client.
    pub async fn test_qbittorrent(&self) -> ApiResult<TestConnectionResponse> {
        self.get("/api/qbittorrent/test", &[]).await
    }
}

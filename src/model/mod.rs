//! Wire and domain types shared by the API layer and the stores.

mod download;
mod provider;
pub(crate) mod search;

pub use download::{
    BatchCreateDownloadRequest, BatchCreateDownloadResponse, BatchDownloadError,
    CreateDownloadRequest, Download, DownloadStatus,
};
pub use provider::{
    CreateProviderRequest, ProviderConfig, ProviderConfigField, ProviderType,
    TestConnectionResponse, UpdateProviderRequest,
};
pub use search::{SearchFilters, SearchResult, SeriesInfo};

use bytes::Bytes;

use crate::domain::BlobLocator;

#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(&self, name: &str, data: Bytes) -> Result<BlobLocator, BlobStoreError>;

    async fn fetch(&self, locator: &BlobLocator) -> Result<Vec<u8>, BlobStoreError>;

    async fn delete(&self, locator: &BlobLocator) -> Result<(), BlobStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BlobStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("store configuration invalid: {0}")]
    Configuration(String),
}

use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::aws::AmazonS3Builder;
use object_store::local::LocalFileSystem;
use object_store::memory::InMemory;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::domain::BlobLocator;

/// [`BlobStore`] over any `object_store` backend.
pub struct ObjectStoreBlobStore {
    inner: Arc<dyn ObjectStore>,
    bucket: String,
    uri_base: String,
}

impl ObjectStoreBlobStore {
    pub fn local(base_path: PathBuf) -> Result<Self, BlobStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        let base_path = base_path
            .canonicalize()
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;

        let display = base_path.display().to_string();
        Ok(Self {
            inner: Arc::new(fs),
            uri_base: format!("file://{}", display.trim_end_matches('/')),
            bucket: display,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(InMemory::new()),
            bucket: "memory".to_string(),
            uri_base: "memory://memory".to_string(),
        }
    }

    /// S3 bucket; credentials come from the standard `AWS_*` variables.
    pub fn s3(
        bucket: &str,
        region: &str,
        endpoint: Option<&str>,
    ) -> Result<Self, BlobStoreError> {
        let mut builder = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .with_region(region);
        let uri_base = match endpoint {
            Some(endpoint) => {
                let endpoint = endpoint.trim_end_matches('/');
                builder = builder.with_endpoint(endpoint).with_allow_http(true);
                format!("{}/{}", endpoint, bucket)
            }
            None => format!("https://s3.{}.amazonaws.com/{}", region, bucket),
        };
        let store = builder
            .build()
            .map_err(|e| BlobStoreError::Configuration(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(store),
            bucket: bucket.to_string(),
            uri_base,
        })
    }

    fn locator_for(&self, key: &str) -> BlobLocator {
        BlobLocator::new(
            self.bucket.clone(),
            key,
            format!("{}/{}", self.uri_base, key),
        )
    }
}

#[async_trait::async_trait]
impl BlobStore for ObjectStoreBlobStore {
    async fn put(&self, name: &str, data: Bytes) -> Result<BlobLocator, BlobStoreError> {
        let store_path = StorePath::from(name);
        let size = data.len();
        self.inner
            .put(&store_path, PutPayload::from(data))
            .await
            .map_err(|e| BlobStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(key = %name, bytes = size, "Stored audio blob");
        Ok(self.locator_for(name))
    }

    async fn fetch(&self, locator: &BlobLocator) -> Result<Vec<u8>, BlobStoreError> {
        let store_path = StorePath::from(locator.key());
        let result = self.inner.get(&store_path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => BlobStoreError::NotFound(locator.to_string()),
            other => BlobStoreError::DownloadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| BlobStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, locator: &BlobLocator) -> Result<(), BlobStoreError> {
        let store_path = StorePath::from(locator.key());
        self.inner
            .delete(&store_path)
            .await
            .map_err(|e| BlobStoreError::DeleteFailed(e.to_string()))
    }
}

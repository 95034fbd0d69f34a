use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{BlobStore, BlobStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::object_store_blob_store::ObjectStoreBlobStore;

pub struct BlobStoreFactory;

impl BlobStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<Arc<dyn BlobStore>, BlobStoreError> {
        match settings.provider {
            StorageProviderSetting::Local => {
                let store = ObjectStoreBlobStore::local(PathBuf::from(&settings.local_path))?;
                Ok(Arc::new(store))
            }
            StorageProviderSetting::Memory => Ok(Arc::new(ObjectStoreBlobStore::in_memory())),
            StorageProviderSetting::S3 => {
                let bucket = settings.bucket.as_deref().ok_or_else(|| {
                    BlobStoreError::Configuration("storage.bucket required for s3".into())
                })?;
                let region = settings.region.as_deref().unwrap_or("us-west-1");
                let store =
                    ObjectStoreBlobStore::s3(bucket, region, settings.endpoint.as_deref())?;
                Ok(Arc::new(store))
            }
        }
    }
}

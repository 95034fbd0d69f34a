mod object_store_blob_store;
mod store_factory;

pub use object_store_blob_store::ObjectStoreBlobStore;
pub use store_factory::BlobStoreFactory;

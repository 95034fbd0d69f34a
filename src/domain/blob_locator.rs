use std::fmt;

/// Reference to an uploaded audio object.
///
/// `uri` is the form the transcription service resolves; `bucket` and `key`
/// address the object inside the blob store that created it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobLocator {
    bucket: String,
    key: String,
    uri: String,
}

impl BlobLocator {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            uri: uri.into(),
        }
    }

    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl fmt::Display for BlobLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

use super::{BlobLocator, LanguageTag, TranscriptionStatus};

#[derive(Debug, Clone)]
pub struct TranscriptionJob {
    pub name: String,
    pub locator: BlobLocator,
    pub source: LanguageTag,
    pub status: TranscriptionStatus,
}

impl TranscriptionJob {
    pub fn new(name: impl Into<String>, locator: BlobLocator, source: LanguageTag) -> Self {
        Self {
            name: name.into(),
            locator,
            source,
            status: TranscriptionStatus::InProgress,
        }
    }
}

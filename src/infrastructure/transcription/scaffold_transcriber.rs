use async_trait::async_trait;

use crate::application::ports::{Transcriber, TranscriberError};
use crate::domain::{BlobLocator, LanguageTag, TranscriptionJob, TranscriptionStatus};

/// Completes every job immediately with a fixed transcript. For local runs
/// without provider credentials.
pub struct ScaffoldTranscriber {
    text: String,
}

impl ScaffoldTranscriber {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl Transcriber for ScaffoldTranscriber {
    async fn start(
        &self,
        job_name: &str,
        locator: &BlobLocator,
        source: &LanguageTag,
    ) -> Result<TranscriptionJob, TranscriberError> {
        Ok(TranscriptionJob::new(job_name, locator.clone(), source.clone()))
    }

    async fn status(
        &self,
        _job: &TranscriptionJob,
    ) -> Result<TranscriptionStatus, TranscriberError> {
        Ok(TranscriptionStatus::Completed)
    }

    async fn fetch_text(&self, _job: &TranscriptionJob) -> Result<String, TranscriberError> {
        Ok(self.text.clone())
    }
}

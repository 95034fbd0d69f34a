use async_trait::async_trait;

use crate::domain::{BlobLocator, LanguageTag, TranscriptionJob, TranscriptionStatus};

/// Asynchronous speech-to-text service.
///
/// A job is submitted once, polled through [`Transcriber::status`] until it
/// reports a terminal status, then its transcript is read with
/// [`Transcriber::fetch_text`].
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn start(
        &self,
        job_name: &str,
        locator: &BlobLocator,
        source: &LanguageTag,
    ) -> Result<TranscriptionJob, TranscriberError>;

    async fn status(&self, job: &TranscriptionJob)
    -> Result<TranscriptionStatus, TranscriberError>;

    async fn fetch_text(&self, job: &TranscriptionJob) -> Result<String, TranscriberError>;

    /// Why a job reported FAILED, when the service says.
    async fn failure_reason(
        &self,
        _job: &TranscriptionJob,
    ) -> Result<Option<String>, TranscriberError> {
        Ok(None)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriberError {
    #[error("job submission failed: {0}")]
    SubmitFailed(String),
    #[error("job not found: {0}")]
    JobNotFound(String),
    #[error("transcript unavailable: {0}")]
    ResultUnavailable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("transcriber configuration invalid: {0}")]
    Configuration(String),
}

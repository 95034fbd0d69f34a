use std::time::Duration;

use tolk::application::ports::{BlobStoreError, TranslatorError};
use tolk::application::services::{PipelineError, PipelineErrorKind};
use tolk::domain::PipelineStage;

#[test]
fn given_timeout_error_when_displayed_then_includes_job_and_wait() {
    let err = PipelineError::TranscriptionTimeout {
        job: "transcribe_42".into(),
        waited: Duration::from_secs(300),
    };

    assert_eq!(
        err.to_string(),
        "transcription job transcribe_42 did not finish within 300s"
    );
    assert_eq!(err.kind().as_str(), "TRANSCRIPTION_TIMEOUT");
}

#[test]
fn given_storage_error_when_classified_then_upload_stage_was_not_reached() {
    let err = PipelineError::Storage(BlobStoreError::UploadFailed("denied".into()));

    assert_eq!(err.kind(), PipelineErrorKind::Storage);
    assert_eq!(err.stage(), PipelineStage::Uploaded);
}

#[test]
fn given_translation_error_when_displayed_then_wraps_cause() {
    let err = PipelineError::Translation(TranslatorError::RateLimited);

    assert_eq!(err.to_string(), "translation failed: rate limited");
    assert_eq!(err.stage(), PipelineStage::Translated);
}

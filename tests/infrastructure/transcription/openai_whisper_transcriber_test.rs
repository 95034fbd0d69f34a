use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::routing::post;

use tolk::application::ports::{BlobStore, Transcriber, TranscriberError};
use tolk::domain::{LanguageTag, TranscriptionJob, TranscriptionStatus};
use tolk::infrastructure::storage::ObjectStoreBlobStore;
use tolk::infrastructure::transcription::OpenAiWhisperTranscriber;

use crate::helpers::spawn_mock_server;

async fn whisper_ok(body: Bytes) -> (StatusCode, String) {
    let form = String::from_utf8_lossy(&body);
    if form.contains("whisper-1") && form.contains("RIFF") {
        (StatusCode::OK, "  hello world \n".to_string())
    } else {
        (StatusCode::BAD_REQUEST, "missing model or file".to_string())
    }
}

async fn whisper_unavailable() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "overloaded")
}

async fn wait_for_terminal(
    transcriber: &OpenAiWhisperTranscriber,
    job: &TranscriptionJob,
) -> TranscriptionStatus {
    for _ in 0..200 {
        let status = transcriber.status(job).await.unwrap();
        if status.is_terminal() {
            return status;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("job {} never finished", job.name);
}

async fn setup(router: Router) -> (Arc<dyn BlobStore>, OpenAiWhisperTranscriber) {
    let base_url = spawn_mock_server(router).await;
    let blob_store: Arc<dyn BlobStore> = Arc::new(ObjectStoreBlobStore::in_memory());
    let transcriber = OpenAiWhisperTranscriber::new(
        "sk-test".to_string(),
        Some(format!("{}/v1", base_url)),
        None,
        Arc::clone(&blob_store),
    );
    (blob_store, transcriber)
}

#[tokio::test]
async fn given_uploaded_clip_when_job_completes_then_transcript_is_trimmed() {
    let (blob_store, transcriber) =
        setup(Router::new().route("/v1/audio/transcriptions", post(whisper_ok))).await;
    let locator = blob_store
        .put("audio_10.wav", Bytes::from_static(b"RIFF----WAVE"))
        .await
        .unwrap();

    let job = transcriber
        .start("transcribe_10", &locator, &LanguageTag::normalize("en"))
        .await
        .unwrap();

    assert_eq!(job.status, TranscriptionStatus::InProgress);
    assert_eq!(
        wait_for_terminal(&transcriber, &job).await,
        TranscriptionStatus::Completed
    );
    assert_eq!(transcriber.fetch_text(&job).await.unwrap(), "hello world");
}

#[tokio::test]
async fn given_fetched_job_when_fetching_again_then_job_is_gone() {
    let (blob_store, transcriber) =
        setup(Router::new().route("/v1/audio/transcriptions", post(whisper_ok))).await;
    let locator = blob_store
        .put("audio_11.wav", Bytes::from_static(b"RIFF"))
        .await
        .unwrap();
    let job = transcriber
        .start("transcribe_11", &locator, &LanguageTag::normalize("en"))
        .await
        .unwrap();
    wait_for_terminal(&transcriber, &job).await;

    transcriber.fetch_text(&job).await.unwrap();

    let second = transcriber.fetch_text(&job).await;
    assert!(matches!(second, Err(TranscriberError::JobNotFound(_))));
}

#[tokio::test]
async fn given_provider_error_when_job_runs_then_status_is_failed() {
    let (blob_store, transcriber) = setup(
        Router::new().route("/v1/audio/transcriptions", post(whisper_unavailable)),
    )
    .await;
    let locator = blob_store
        .put("audio_12.wav", Bytes::from_static(b"RIFF"))
        .await
        .unwrap();

    let job = transcriber
        .start("transcribe_12", &locator, &LanguageTag::normalize("es"))
        .await
        .unwrap();

    assert_eq!(
        wait_for_terminal(&transcriber, &job).await,
        TranscriptionStatus::Failed
    );
    let text = transcriber.fetch_text(&job).await;
    assert!(matches!(text, Err(TranscriberError::ResultUnavailable(_))));
}

#[tokio::test]
async fn given_missing_blob_when_job_runs_then_status_is_failed() {
    let (blob_store, transcriber) =
        setup(Router::new().route("/v1/audio/transcriptions", post(whisper_ok))).await;
    let locator = blob_store
        .put("audio_13.wav", Bytes::from_static(b"RIFF"))
        .await
        .unwrap();
    blob_store.delete(&locator).await.unwrap();

    let job = transcriber
        .start("transcribe_13", &locator, &LanguageTag::normalize("en"))
        .await
        .unwrap();

    assert_eq!(
        wait_for_terminal(&transcriber, &job).await,
        TranscriptionStatus::Failed
    );
}

#[tokio::test]
async fn given_existing_job_name_when_starting_again_then_rejects_submission() {
    let (blob_store, transcriber) =
        setup(Router::new().route("/v1/audio/transcriptions", post(whisper_ok))).await;
    let locator = blob_store
        .put("audio_14.wav", Bytes::from_static(b"RIFF"))
        .await
        .unwrap();
    let source = LanguageTag::normalize("en");
    transcriber
        .start("transcribe_14", &locator, &source)
        .await
        .unwrap();

    let duplicate = transcriber.start("transcribe_14", &locator, &source).await;

    assert!(matches!(duplicate, Err(TranscriberError::SubmitFailed(_))));
}

#[tokio::test]
async fn given_unknown_job_when_polling_then_returns_not_found() {
    let (blob_store, transcriber) =
        setup(Router::new().route("/v1/audio/transcriptions", post(whisper_ok))).await;
    let locator = blob_store
        .put("audio_15.wav", Bytes::from_static(b"RIFF"))
        .await
        .unwrap();
    let job = TranscriptionJob::new("transcribe_unknown", locator, LanguageTag::normalize("en"));

    let status = transcriber.status(&job).await;

    assert!(matches!(status, Err(TranscriberError::JobNotFound(_))));
}

#[tokio::test]
async fn given_failed_job_when_asking_failure_reason_then_returns_provider_message_once() {
    let (blob_store, transcriber) = setup(
        Router::new().route("/v1/audio/transcriptions", post(whisper_unavailable)),
    )
    .await;
    let locator = blob_store
        .put("audio_16.wav", Bytes::from_static(b"RIFF"))
        .await
        .unwrap();
    let job = transcriber
        .start("transcribe_16", &locator, &LanguageTag::normalize("en"))
        .await
        .unwrap();
    wait_for_terminal(&transcriber, &job).await;

    let reason = transcriber.failure_reason(&job).await.unwrap().unwrap();

    assert!(reason.contains("503"));
    assert!(reason.contains("overloaded"));
    let again = transcriber.failure_reason(&job).await;
    assert!(matches!(again, Err(TranscriberError::JobNotFound(_))));
}

#[tokio::test]
async fn given_completed_job_when_asking_failure_reason_then_none_and_transcript_kept() {
    let (blob_store, transcriber) =
        setup(Router::new().route("/v1/audio/transcriptions", post(whisper_ok))).await;
    let locator = blob_store
        .put("audio_17.wav", Bytes::from_static(b"RIFF"))
        .await
        .unwrap();
    let job = transcriber
        .start("transcribe_17", &locator, &LanguageTag::normalize("en"))
        .await
        .unwrap();
    wait_for_terminal(&transcriber, &job).await;

    assert_eq!(transcriber.failure_reason(&job).await.unwrap(), None);
    assert_eq!(transcriber.fetch_text(&job).await.unwrap(), "hello world");
}

use std::sync::Arc;

use tolk::application::ports::{BlobStore, TranscriberError};
use tolk::domain::{BlobLocator, LanguageTag, TranscriptionStatus};
use tolk::infrastructure::storage::ObjectStoreBlobStore;
use tolk::infrastructure::transcription::TranscriberFactory;
use tolk::presentation::config::{ProviderSetting, TranscriptionSettings};

fn blob_store() -> Arc<dyn BlobStore> {
    Arc::new(ObjectStoreBlobStore::in_memory())
}

#[test]
fn given_openai_provider_without_key_when_creating_then_returns_configuration_error() {
    let settings = TranscriptionSettings {
        provider: ProviderSetting::OpenAi,
        api_key: None,
        ..TranscriptionSettings::default()
    };

    let result = TranscriberFactory::create(&settings, blob_store());

    assert!(matches!(result, Err(TranscriberError::Configuration(_))));
}

#[tokio::test]
async fn given_scaffold_provider_when_transcribing_then_completes_with_configured_text() {
    let settings = TranscriptionSettings {
        scaffold_text: "good morning".to_string(),
        ..TranscriptionSettings::default()
    };
    let transcriber = TranscriberFactory::create(&settings, blob_store()).unwrap();
    let locator = BlobLocator::new("memory", "audio_1.wav", "memory://memory/audio_1.wav");

    let job = transcriber
        .start("transcribe_1", &locator, &LanguageTag::normalize("en"))
        .await
        .unwrap();

    assert_eq!(
        transcriber.status(&job).await.unwrap(),
        TranscriptionStatus::Completed
    );
    assert_eq!(transcriber.fetch_text(&job).await.unwrap(), "good morning");
}

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{BlobStore, Transcriber, TranscriberError};
use crate::presentation::config::{ProviderSetting, TranscriptionSettings};

use super::openai_whisper_transcriber::OpenAiWhisperTranscriber;
use super::scaffold_transcriber::ScaffoldTranscriber;

pub struct TranscriberFactory;

impl TranscriberFactory {
    pub fn create(
        settings: &TranscriptionSettings,
        blob_store: Arc<dyn BlobStore>,
    ) -> Result<Arc<dyn Transcriber>, TranscriberError> {
        match settings.provider {
            ProviderSetting::OpenAi => {
                let key = settings.api_key.clone().ok_or_else(|| {
                    TranscriberError::Configuration(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                let transcriber = OpenAiWhisperTranscriber::new(
                    key,
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                    blob_store,
                )
                .with_retention(Duration::from_secs(settings.job_retention_secs));
                Ok(Arc::new(transcriber))
            }
            ProviderSetting::Scaffold => {
                Ok(Arc::new(ScaffoldTranscriber::new(settings.scaffold_text.clone())))
            }
        }
    }
}

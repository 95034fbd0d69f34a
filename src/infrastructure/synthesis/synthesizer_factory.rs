use std::sync::Arc;

use crate::application::ports::{Synthesizer, SynthesizerError};
use crate::presentation::config::{ProviderSetting, SynthesisSettings};

use super::openai_speech_synthesizer::OpenAiSpeechSynthesizer;
use super::scaffold_synthesizer::ScaffoldSynthesizer;

pub struct SynthesizerFactory;

impl SynthesizerFactory {
    pub fn create(settings: &SynthesisSettings) -> Result<Arc<dyn Synthesizer>, SynthesizerError> {
        match settings.provider {
            ProviderSetting::OpenAi => {
                let key = settings.api_key.clone().ok_or_else(|| {
                    SynthesizerError::Configuration(
                        "API key required for OpenAI speech".to_string(),
                    )
                })?;
                Ok(Arc::new(OpenAiSpeechSynthesizer::new(
                    key,
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                )))
            }
            ProviderSetting::Scaffold => Ok(Arc::new(ScaffoldSynthesizer)),
        }
    }
}

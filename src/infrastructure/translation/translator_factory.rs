use std::sync::Arc;

use crate::application::ports::{Translator, TranslatorError};
use crate::presentation::config::{ProviderSetting, TranslationSettings};

use super::openai_translator::OpenAiTranslator;
use super::scaffold_translator::ScaffoldTranslator;

pub struct TranslatorFactory;

impl TranslatorFactory {
    pub fn create(settings: &TranslationSettings) -> Result<Arc<dyn Translator>, TranslatorError> {
        match settings.provider {
            ProviderSetting::OpenAi => {
                let key = settings.api_key.clone().ok_or_else(|| {
                    TranslatorError::Configuration(
                        "API key required for OpenAI translation".to_string(),
                    )
                })?;
                Ok(Arc::new(OpenAiTranslator::new(
                    key,
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                )))
            }
            ProviderSetting::Scaffold => Ok(Arc::new(ScaffoldTranslator)),
        }
    }
}

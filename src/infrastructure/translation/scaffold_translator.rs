use async_trait::async_trait;

use crate::application::ports::{Translator, TranslatorError};
use crate::domain::LanguageTag;

/// Tags the text with the target language instead of translating it.
pub struct ScaffoldTranslator;

#[async_trait]
impl Translator for ScaffoldTranslator {
    async fn translate(
        &self,
        text: &str,
        _source: &LanguageTag,
        target: &LanguageTag,
    ) -> Result<String, TranslatorError> {
        Ok(format!("[{}] {}", target, text))
    }
}

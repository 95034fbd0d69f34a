use async_trait::async_trait;

use crate::domain::LanguageTag;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source: &LanguageTag,
        target: &LanguageTag,
    ) -> Result<String, TranslatorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslatorError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("translator configuration invalid: {0}")]
    Configuration(String),
}

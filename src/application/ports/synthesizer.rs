use async_trait::async_trait;

#[async_trait]
pub trait Synthesizer: Send + Sync {
    /// Renders `text` with `voice`, returning MP3 audio.
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("empty audio returned for voice {0}")]
    EmptyAudio(String),
    #[error("synthesizer configuration invalid: {0}")]
    Configuration(String),
}

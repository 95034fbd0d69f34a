use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;

use crate::application::ports::{Synthesizer, SynthesizerError};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "tts-1";

/// Speech through an OpenAI-compatible `/audio/speech` endpoint, MP3 out.
pub struct OpenAiSpeechSynthesizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiSpeechSynthesizer {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl Synthesizer for OpenAiSpeechSynthesizer {
    async fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, SynthesizerError> {
        let url = format!("{}/audio/speech", self.base_url);
        let body = json!({
            "model": self.model,
            "input": text,
            "voice": voice,
            "response_format": "mp3",
        });

        tracing::debug!(model = %self.model, voice, chars = text.len(), "Requesting speech");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SynthesizerError::ApiRequestFailed(format!("request: {}", e)))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(SynthesizerError::RateLimited);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SynthesizerError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesizerError::ApiRequestFailed(format!("body: {}", e)))?;
        if audio.is_empty() {
            return Err(SynthesizerError::EmptyAudio(voice.to_string()));
        }

        tracing::info!(bytes = audio.len(), voice, "Speech synthesis completed");
        Ok(audio.to_vec())
    }
}

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use tolk::application::ports::{Synthesizer, SynthesizerError};
use tolk::infrastructure::synthesis::{OpenAiSpeechSynthesizer, SynthesizerFactory};
use tolk::presentation::config::{ProviderSetting, SynthesisSettings};

use crate::helpers::spawn_mock_server;

async fn speech(Json(body): Json<Value>) -> (StatusCode, Vec<u8>) {
    match (body["voice"].as_str(), body["response_format"].as_str()) {
        (Some("nova"), Some("mp3")) => (StatusCode::OK, vec![0xFF, 0xFB, 0x90, 0x64]),
        (Some(_), Some("mp3")) => (StatusCode::OK, Vec::new()),
        _ => (StatusCode::BAD_REQUEST, b"bad request".to_vec()),
    }
}

async fn rate_limited() -> (StatusCode, &'static str) {
    (StatusCode::TOO_MANY_REQUESTS, "slow down")
}

async fn synthesizer_for(router: Router) -> OpenAiSpeechSynthesizer {
    let base_url = spawn_mock_server(router).await;
    OpenAiSpeechSynthesizer::new(
        "sk-test".to_string(),
        Some(format!("{}/v1", base_url)),
        Some("tts-1".to_string()),
    )
}

#[tokio::test]
async fn given_text_and_voice_when_synthesizing_then_returns_audio_bytes() {
    let synthesizer = synthesizer_for(Router::new().route("/v1/audio/speech", post(speech))).await;

    let audio = synthesizer.synthesize("hola mundo", "nova").await.unwrap();

    assert_eq!(audio, vec![0xFF, 0xFB, 0x90, 0x64]);
}

#[tokio::test]
async fn given_empty_body_when_synthesizing_then_returns_empty_audio_error() {
    let synthesizer = synthesizer_for(Router::new().route("/v1/audio/speech", post(speech))).await;

    let result = synthesizer.synthesize("hola mundo", "alloy").await;

    assert!(matches!(result, Err(SynthesizerError::EmptyAudio(voice)) if voice == "alloy"));
}

#[tokio::test]
async fn given_429_when_synthesizing_then_returns_rate_limited() {
    let synthesizer =
        synthesizer_for(Router::new().route("/v1/audio/speech", post(rate_limited))).await;

    let result = synthesizer.synthesize("hola mundo", "nova").await;

    assert!(matches!(result, Err(SynthesizerError::RateLimited)));
}

#[test]
fn given_openai_provider_without_key_when_creating_then_returns_configuration_error() {
    let settings = SynthesisSettings {
        provider: ProviderSetting::OpenAi,
        ..SynthesisSettings::default()
    };

    let result = SynthesizerFactory::create(&settings);

    assert!(matches!(result, Err(SynthesizerError::Configuration(_))));
}

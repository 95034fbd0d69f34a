use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

use tolk::application::ports::{Translator, TranslatorError};
use tolk::domain::LanguageTag;
use tolk::infrastructure::translation::{
    OpenAiTranslator, ScaffoldTranslator, TranslatorFactory,
};
use tolk::presentation::config::{ProviderSetting, TranslationSettings};

use crate::helpers::spawn_mock_server;

async fn chat_completions(
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer sk-test");
    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
    let text = body["messages"][1]["content"].as_str().unwrap_or_default();

    if !authorized || !prompt.contains("en-US") || !prompt.contains("es-ES") {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad request" })));
    }
    let reply = if text == "hello world" { " hola mundo\n" } else { "" };
    (
        StatusCode::OK,
        Json(json!({ "choices": [{ "message": { "role": "assistant", "content": reply } }] })),
    )
}

async fn rate_limited() -> (StatusCode, &'static str) {
    (StatusCode::TOO_MANY_REQUESTS, "slow down")
}

async fn translator_for(router: Router) -> OpenAiTranslator {
    let base_url = spawn_mock_server(router).await;
    OpenAiTranslator::new("sk-test".to_string(), Some(format!("{}/v1/", base_url)), None)
}

#[tokio::test]
async fn given_text_when_translating_then_returns_trimmed_completion() {
    let translator =
        translator_for(Router::new().route("/v1/chat/completions", post(chat_completions))).await;

    let translated = translator
        .translate(
            "hello world",
            &LanguageTag::normalize("en"),
            &LanguageTag::normalize("es"),
        )
        .await
        .unwrap();

    assert_eq!(translated, "hola mundo");
}

#[tokio::test]
async fn given_empty_completion_when_translating_then_returns_invalid_response() {
    let translator =
        translator_for(Router::new().route("/v1/chat/completions", post(chat_completions))).await;

    let result = translator
        .translate(
            "untranslatable",
            &LanguageTag::normalize("en"),
            &LanguageTag::normalize("es"),
        )
        .await;

    assert!(matches!(result, Err(TranslatorError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_429_when_translating_then_returns_rate_limited() {
    let translator =
        translator_for(Router::new().route("/v1/chat/completions", post(rate_limited))).await;

    let result = translator
        .translate(
            "hello world",
            &LanguageTag::normalize("en"),
            &LanguageTag::normalize("es"),
        )
        .await;

    assert!(matches!(result, Err(TranslatorError::RateLimited)));
}

#[tokio::test]
async fn given_scaffold_translator_when_translating_then_tags_text_with_target() {
    let translated = ScaffoldTranslator
        .translate(
            "hello",
            &LanguageTag::normalize("en"),
            &LanguageTag::normalize("fr"),
        )
        .await
        .unwrap();

    assert_eq!(translated, "[fr-FR] hello");
}

#[test]
fn given_openai_provider_without_key_when_creating_then_returns_configuration_error() {
    let settings = TranslationSettings {
        provider: ProviderSetting::OpenAi,
        ..TranslationSettings::default()
    };

    let result = TranslatorFactory::create(&settings);

    assert!(matches!(result, Err(TranslatorError::Configuration(_))));
}

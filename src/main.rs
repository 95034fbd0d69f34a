use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use tolk::application::services::{CancellationHandle, PipelineOrchestrator, cancellation_pair};
use tolk::infrastructure::observability::{TracingConfig, init_tracing};
use tolk::infrastructure::storage::BlobStoreFactory;
use tolk::infrastructure::synthesis::SynthesizerFactory;
use tolk::infrastructure::transcription::TranscriberFactory;
use tolk::infrastructure::translation::TranslatorFactory;
use tolk::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let blob_store = BlobStoreFactory::create(&settings.storage)?;
    let transcriber = TranscriberFactory::create(&settings.transcription, Arc::clone(&blob_store))?;
    let translator = TranslatorFactory::create(&settings.translation)?;
    let synthesizer = SynthesizerFactory::create(&settings.synthesis)?;
    let voices = settings.synthesis.voice_profile();

    tracing::info!(
        storage = ?settings.storage.provider,
        transcription = ?settings.transcription.provider,
        translation = ?settings.translation.provider,
        synthesis = ?settings.synthesis.provider,
        default_voice = %voices.default_voice(),
        "Providers configured"
    );

    let orchestrator = Arc::new(PipelineOrchestrator::new(
        blob_store,
        transcriber,
        translator,
        synthesizer,
        voices,
        settings.pipeline.to_pipeline_settings(),
    ));

    let (shutdown_handle, shutdown) = cancellation_pair();
    let state = AppState {
        orchestrator,
        shutdown,
        max_audio_bytes: settings.server.max_audio_bytes,
    };

    let router = create_router(state);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(shutdown_handle))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal(handle: CancellationHandle) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown requested, cancelling in-flight transcription waits");
    handle.cancel();
}

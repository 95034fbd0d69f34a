use std::sync::Arc;

use crate::application::services::{CancellationSignal, PipelineOrchestrator};

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<PipelineOrchestrator>,
    pub shutdown: CancellationSignal,
    pub max_audio_bytes: usize,
}

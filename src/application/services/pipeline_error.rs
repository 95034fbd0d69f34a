use std::fmt;
use std::time::Duration;

use crate::application::ports::{
    BlobStoreError, SynthesizerError, TranscriberError, TranslatorError,
};
use crate::domain::PipelineStage;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("no audio data received")]
    EmptyAudio,
    #[error("audio upload failed: {0}")]
    Storage(#[source] BlobStoreError),
    #[error("transcription service error: {0}")]
    Transcription(#[source] TranscriberError),
    #[error(
        "transcription job {job} failed{}",
        .reason.as_deref().map(|r| format!(": {}", r)).unwrap_or_default()
    )]
    TranscriptionFailed { job: String, reason: Option<String> },
    #[error("transcription job {job} did not finish within {}s", .waited.as_secs())]
    TranscriptionTimeout { job: String, waited: Duration },
    #[error("transcription job {job} cancelled")]
    Cancelled { job: String },
    #[error("no transcribed text available for job {job}")]
    NoTranscript { job: String },
    #[error("translation failed: {0}")]
    Translation(#[source] TranslatorError),
    #[error("speech synthesis failed: {0}")]
    Synthesis(#[source] SynthesizerError),
}

impl PipelineError {
    pub fn kind(&self) -> PipelineErrorKind {
        match self {
            PipelineError::EmptyAudio => PipelineErrorKind::EmptyAudio,
            PipelineError::Storage(_) => PipelineErrorKind::Storage,
            PipelineError::Transcription(_) => PipelineErrorKind::Transcription,
            PipelineError::TranscriptionFailed { .. } => PipelineErrorKind::TranscriptionFailed,
            PipelineError::TranscriptionTimeout { .. } => PipelineErrorKind::TranscriptionTimeout,
            PipelineError::Cancelled { .. } => PipelineErrorKind::Cancelled,
            PipelineError::NoTranscript { .. } => PipelineErrorKind::NoTranscript,
            PipelineError::Translation(_) => PipelineErrorKind::Translation,
            PipelineError::Synthesis(_) => PipelineErrorKind::Synthesis,
        }
    }

    /// The stage the request could not reach.
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::EmptyAudio => PipelineStage::Validated,
            PipelineError::Storage(_) => PipelineStage::Uploaded,
            PipelineError::Transcription(_)
            | PipelineError::TranscriptionFailed { .. }
            | PipelineError::TranscriptionTimeout { .. }
            | PipelineError::Cancelled { .. }
            | PipelineError::NoTranscript { .. } => PipelineStage::Transcribed,
            PipelineError::Translation(_) => PipelineStage::Translated,
            PipelineError::Synthesis(_) => PipelineStage::Synthesized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineErrorKind {
    EmptyAudio,
    Storage,
    Transcription,
    TranscriptionFailed,
    TranscriptionTimeout,
    Cancelled,
    NoTranscript,
    Translation,
    Synthesis,
}

impl PipelineErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineErrorKind::EmptyAudio => "EMPTY_AUDIO",
            PipelineErrorKind::Storage => "STORAGE",
            PipelineErrorKind::Transcription => "TRANSCRIPTION",
            PipelineErrorKind::TranscriptionFailed => "TRANSCRIPTION_FAILED",
            PipelineErrorKind::TranscriptionTimeout => "TRANSCRIPTION_TIMEOUT",
            PipelineErrorKind::Cancelled => "CANCELLED",
            PipelineErrorKind::NoTranscript => "NO_TRANSCRIPT",
            PipelineErrorKind::Translation => "TRANSLATION",
            PipelineErrorKind::Synthesis => "SYNTHESIS",
        }
    }
}

impl fmt::Display for PipelineErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

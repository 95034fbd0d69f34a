use std::sync::Arc;
use std::time::Duration;

use tracing::Instrument;

use crate::application::ports::{BlobStore, Synthesizer, Transcriber, Translator};
use crate::domain::{
    BlobLocator, CleanupWarning, LanguageTag, PipelineStage, RequestStamp, TranscriptionJob,
    TranscriptionStatus, TranslationRequest, TranslationResult, VoiceProfile,
};

use super::cancellation::CancellationSignal;
use super::pipeline_error::PipelineError;
use super::retry::RetryPolicy;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub poll_interval: Duration,
    pub max_wait: Duration,
    pub retry: RetryPolicy,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_wait: DEFAULT_MAX_WAIT,
            retry: RetryPolicy::single_attempt(),
        }
    }
}

/// Drives one clip through upload, transcription, translation and synthesis.
///
/// Holds no per-request state, so a single instance is shared by every
/// in-flight request. Once the clip is uploaded its blob is deleted exactly
/// once, whatever the outcome.
pub struct PipelineOrchestrator {
    blob_store: Arc<dyn BlobStore>,
    transcriber: Arc<dyn Transcriber>,
    translator: Arc<dyn Translator>,
    synthesizer: Arc<dyn Synthesizer>,
    voices: VoiceProfile,
    settings: PipelineSettings,
}

impl PipelineOrchestrator {
    pub fn new(
        blob_store: Arc<dyn BlobStore>,
        transcriber: Arc<dyn Transcriber>,
        translator: Arc<dyn Translator>,
        synthesizer: Arc<dyn Synthesizer>,
        voices: VoiceProfile,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            blob_store,
            transcriber,
            translator,
            synthesizer,
            voices,
            settings,
        }
    }

    pub async fn process(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationResult, PipelineError> {
        self.process_until(request, CancellationSignal::never()).await
    }

    /// Like [`Self::process`], but stops waiting on the transcription job as
    /// soon as `cancel` fires. The uploaded blob is still deleted.
    pub async fn process_until(
        &self,
        request: TranslationRequest,
        cancel: CancellationSignal,
    ) -> Result<TranslationResult, PipelineError> {
        if request.audio().is_empty() {
            tracing::warn!("Rejected request with empty audio");
            return Err(PipelineError::EmptyAudio);
        }

        let source = LanguageTag::normalize(request.source());
        let target = LanguageTag::normalize(request.target());
        let stamp = RequestStamp::next();

        let span = tracing::info_span!(
            "translation_pipeline",
            job = %stamp.job_name(),
            source = %source,
            target = %target,
        );

        self.run(request, stamp, source, target, cancel)
            .instrument(span)
            .await
    }

    async fn run(
        &self,
        request: TranslationRequest,
        stamp: RequestStamp,
        source: LanguageTag,
        target: LanguageTag,
        mut cancel: CancellationSignal,
    ) -> Result<TranslationResult, PipelineError> {
        tracing::debug!(
            stage = %PipelineStage::Validated,
            bytes = request.audio().len(),
            "Pipeline stage reached"
        );
        if !target.is_supported() {
            tracing::warn!(
                language = %target,
                voice = %self.voices.default_voice(),
                "Target language not in the supported table, passing tag through"
            );
        }

        let locator = self
            .blob_store
            .put(&stamp.object_name(), request.audio().clone())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Audio upload failed");
                PipelineError::Storage(e)
            })?;
        tracing::debug!(
            stage = %PipelineStage::Uploaded,
            locator = %locator,
            "Pipeline stage reached"
        );

        let outcome = self
            .run_uploaded(&stamp, &locator, &source, &target, &mut cancel)
            .await;
        let cleanup_warning = self.cleanup(&locator).await;

        match outcome {
            Ok(mut result) => {
                result.cleanup_warning = cleanup_warning;
                tracing::info!(
                    stage = %PipelineStage::Done,
                    original_chars = result.original_text.len(),
                    translated_chars = result.translated_text.len(),
                    audio_bytes = result.audio.len(),
                    "Translation pipeline completed"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kind = %e.kind(),
                    stage = %e.stage(),
                    "Translation pipeline failed"
                );
                Err(e)
            }
        }
    }

    async fn run_uploaded(
        &self,
        stamp: &RequestStamp,
        locator: &BlobLocator,
        source: &LanguageTag,
        target: &LanguageTag,
        cancel: &mut CancellationSignal,
    ) -> Result<TranslationResult, PipelineError> {
        let mut job = self
            .transcriber
            .start(&stamp.job_name(), locator, source)
            .await
            .map_err(PipelineError::Transcription)?;
        tracing::debug!(
            stage = %PipelineStage::Transcribing,
            "Pipeline stage reached"
        );

        job.status = self.wait_for_terminal(&job, cancel).await?;
        if job.status == TranscriptionStatus::Failed {
            let reason = self.failure_reason(&job).await;
            return Err(PipelineError::TranscriptionFailed {
                job: job.name,
                reason,
            });
        }

        let retry = self.settings.retry;
        let transcriber = &self.transcriber;
        let job_ref = &job;
        let original = retry
            .run("fetch_transcript", move || transcriber.fetch_text(job_ref))
            .await
            .map_err(PipelineError::Transcription)?;
        if original.trim().is_empty() {
            return Err(PipelineError::NoTranscript { job: job.name });
        }
        tracing::debug!(
            stage = %PipelineStage::Transcribed,
            chars = original.len(),
            "Pipeline stage reached"
        );

        let translator = &self.translator;
        let original_ref = original.as_str();
        let translated = retry
            .run("translate", move || {
                translator.translate(original_ref, source, target)
            })
            .await
            .map_err(PipelineError::Translation)?;
        tracing::debug!(
            stage = %PipelineStage::Translated,
            chars = translated.len(),
            "Pipeline stage reached"
        );

        let voice = self.voices.resolve(target);
        let synthesizer = &self.synthesizer;
        let translated_ref = translated.as_str();
        let audio = retry
            .run("synthesize", move || {
                synthesizer.synthesize(translated_ref, voice)
            })
            .await
            .map_err(PipelineError::Synthesis)?;
        tracing::debug!(
            stage = %PipelineStage::Synthesized,
            voice,
            bytes = audio.len(),
            "Pipeline stage reached"
        );

        Ok(TranslationResult::new(audio, original, translated))
    }

    async fn wait_for_terminal(
        &self,
        job: &TranscriptionJob,
        cancel: &mut CancellationSignal,
    ) -> Result<TranscriptionStatus, PipelineError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(PipelineError::Cancelled {
                job: job.name.clone(),
            }),
            outcome = tokio::time::timeout(
                self.settings.max_wait,
                self.poll_until_terminal(job),
            ) => outcome.map_err(|_| PipelineError::TranscriptionTimeout {
                job: job.name.clone(),
                waited: self.settings.max_wait,
            })?,
        }
    }

    async fn poll_until_terminal(
        &self,
        job: &TranscriptionJob,
    ) -> Result<TranscriptionStatus, PipelineError> {
        let mut polls: u32 = 0;
        loop {
            polls += 1;
            let status = self
                .transcriber
                .status(job)
                .await
                .map_err(PipelineError::Transcription)?;
            tracing::trace!(polls, status = %status, "Polled transcription job");

            if status.is_terminal() {
                tracing::debug!(polls, status = %status, "Transcription job finished");
                return Ok(status);
            }
            tokio::time::sleep(self.settings.poll_interval).await;
        }
    }

    async fn failure_reason(&self, job: &TranscriptionJob) -> Option<String> {
        match self.transcriber.failure_reason(job).await {
            Ok(reason) => reason,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read transcription failure reason");
                None
            }
        }
    }

    async fn cleanup(&self, locator: &BlobLocator) -> Option<CleanupWarning> {
        match self.blob_store.delete(locator).await {
            Ok(()) => {
                tracing::debug!(locator = %locator, "Deleted uploaded audio");
                None
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    locator = %locator,
                    "Failed to delete uploaded audio"
                );
                Some(CleanupWarning {
                    locator: locator.to_string(),
                    message: e.to_string(),
                })
            }
        }
    }
}

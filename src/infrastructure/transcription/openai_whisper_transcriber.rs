use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::multipart;
use tokio::sync::Mutex;

use crate::application::ports::{BlobStore, Transcriber, TranscriberError};
use crate::domain::{BlobLocator, LanguageTag, TranscriptionJob, TranscriptionStatus};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "whisper-1";
pub const DEFAULT_JOB_RETENTION: Duration = Duration::from_secs(600);

enum JobState {
    Running,
    Succeeded(String),
    Failed(String),
}

struct JobEntry {
    state: JobState,
    updated_at: Instant,
}

/// Runs each transcription job against an OpenAI-compatible Whisper
/// endpoint on a background task.
///
/// The endpoint itself is synchronous; the job table gives callers the
/// submit / poll / fetch cycle of a batch transcription service. Finished
/// jobs nobody fetched are dropped after the retention period.
pub struct OpenAiWhisperTranscriber {
    client: WhisperClient,
    blob_store: Arc<dyn BlobStore>,
    jobs: Arc<Mutex<HashMap<String, JobEntry>>>,
    retention: Duration,
}

impl OpenAiWhisperTranscriber {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            client: WhisperClient {
                client: reqwest::Client::new(),
                api_key,
                base_url: base_url
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            },
            blob_store,
            jobs: Arc::new(Mutex::new(HashMap::new())),
            retention: DEFAULT_JOB_RETENTION,
        }
    }

    pub fn with_retention(mut self, retention: Duration) -> Self {
        self.retention = retention;
        self
    }
}

#[async_trait]
impl Transcriber for OpenAiWhisperTranscriber {
    async fn start(
        &self,
        job_name: &str,
        locator: &BlobLocator,
        source: &LanguageTag,
    ) -> Result<TranscriptionJob, TranscriberError> {
        {
            let mut jobs = self.jobs.lock().await;
            let retention = self.retention;
            jobs.retain(|_, entry| {
                matches!(entry.state, JobState::Running) || entry.updated_at.elapsed() < retention
            });
            if jobs.contains_key(job_name) {
                return Err(TranscriberError::SubmitFailed(format!(
                    "job {} already exists",
                    job_name
                )));
            }
            jobs.insert(
                job_name.to_string(),
                JobEntry {
                    state: JobState::Running,
                    updated_at: Instant::now(),
                },
            );
        }

        let client = self.client.clone();
        let blob_store = Arc::clone(&self.blob_store);
        let jobs = Arc::clone(&self.jobs);
        let name = job_name.to_string();
        let task_locator = locator.clone();
        let language = source.primary_subtag().to_string();

        tokio::spawn(async move {
            let outcome = match blob_store.fetch(&task_locator).await {
                Ok(audio) => client.transcribe(audio, &language).await,
                Err(e) => Err(TranscriberError::SubmitFailed(format!(
                    "reading {}: {}",
                    task_locator, e
                ))),
            };
            let state = match outcome {
                Ok(text) => JobState::Succeeded(text),
                Err(e) => {
                    tracing::warn!(job = %name, error = %e, "Whisper transcription job failed");
                    JobState::Failed(e.to_string())
                }
            };
            jobs.lock().await.insert(
                name,
                JobEntry {
                    state,
                    updated_at: Instant::now(),
                },
            );
        });

        tracing::debug!(job = %job_name, locator = %locator, "Submitted Whisper transcription job");
        Ok(TranscriptionJob::new(job_name, locator.clone(), source.clone()))
    }

    async fn status(
        &self,
        job: &TranscriptionJob,
    ) -> Result<TranscriptionStatus, TranscriberError> {
        let jobs = self.jobs.lock().await;
        let entry = jobs
            .get(&job.name)
            .ok_or_else(|| TranscriberError::JobNotFound(job.name.clone()))?;

        Ok(match &entry.state {
            JobState::Running => TranscriptionStatus::InProgress,
            JobState::Succeeded(_) => TranscriptionStatus::Completed,
            JobState::Failed(_) => TranscriptionStatus::Failed,
        })
    }

    async fn fetch_text(&self, job: &TranscriptionJob) -> Result<String, TranscriberError> {
        let mut jobs = self.jobs.lock().await;
        let entry = jobs
            .remove(&job.name)
            .ok_or_else(|| TranscriberError::JobNotFound(job.name.clone()))?;

        match entry.state {
            JobState::Succeeded(text) => Ok(text),
            JobState::Running => {
                jobs.insert(
                    job.name.clone(),
                    JobEntry {
                        state: JobState::Running,
                        updated_at: entry.updated_at,
                    },
                );
                Err(TranscriberError::ResultUnavailable(format!(
                    "job {} still running",
                    job.name
                )))
            }
            JobState::Failed(reason) => Err(TranscriberError::ResultUnavailable(reason)),
        }
    }

    async fn failure_reason(
        &self,
        job: &TranscriptionJob,
    ) -> Result<Option<String>, TranscriberError> {
        let mut jobs = self.jobs.lock().await;
        match jobs.remove(&job.name) {
            Some(JobEntry {
                state: JobState::Failed(reason),
                ..
            }) => Ok(Some(reason)),
            Some(entry) => {
                jobs.insert(job.name.clone(), entry);
                Ok(None)
            }
            None => Err(TranscriberError::JobNotFound(job.name.clone())),
        }
    }
}

#[derive(Clone)]
struct WhisperClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl WhisperClient {
    async fn transcribe(&self, audio: Vec<u8>, language: &str) -> Result<String, TranscriberError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio)
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscriberError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", language.to_string())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(model = %self.model, language, "Sending audio to Whisper API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriberError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriberError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriberError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::info!(chars = transcript.len(), "Whisper transcription completed");

        Ok(transcript.trim().to_string())
    }
}

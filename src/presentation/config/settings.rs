use std::collections::HashMap;
use std::time::Duration;

use config::Environment as EnvironmentSource;
use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{PipelineSettings, RetryPolicy};
use crate::domain::VoiceProfile;

use super::Environment;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
    pub synthesis: SynthesisSettings,
    pub pipeline: PipelineConfig,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.toml`, `appsettings.<env>.toml` and `APP_*`
    /// environment variables (`APP_SERVER__PORT=8080`), later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(File::with_name(&environment.overlay_name()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_audio_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            max_audio_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Memory,
    S3,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub endpoint: Option<String>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageProviderSetting::Local,
            local_path: "./data/audio".to_string(),
            bucket: None,
            region: None,
            endpoint: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderSetting {
    #[serde(rename = "openai")]
    OpenAi,
    Scaffold,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: ProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub job_retention_secs: u64,
    pub scaffold_text: String,
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            provider: ProviderSetting::Scaffold,
            api_key: None,
            base_url: None,
            model: "whisper-1".to_string(),
            job_retention_secs: 600,
            scaffold_text: "hello world".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub provider: ProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            provider: ProviderSetting::Scaffold,
            api_key: None,
            base_url: None,
            model: "gpt-4o-mini".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    pub provider: ProviderSetting,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub default_voice: Option<String>,
    pub voices: HashMap<String, String>,
}

impl SynthesisSettings {
    /// Voice table for the configured provider, with file overrides applied.
    pub fn voice_profile(&self) -> VoiceProfile {
        let base = match self.provider {
            ProviderSetting::OpenAi => VoiceProfile::openai(),
            ProviderSetting::Scaffold => VoiceProfile::default(),
        };
        base.with_overrides(&self.voices, self.default_voice.as_deref())
    }
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            provider: ProviderSetting::Scaffold,
            api_key: None,
            base_url: None,
            model: "tts-1".to_string(),
            default_voice: None,
            voices: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub poll_interval_ms: u64,
    pub max_wait_secs: u64,
    pub retry_max_attempts: u32,
    pub retry_base_delay_ms: u64,
    pub retry_max_delay_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            max_wait_secs: 300,
            retry_max_attempts: 1,
            retry_base_delay_ms: 500,
            retry_max_delay_ms: 10_000,
        }
    }
}

impl PipelineConfig {
    pub fn to_pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            max_wait: Duration::from_secs(self.max_wait_secs),
            retry: RetryPolicy::new(
                self.retry_max_attempts,
                Duration::from_millis(self.retry_base_delay_ms),
                Duration::from_millis(self.retry_max_delay_ms),
            ),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info,tolk=debug,tower_http=debug".to_string(),
            json: false,
        }
    }
}

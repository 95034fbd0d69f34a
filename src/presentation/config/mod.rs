mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    LoggingSettings, PipelineConfig, ProviderSetting, ServerSettings, Settings,
    StorageProviderSetting, StorageSettings, SynthesisSettings, TranscriptionSettings,
    TranslationSettings,
};

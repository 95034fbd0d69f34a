mod blob_locator;
mod language;
mod pipeline_stage;
mod request_stamp;
mod transcription_job;
mod transcription_status;
mod translation_request;
mod translation_result;
mod voice_profile;

pub use blob_locator::BlobLocator;
pub use language::{LanguageTag, SUPPORTED_LANGUAGES, SupportedLanguage};
pub use pipeline_stage::PipelineStage;
pub use request_stamp::RequestStamp;
pub use transcription_job::TranscriptionJob;
pub use transcription_status::TranscriptionStatus;
pub use translation_request::TranslationRequest;
pub use translation_result::{CleanupWarning, TranslationResult};
pub use voice_profile::{DEFAULT_VOICE, OPENAI_DEFAULT_VOICE, VoiceProfile};

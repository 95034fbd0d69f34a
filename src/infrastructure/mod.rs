pub mod observability;
pub mod storage;
pub mod synthesis;
pub mod transcription;
pub mod translation;

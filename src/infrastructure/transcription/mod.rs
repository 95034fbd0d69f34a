mod openai_whisper_transcriber;
mod scaffold_transcriber;
mod transcriber_factory;

pub use openai_whisper_transcriber::OpenAiWhisperTranscriber;
pub use scaffold_transcriber::ScaffoldTranscriber;
pub use transcriber_factory::TranscriberFactory;

mod openai_speech_synthesizer;
mod scaffold_synthesizer;
mod synthesizer_factory;

pub use openai_speech_synthesizer::OpenAiSpeechSynthesizer;
pub use scaffold_synthesizer::ScaffoldSynthesizer;
pub use synthesizer_factory::SynthesizerFactory;

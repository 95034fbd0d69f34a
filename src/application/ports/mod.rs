mod blob_store;
mod synthesizer;
mod transcriber;
mod translator;

pub use blob_store::{BlobStore, BlobStoreError};
pub use synthesizer::{Synthesizer, SynthesizerError};
pub use transcriber::{Transcriber, TranscriberError};
pub use translator::{Translator, TranslatorError};

use bytes::Bytes;

/// One inbound clip plus the language pair it should be relayed across.
///
/// Language codes are kept as received; normalization happens in the
/// pipeline.
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    audio: Bytes,
    source: String,
    target: String,
}

impl TranslationRequest {
    pub fn new(
        audio: impl Into<Bytes>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            audio: audio.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn audio(&self) -> &Bytes {
        &self.audio
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

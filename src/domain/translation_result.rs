use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub audio: Vec<u8>,
    pub original_text: String,
    pub translated_text: String,
    pub cleanup_warning: Option<CleanupWarning>,
}

impl TranslationResult {
    pub fn new(audio: Vec<u8>, original_text: String, translated_text: String) -> Self {
        Self {
            audio,
            original_text,
            translated_text,
            cleanup_warning: None,
        }
    }
}

/// Deleting the uploaded blob failed. Never fails the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupWarning {
    pub locator: String,
    pub message: String,
}

impl fmt::Display for CleanupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to delete {}: {}", self.locator, self.message)
    }
}

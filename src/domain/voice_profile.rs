use std::collections::HashMap;
use std::sync::LazyLock;

use super::{LanguageTag, SUPPORTED_LANGUAGES};

pub const DEFAULT_VOICE: &str = "Joanna";
pub const OPENAI_DEFAULT_VOICE: &str = "alloy";

static BUILT_IN_VOICES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("en-US", "Joanna"),
        ("es-ES", "Penelope"),
        ("fr-FR", "Lea"),
        ("zh-CN", "Zhiyu"),
        ("ja-JP", "Mizuki"),
        ("de-DE", "Vicki"),
    ])
});

static OPENAI_VOICES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("en-US", "alloy"),
        ("es-ES", "nova"),
        ("fr-FR", "shimmer"),
        ("zh-CN", "echo"),
        ("ja-JP", "fable"),
        ("de-DE", "onyx"),
    ])
});

/// Maps a canonical target language to the voice used for synthesis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceProfile {
    voices: HashMap<String, String>,
    default_voice: String,
}

impl VoiceProfile {
    pub fn new(voices: HashMap<String, String>, default_voice: impl Into<String>) -> Self {
        Self {
            voices,
            default_voice: default_voice.into(),
        }
    }

    /// Voices the OpenAI speech endpoint accepts. The default table uses
    /// Polly names, which that endpoint rejects.
    pub fn openai() -> Self {
        Self::new(owned(&OPENAI_VOICES), OPENAI_DEFAULT_VOICE)
    }

    /// Layers `overrides` over this table.
    pub fn with_overrides(
        mut self,
        overrides: &HashMap<String, String>,
        default_voice: Option<&str>,
    ) -> Self {
        for (tag, voice) in overrides {
            self.voices.insert(canonical_key(tag), voice.clone());
        }
        if let Some(voice) = default_voice.filter(|v| !v.trim().is_empty()) {
            self.default_voice = voice.to_string();
        }
        self
    }

    pub fn resolve(&self, target: &LanguageTag) -> &str {
        self.voices
            .get(target.as_str())
            .map(String::as_str)
            .unwrap_or(&self.default_voice)
    }

    pub fn default_voice(&self) -> &str {
        &self.default_voice
    }
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self::new(owned(&BUILT_IN_VOICES), DEFAULT_VOICE)
    }
}

fn owned(table: &HashMap<&'static str, &'static str>) -> HashMap<String, String> {
    table
        .iter()
        .map(|(tag, voice)| (tag.to_string(), voice.to_string()))
        .collect()
}

/// Override keys may arrive lowercased or as short codes from config files.
fn canonical_key(key: &str) -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|lang| lang.canonical.eq_ignore_ascii_case(key.trim()))
        .map(|lang| lang.canonical.to_string())
        .unwrap_or_else(|| LanguageTag::normalize(key).as_str().to_string())
}

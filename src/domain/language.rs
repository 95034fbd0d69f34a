use std::fmt;

/// A language the relay advertises, keyed by its short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedLanguage {
    pub display_name: &'static str,
    pub short_code: &'static str,
    pub canonical: &'static str,
}

pub const SUPPORTED_LANGUAGES: &[SupportedLanguage] = &[
    SupportedLanguage {
        display_name: "English",
        short_code: "en",
        canonical: "en-US",
    },
    SupportedLanguage {
        display_name: "Spanish",
        short_code: "es",
        canonical: "es-ES",
    },
    SupportedLanguage {
        display_name: "French",
        short_code: "fr",
        canonical: "fr-FR",
    },
    SupportedLanguage {
        display_name: "Chinese",
        short_code: "zh",
        canonical: "zh-CN",
    },
    SupportedLanguage {
        display_name: "Japanese",
        short_code: "ja",
        canonical: "ja-JP",
    },
    SupportedLanguage {
        display_name: "German",
        short_code: "de",
        canonical: "de-DE",
    },
];

/// Region-qualified language code handed to every downstream collaborator.
///
/// Built through [`LanguageTag::normalize`], which never fails: codes missing
/// from [`SUPPORTED_LANGUAGES`] are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn normalize(code: &str) -> Self {
        let trimmed = code.trim();
        let canonical = SUPPORTED_LANGUAGES
            .iter()
            .find(|lang| lang.short_code.eq_ignore_ascii_case(trimmed))
            .map(|lang| lang.canonical.to_string());

        Self(canonical.unwrap_or_else(|| code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language part of the tag, `"en"` for `"en-US"`.
    pub fn primary_subtag(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(&self.0)
    }

    pub fn is_supported(&self) -> bool {
        SUPPORTED_LANGUAGES
            .iter()
            .any(|lang| lang.canonical == self.0)
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

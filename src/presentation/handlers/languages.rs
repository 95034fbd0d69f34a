use std::collections::BTreeMap;

use axum::Json;

use crate::domain::SUPPORTED_LANGUAGES;

pub type LanguageMap = BTreeMap<&'static str, &'static str>;

/// Display name to canonical tag, e.g. `"Spanish": "es-ES"`.
pub fn language_map() -> LanguageMap {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| (lang.display_name, lang.canonical))
        .collect()
}

pub async fn languages_handler() -> Json<LanguageMap> {
    Json(language_map())
}

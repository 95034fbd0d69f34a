mod error;
mod health;
mod languages;
mod upload;

pub use error::{ApiError, ErrorResponse, status_for};
pub use health::{SERVICE_BANNER, health_handler, index_handler};
pub use languages::{language_map, languages_handler};
pub use upload::{
    ORIGINAL_HEADER, TRANSLATION_HEADER, UploadQuery, header_value_for_text, upload_handler,
    upload_info_handler,
};

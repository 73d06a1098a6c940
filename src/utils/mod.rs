pub mod error;
pub mod format;

pub use error::{ConfigError, ExtractionError, OcrError};
pub use format::{format_uid, strip_uid};

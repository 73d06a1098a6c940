use std::path::PathBuf;
use thiserror::Error;

/// Failures of the OCR collaborator.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("OCR engine initialization failed: {0}")]
    EngineInit(String),

    #[error("Failed to load image: {0}")]
    ImageLoad(String),

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("OCR task did not complete: {0}")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Terminal failures of an extraction request.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Uploaded images do not look like an Aadhaar card")]
    InvalidDocumentContent,

    #[error("Aadhaar number is not valid")]
    InvalidIdentifier,

    #[error("Aadhaar number on the front does not match the back")]
    IdentifierMismatch,

    #[error("Text extraction failed: {0}")]
    UpstreamExtractionFailure(#[from] OcrError),

    /// Only ever logged; never returned from the pipeline.
    #[error("Failed to release {}: {source}", .path.display())]
    ResourceCleanupFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExtractionError {
    /// HTTP status an API boundary should answer with.
    pub fn status_code(&self) -> u16 {
        if self.is_user_facing() {
            400
        } else {
            500
        }
    }

    /// Whether the failure is caused by the submitted card rather than the system.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ExtractionError::InvalidDocumentContent
                | ExtractionError::InvalidIdentifier
                | ExtractionError::IdentifierMismatch
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_failures_are_bad_requests() {
        assert_eq!(ExtractionError::InvalidDocumentContent.status_code(), 400);
        assert_eq!(ExtractionError::InvalidIdentifier.status_code(), 400);
        assert_eq!(ExtractionError::IdentifierMismatch.status_code(), 400);
    }

    #[test]
    fn test_upstream_failure_is_server_error() {
        let err: ExtractionError = OcrError::Recognition("quota exceeded".to_string()).into();
        assert!(!err.is_user_facing());
        assert_eq!(err.status_code(), 500);
        assert_eq!(
            err.to_string(),
            "Text extraction failed: Text recognition failed: quota exceeded"
        );
    }
}

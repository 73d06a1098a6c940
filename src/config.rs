use crate::utils::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Engine settings. Every field has a default, so a config file may set any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Tesseract language string, e.g. `eng` or `eng+hin`
    pub language: String,
    /// Directory holding `.traineddata` files; Tesseract's default when unset
    pub tessdata_dir: Option<PathBuf>,
    /// Grayscale and contrast-boost photos before OCR
    pub preprocess: bool,
    /// Delete the input photos once a request finishes
    pub remove_inputs: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            language: "eng".to_string(),
            tessdata_dir: None,
            preprocess: true,
            remove_inputs: false,
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "language": "eng+hin", "remove_inputs": true }}"#).unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(config.language, "eng+hin");
        assert!(config.remove_inputs);
        assert!(config.preprocess);
        assert_eq!(config.tessdata_dir, None);
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file(Path::new("/nonexistent/aadhaar.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "language = eng").unwrap();

        let err = EngineConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

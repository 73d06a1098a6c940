use crate::config::EngineConfig;
use crate::processing::image::ImageProcessor;
use crate::utils::OcrError;
use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};
use tesseract::Tesseract;

/// Turns a card photo into one block of text with embedded line breaks.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn extract_text(&self, image: &Path) -> Result<String, OcrError>;
}

/// OCR backed by a local Tesseract install.
pub struct TesseractOcr {
    config: EngineConfig,
}

impl TesseractOcr {
    pub fn new(config: EngineConfig) -> Self {
        TesseractOcr { config }
    }

    fn recognize(config: &EngineConfig, image: &Path) -> Result<String, OcrError> {
        // Keep the preprocessed copy alive until Tesseract has read it
        let prepared = if config.preprocess {
            Some(ImageProcessor::prepare_for_ocr(image)?)
        } else {
            None
        };
        let path = prepared.as_ref().map(|file| file.path()).unwrap_or(image);

        let path_str = path
            .to_str()
            .ok_or_else(|| OcrError::ImageLoad(format!("Path is not valid UTF-8: {}", path.display())))?;
        let datapath = config.tessdata_dir.as_deref().and_then(Path::to_str);

        let mut tess = Tesseract::new(datapath, Some(config.language.as_str()))
            .map_err(|e| OcrError::EngineInit(e.to_string()))?
            .set_image(path_str)
            .map_err(|e| OcrError::ImageLoad(format!("{}: {}", image.display(), e)))?;

        let text = tess
            .get_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))?;

        debug!("OCR read {} characters from {}", text.len(), image.display());
        Ok(text)
    }
}

#[async_trait]
impl OcrEngine for TesseractOcr {
    async fn extract_text(&self, image: &Path) -> Result<String, OcrError> {
        let config = self.config.clone();
        let image: PathBuf = image.to_path_buf();

        tokio::task::spawn_blocking(move || Self::recognize(&config, &image))
            .await
            .map_err(|e| OcrError::TaskFailed(e.to_string()))?
    }
}

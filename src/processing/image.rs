use crate::utils::OcrError;
use image::{GrayImage, ImageFormat};
use std::path::Path;
use tempfile::NamedTempFile;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Write a grayscale, contrast-boosted copy of the photo to a temporary PNG.
    /// The file is removed when the returned handle is dropped.
    pub fn prepare_for_ocr(image_path: &Path) -> Result<NamedTempFile, OcrError> {
        let img = image::open(image_path)
            .map_err(|e| OcrError::ImageLoad(format!("Failed to open {}: {}", image_path.display(), e)))?;

        let enhanced = Self::enhance_contrast(&img.to_luma8());

        let temp_file = tempfile::Builder::new().suffix(".png").tempfile()?;
        enhanced
            .save_with_format(temp_file.path(), ImageFormat::Png)
            .map_err(|e| OcrError::ImageLoad(format!("Failed to write preprocessed image: {}", e)))?;

        Ok(temp_file)
    }

    fn enhance_contrast(img: &GrayImage) -> GrayImage {
        // Push pixels away from mid-gray to sharpen printed text
        let mut enhanced = img.clone();
        for pixel in enhanced.pixels_mut() {
            let value = pixel[0];
            pixel[0] = if value < 128 {
                value.saturating_sub(20)
            } else {
                value.saturating_add(20)
            };
        }
        enhanced
    }
}

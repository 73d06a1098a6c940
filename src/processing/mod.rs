pub mod cleanup;
pub mod extractors;
pub mod image;
pub mod ocr;
pub mod patterns;

pub use cleanup::{ReleaseGuard, RemoveFiles, ResourceCleanup, RetainFiles};
pub use extractors::FieldExtractor;
pub use self::image::ImageProcessor;
pub use ocr::{OcrEngine, TesseractOcr};

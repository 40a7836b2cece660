use std::path::PathBuf;

use image::{GrayImage, ImageFormat};
use tracing::debug;

use crate::engine::{OcrEngine, OcrError, PageSegMode};

use super::command;

/// OCR backed by the `tesseract` command line program.
///
/// Each call writes the crop to a temporary PNG and runs one tesseract
/// process on it. The temporary file is removed when the call returns.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    binary: PathBuf,
    lang: String,
    mode: PageSegMode,
}

impl TesseractEngine {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            lang: "eng".to_string(),
            mode: PageSegMode::SingleBlock,
        }
    }

    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_page_seg_mode(mut self, mode: PageSegMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn page_seg_mode(&self) -> PageSegMode {
        self.mode
    }

    /// Whether the configured binary can be started.
    pub fn is_available(&self) -> bool {
        command::version(&self.binary).is_ok()
    }

    pub fn version(&self) -> Result<String, OcrError> {
        command::version(&self.binary)
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(OcrError::InvalidInput(format!(
                "empty crop {}x{}",
                image.width(),
                image.height()
            )));
        }

        let crop = tempfile::Builder::new()
            .prefix("letterer-crop-")
            .suffix(".png")
            .tempfile()?;
        image.save_with_format(crop.path(), ImageFormat::Png)?;

        debug!(
            width = image.width(),
            height = image.height(),
            psm = self.mode.as_arg(),
            "running tesseract on crop"
        );
        command::recognize_file(&self.binary, crop.path(), &self.lang, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_builder_defaults() {
        let engine = TesseractEngine::new();
        assert_eq!(engine.lang(), "eng");
        assert_eq!(engine.page_seg_mode(), PageSegMode::SingleBlock);

        let engine = engine
            .with_lang("jpn")
            .with_page_seg_mode(PageSegMode::SingleBlock);
        assert_eq!(engine.lang(), "jpn");
        assert_eq!(engine.page_seg_mode().as_arg(), 6);
    }

    #[test]
    fn test_empty_crop_is_rejected() {
        let engine = TesseractEngine::new();
        let err = engine.recognize(&GrayImage::new(0, 4)).unwrap_err();
        assert!(matches!(err, OcrError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_binary_reports_unavailable() {
        let engine = TesseractEngine::new().with_binary("/nonexistent/letterer-tesseract");
        assert!(!engine.is_available());
        let img = GrayImage::from_pixel(8, 8, Luma([255u8]));
        let err = engine.recognize(&img).unwrap_err();
        assert!(matches!(err, OcrError::Unavailable(_)), "got {err:?}");
    }

    #[test]
    fn test_blank_crop_yields_no_text() {
        let engine = TesseractEngine::new();
        if !engine.is_available() {
            eprintln!("skipping test: tesseract not installed");
            return;
        }
        let img = GrayImage::from_pixel(120, 60, Luma([255u8]));
        let text = engine.recognize(&img).unwrap();
        assert!(text.trim().is_empty(), "unexpected text: {text:?}");
    }
}

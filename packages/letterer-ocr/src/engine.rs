use image::GrayImage;
use thiserror::Error;

/// Tesseract page segmentation mode passed as `--psm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSegMode {
    /// Assume a single uniform block of text (`--psm 6`).
    #[default]
    SingleBlock,
}

impl PageSegMode {
    pub fn as_arg(self) -> u8 {
        match self {
            PageSegMode::SingleBlock => 6,
        }
    }
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("ocr engine unavailable: {0}")]
    Unavailable(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("engine error: {0}")]
    EngineError(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image for ocr: {0}")]
    Encode(#[from] image::ImageError),
}

/// Recognizes the text inside one grayscale crop.
///
/// Implementations return the raw recognizer output; callers trim it.
pub trait OcrEngine {
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError>;
}

impl<E: OcrEngine + ?Sized> OcrEngine for &E {
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        (**self).recognize(image)
    }
}

impl<E: OcrEngine + ?Sized> OcrEngine for Box<E> {
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        (**self).recognize(image)
    }
}

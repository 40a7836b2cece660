use std::path::PathBuf;

use letterer_ocr::OcrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load image {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("ocr failed: {0}")]
    Ocr(#[from] OcrError),
    #[error("failed to save image {}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

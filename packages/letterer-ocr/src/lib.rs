pub mod engine;
pub mod region;
pub mod tesseract;

pub use engine::{OcrEngine, OcrError, PageSegMode};
pub use region::{ExtractedEntry, Region};
pub use tesseract::TesseractEngine;

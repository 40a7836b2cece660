//! # letterer-rs
//!
//! Finds speech-balloon-like regions on a comic page, reads each one with
//! OCR, and letters replacement text over them.
//!
//! ## Features
//!
//! - **Region extraction**: fixed inverse threshold, outermost contour tracing and bounding boxes
//! - **OCR**: one Tesseract call per region, page segmentation mode 6, empty results dropped
//! - **Lettering**: replacement strings paired with regions by position and drawn 5px inside each box
//! - **Font fallback**: a missing TrueType font silently degrades to built-in bitmap glyphs
//!
//! ## Quick Start
//!
//! ```ignore
//! use letterer_rs::prelude::*;
//!
//! let engine = TesseractEngine::new();
//! let extraction = extract("comic_sample.jpg", &engine, &ExtractorConfig::default())?;
//! for entry in &extraction.entries {
//!     println!("{:?}: {}", entry.region, entry.text);
//! }
//!
//! let config = RenderConfig { display: false, ..RenderConfig::default() };
//! render("comic_sample.jpg", &["Hey Nihu!"], &engine, &ExtractorConfig::default(), &config)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod font;
pub mod overlay;
pub mod viewer;

// Re-export commonly used types at the root level
pub use config::{ExtractorConfig, RenderConfig};
pub use error::{Error, Result};
pub use extractor::{extract, extract_from_image, find_regions, load_image, Extraction};
pub use font::OverlayFont;
pub use letterer_ocr::{ExtractedEntry, OcrEngine, OcrError, PageSegMode, Region, TesseractEngine};
pub use overlay::{apply_placements, plan_placements, render, render_image, save_png, Placement};

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```ignore
/// use letterer_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        apply_placements, extract, extract_from_image, find_regions, load_image, plan_placements,
        render, render_image, save_png, Error, ExtractedEntry, Extraction, ExtractorConfig,
        OcrEngine, OcrError, OverlayFont, PageSegMode, Placement, Region, RenderConfig,
        TesseractEngine,
    };
}

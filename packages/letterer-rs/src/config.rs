//! Fixed parameters of the extraction and lettering passes.
use std::path::PathBuf;

use letterer_ocr::PageSegMode;

/// Grayscale values above this are background; everything else is ink.
pub const THRESHOLD_CUTOFF: u8 = 200;

/// Every crop is read as one uniform block of text.
pub const PAGE_SEG_MODE: PageSegMode = PageSegMode::SingleBlock;

/// Font size, in pixels, used for replacement text.
pub const FONT_SIZE: f32 = 20.0;

/// Replacement text is drawn this many pixels right of and below a region's corner.
pub const TEXT_OFFSET: (u32, u32) = (5, 5);

pub const DEFAULT_INPUT: &str = "comic_sample.jpg";
pub const DEFAULT_OUTPUT: &str = "updated_comic.png";

#[cfg(target_os = "macos")]
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Supplemental/Arial.ttf";

#[cfg(target_os = "windows")]
pub const DEFAULT_FONT_PATH: &str = r"C:\Windows\Fonts\arial.ttf";

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Settings for the region extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractorConfig {
    pub threshold: u8,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            threshold: THRESHOLD_CUTOFF,
        }
    }
}

/// Settings for the lettering pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub font_path: PathBuf,
    pub font_size: f32,
    pub offset: (u32, u32),
    /// Paint each region white before drawing the replacement.
    pub mask_regions: bool,
    pub output_path: PathBuf,
    /// Open the written file in an image viewer.
    pub display: bool,
    /// Viewer program to use instead of the platform launcher.
    pub viewer: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            font_size: FONT_SIZE,
            offset: TEXT_OFFSET,
            mask_regions: false,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            display: true,
            viewer: None,
        }
    }
}

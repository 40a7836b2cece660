//! Finds balloon-like regions on a page and reads the text inside each one.
//!
//! The page is binarized with a fixed inverse threshold, the outermost
//! contours of the ink are traced, and every contour's bounding box is
//! cropped out of the grayscale page and handed to the OCR engine.
use std::path::Path;

use image::{imageops, DynamicImage, GrayImage};
use imageproc::contours::{find_contours, BorderType};
use imageproc::contrast::{threshold, ThresholdType};
use imageproc::point::Point;
use letterer_ocr::{ExtractedEntry, OcrEngine, Region};
use tracing::{debug, info};

use crate::config::ExtractorConfig;
use crate::error::{Error, Result};

/// Result of one extraction run: the recognized entries plus the decoded page.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub entries: Vec<ExtractedEntry>,
    pub image: DynamicImage,
}

impl Extraction {
    pub fn boxes(&self) -> Vec<Region> {
        self.entries.iter().map(|e| e.region).collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }
}

/// Decodes an image file.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).map_err(|source| Error::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads `path` and extracts every region with non-empty text.
pub fn extract<P, E>(path: P, engine: &E, config: &ExtractorConfig) -> Result<Extraction>
where
    P: AsRef<Path>,
    E: OcrEngine + ?Sized,
{
    let image = load_image(path.as_ref())?;
    info!(
        path = %path.as_ref().display(),
        width = image.width(),
        height = image.height(),
        "loaded page"
    );
    let entries = extract_from_image(&image, engine, config)?;
    Ok(Extraction { entries, image })
}

/// Extracts regions and their text from an already decoded page.
///
/// Entries come back in contour order. Regions whose trimmed OCR output is
/// empty are dropped.
pub fn extract_from_image<E>(
    image: &DynamicImage,
    engine: &E,
    config: &ExtractorConfig,
) -> Result<Vec<ExtractedEntry>>
where
    E: OcrEngine + ?Sized,
{
    let gray = image.to_luma8();
    let regions = find_regions(&gray, config.threshold);
    info!(candidates = regions.len(), "found candidate regions");

    let mut entries = Vec::with_capacity(regions.len());
    for region in regions {
        debug_assert!(region.fits_within(gray.width(), gray.height()));
        let crop = imageops::crop_imm(&gray, region.x, region.y, region.width, region.height)
            .to_image();
        let raw = engine.recognize(&crop)?;
        let text = raw.trim();
        if text.is_empty() {
            debug!(?region, "dropping region without text");
            continue;
        }
        debug!(?region, text, "recognized region");
        entries.push(ExtractedEntry {
            region,
            text: text.to_string(),
        });
    }

    info!(entries = entries.len(), "extraction finished");
    Ok(entries)
}

/// Bounding boxes of the outermost ink contours, in contour order.
pub fn find_regions(gray: &GrayImage, cutoff: u8) -> Vec<Region> {
    let mask = threshold_inverse(gray, cutoff);
    external_contours(&mask)
        .iter()
        .map(|contour| approximate_simple(contour))
        .filter_map(|contour| bounding_region(&contour))
        .collect()
}

/// Inverse binary threshold: values above `cutoff` become 0, the rest 255.
pub fn threshold_inverse(gray: &GrayImage, cutoff: u8) -> GrayImage {
    threshold(gray, cutoff, ThresholdType::BinaryInverted)
}

/// Outer borders that are not nested inside any hole.
pub fn external_contours(mask: &GrayImage) -> Vec<Vec<Point<u32>>> {
    find_contours::<u32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| c.points)
        .collect()
}

/// Simple chain approximation of a closed contour.
///
/// Points in the middle of a straight horizontal, vertical or diagonal run
/// are removed; only the points where the direction changes are kept.
pub fn approximate_simple(points: &[Point<u32>]) -> Vec<Point<u32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let step = |a: Point<u32>, b: Point<u32>| {
        (
            (i64::from(b.x) - i64::from(a.x)).signum(),
            (i64::from(b.y) - i64::from(a.y)).signum(),
        )
    };

    let kept: Vec<Point<u32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        points[..1].to_vec()
    } else {
        kept
    }
}

/// Axis-aligned bounding box of a contour, inclusive of its edge pixels.
pub fn bounding_region(points: &[Point<u32>]) -> Option<Region> {
    Region::enclosing(points.iter().map(|p| (p.x, p.y)))
}

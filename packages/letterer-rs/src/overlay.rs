//! Letters replacement text over extracted regions.
use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use letterer_ocr::{OcrEngine, Region};
use tracing::{debug, info};

use crate::config::{ExtractorConfig, RenderConfig};
use crate::error::{Error, Result};
use crate::extractor::{extract, load_image};
use crate::font::OverlayFont;
use crate::viewer;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// One planned draw: a replacement string and the region it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub region: Region,
    pub text: String,
}

/// Pixel coordinate as a drawing position, clamped to `i32::MAX`.
fn coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl Placement {
    /// Pen origin for the text, `offset` pixels inside the region's corner.
    pub fn origin(&self, offset: (u32, u32)) -> (i32, i32) {
        (
            coord(self.region.x.saturating_add(offset.0)),
            coord(self.region.y.saturating_add(offset.1)),
        )
    }
}

/// Pairs boxes with replacement texts by position.
///
/// Pairing stops at the shorter sequence; leftover boxes or texts are ignored.
pub fn plan_placements<S: AsRef<str>>(boxes: &[Region], texts: &[S]) -> Vec<Placement> {
    boxes
        .iter()
        .zip(texts)
        .map(|(region, text)| Placement {
            region: *region,
            text: text.as_ref().to_string(),
        })
        .collect()
}

/// Draws every placement onto `image` and returns how many were drawn.
pub fn apply_placements(
    image: &mut DynamicImage,
    placements: &[Placement],
    font: &OverlayFont,
    config: &RenderConfig,
) -> usize {
    for placement in placements {
        let region = placement.region;
        let on_page = region.x < image.width() && region.y < image.height();
        if config.mask_regions && on_page && region.width > 0 && region.height > 0 {
            let rect = Rect::at(coord(region.x), coord(region.y)).of_size(region.width, region.height);
            draw_filled_rect_mut(image, rect, PAPER);
        }
        let (x, y) = placement.origin(config.offset);
        debug!(?region, x, y, text = %placement.text, "lettering region");
        font.draw(image, x, y, INK, &placement.text);
    }
    placements.len()
}

/// Extracts regions from `path` and letters `texts` over a fresh decode of
/// the same file. Nothing is written to disk.
pub fn render_image<P, E, S>(
    path: P,
    texts: &[S],
    engine: &E,
    extractor: &ExtractorConfig,
    config: &RenderConfig,
) -> Result<DynamicImage>
where
    P: AsRef<Path>,
    E: OcrEngine + ?Sized,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let boxes = extract(path, engine, extractor)?.boxes();

    let mut image = load_image(path)?;
    let font = OverlayFont::load(&config.font_path, config.font_size);
    let placements = plan_placements(&boxes, texts);
    let drawn = apply_placements(&mut image, &placements, &font, config);
    info!(
        boxes = boxes.len(),
        texts = texts.len(),
        drawn,
        fallback_font = font.is_fallback(),
        "lettered page"
    );
    Ok(image)
}

/// Writes `image` as PNG, replacing any existing file.
pub fn save_png<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Save {
            path: path.to_path_buf(),
            source,
        })
}

/// Full lettering run: render, save to `config.output_path`, then show it.
///
/// Failing to show the page does not fail the run.
pub fn render<P, E, S>(
    path: P,
    texts: &[S],
    engine: &E,
    extractor: &ExtractorConfig,
    config: &RenderConfig,
) -> Result<DynamicImage>
where
    P: AsRef<Path>,
    E: OcrEngine + ?Sized,
    S: AsRef<str>,
{
    let image = render_image(path, texts, engine, extractor, config)?;
    save_png(&image, &config.output_path)?;
    info!(output = %config.output_path.display(), "saved lettered page");
    if config.display {
        viewer::present(&config.output_path, config.viewer.as_deref());
    }
    Ok(image)
}

//! Fonts used to letter replacement text.
//!
//! A TrueType face is preferred. When it cannot be read, drawing falls back
//! to the built-in 8x8 bitmap glyphs so a run never fails on a missing font.
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{DynamicImage, Rgba};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use tracing::debug;

const BITMAP_CELL: u32 = 8;
const LINE_SPACING: i32 = 4;

pub enum OverlayFont {
    TrueType { font: FontVec, scale: PxScale },
    Bitmap { scale: u32 },
}

impl std::fmt::Debug for OverlayFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayFont::TrueType { scale, .. } => f
                .debug_struct("TrueType")
                .field("scale", &scale.y)
                .finish_non_exhaustive(),
            OverlayFont::Bitmap { scale } => {
                f.debug_struct("Bitmap").field("scale", scale).finish()
            }
        }
    }
}

impl OverlayFont {
    /// Loads the TrueType font at `path`, falling back to the bitmap font.
    pub fn load<P: AsRef<Path>>(path: P, size: f32) -> Self {
        let path = path.as_ref();
        let font = std::fs::read(path)
            .map_err(|e| e.to_string())
            .and_then(|data| FontVec::try_from_vec(data).map_err(|e| e.to_string()));

        match font {
            Ok(font) => {
                debug!(path = %path.display(), size, "loaded truetype font");
                OverlayFont::TrueType {
                    font,
                    scale: PxScale::from(size),
                }
            }
            Err(reason) => {
                debug!(path = %path.display(), %reason, "falling back to built-in bitmap font");
                Self::builtin(size)
            }
        }
    }

    pub fn builtin(size: f32) -> Self {
        let scale = (size / BITMAP_CELL as f32).floor().max(1.0) as u32;
        OverlayFont::Bitmap { scale }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, OverlayFont::Bitmap { .. })
    }

    fn line_height(&self) -> i32 {
        match self {
            OverlayFont::TrueType { scale, .. } => scale.y.ceil() as i32 + LINE_SPACING,
            OverlayFont::Bitmap { scale } => (BITMAP_CELL * scale) as i32 + LINE_SPACING,
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`. Pixels outside the
    /// image are clipped. Embedded newlines start a new line.
    pub fn draw(&self, image: &mut DynamicImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
        let (width, height) = (coord(image.width()), coord(image.height()));
        let line_height = self.line_height();
        for (i, line) in text.lines().enumerate() {
            let line_y = y.saturating_add((i as i32).saturating_mul(line_height));
            // Lines run right and down from their origin.
            if x >= width || line_y >= height {
                continue;
            }
            match self {
                OverlayFont::TrueType { font, scale } => {
                    draw_text_mut(image, color, x, line_y, *scale, font, line);
                }
                OverlayFont::Bitmap { scale } => {
                    draw_bitmap_line(image, x, line_y, *scale, color, line);
                }
            }
        }
    }
}

fn coord(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn draw_bitmap_line(image: &mut DynamicImage, x: i32, y: i32, scale: u32, color: Rgba<u8>, line: &str) {
    let (width, height) = (coord(image.width()), coord(image.height()));
    let advance = (BITMAP_CELL * scale) as i32;
    for (i, ch) in line.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            continue;
        };
        let origin_x = x.saturating_add((i as i32).saturating_mul(advance));
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..BITMAP_CELL {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = origin_x.saturating_add((col * scale) as i32);
                let py = y.saturating_add(row as i32 * scale as i32);
                if px >= width || py >= height {
                    continue;
                }
                draw_filled_rect_mut(image, Rect::at(px, py).of_size(scale, scale), color);
            }
        }
    }
}

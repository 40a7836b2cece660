//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::path::Path;

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba};
use imageproc::drawing::draw_hollow_ellipse_mut;
use letterer_rs::{OcrEngine, OcrError, OverlayFont};

/// Stand-in for tesseract: every crop at least `min_side` pixels on both
/// sides reads as `text`, smaller crops read as blank.
pub struct StubEngine {
    pub text: &'static str,
    pub min_side: u32,
}

impl OcrEngine for StubEngine {
    fn recognize(&self, image: &GrayImage) -> Result<String, OcrError> {
        if image.width() >= self.min_side && image.height() >= self.min_side {
            Ok(format!("  {}\n", self.text))
        } else {
            Ok("\n".to_string())
        }
    }
}

pub fn blank_page(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([255, 255, 255])))
}

/// 200x100 white page with an oval balloon spanning roughly (10,10,80,40)
/// and the word "Hi" lettered inside it.
pub fn balloon_page() -> DynamicImage {
    let mut page = blank_page(200, 100);
    draw_hollow_ellipse_mut(&mut page, (50, 30), 40, 20, Rgba([0, 0, 0, 255]));
    OverlayFont::builtin(16.0).draw(&mut page, 36, 22, Rgba([0, 0, 0, 255]), "Hi");
    page
}

/// Page with a large balloon and a speck of noise too small to hold text.
pub fn balloon_with_speck() -> DynamicImage {
    let mut page = balloon_page();
    if let DynamicImage::ImageRgb8(rgb) = &mut page {
        rgb.put_pixel(150, 80, Rgb([0, 0, 0]));
        rgb.put_pixel(151, 80, Rgb([0, 0, 0]));
    }
    page
}

pub fn write_png(image: &DynamicImage, path: &Path) {
    image
        .save_with_format(path, image::ImageFormat::Png)
        .expect("failed to write fixture");
}

pub fn gray_ink(image: &DynamicImage, x: u32, y: u32) -> bool {
    let luma: Luma<u8> = image.to_luma8().get_pixel(x, y).to_owned();
    luma[0] < 128
}

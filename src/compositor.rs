//! Fixed-canvas compositor.
//!
//! Any source image is fitted inside the requested canvas with its aspect ratio
//! preserved, centered, and padded with solid white. The output always has
//! exactly the requested dimensions.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, Rgb, RgbImage, Rgba, RgbaImage};

use crate::error::{GenGraphicError, Result};
use crate::image_handler;
use crate::utils::convert;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Largest accepted canvas edge, in pixels.
pub const MAX_DIMENSION: u32 = 8192;

/// Exact pixel size of an output canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Round each axis to the nearest integer, kept within `1..=MAX_DIMENSION`.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: round_axis(width),
            height: round_axis(height),
        }
    }

    /// Exact size, rejecting zero or anything past [`MAX_DIMENSION`] on either axis.
    pub fn checked(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GenGraphicError::Validation(
                "Width and height must be greater than zero.".into(),
            ));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GenGraphicError::Validation(format!(
                "Width and height must not exceed {} pixels.",
                MAX_DIMENSION
            )));
        }
        Ok(Self { width, height })
    }

    pub fn label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl From<(u32, u32)> for CanvasSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

fn round_axis(value: f64) -> u32 {
    if !value.is_finite() || value < 1.0 {
        return 1;
    }
    value.round().min(MAX_DIMENSION as f64) as u32
}

/// Where the scaled source lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Uniform "fit inside" placement of a `source` sized image on `canvas`.
pub fn fit_placement(source: (u32, u32), canvas: CanvasSize) -> Placement {
    let (sw, sh) = (source.0.max(1) as f64, source.1.max(1) as f64);
    let scale = (canvas.width as f64 / sw).min(canvas.height as f64 / sh);

    let width = ((sw * scale).round() as u32).clamp(1, canvas.width);
    let height = ((sh * scale).round() as u32).clamp(1, canvas.height);

    Placement {
        x: (canvas.width - width) / 2,
        y: (canvas.height - height) / 2,
        width,
        height,
    }
}

/// Letterbox `source` onto a white canvas of exactly `canvas` pixels.
pub fn letterbox(source: &DynamicImage, canvas: CanvasSize) -> RgbImage {
    let placement = fit_placement(source.dimensions(), canvas);

    let mut surface = RgbaImage::from_pixel(canvas.width, canvas.height, BACKGROUND);
    let scaled = imageops::resize(
        &source.to_rgba8(),
        placement.width,
        placement.height,
        FilterType::Lanczos3,
    );
    // `overlay` alpha-blends, so transparent source pixels show the white fill.
    imageops::overlay(
        &mut surface,
        &scaled,
        placement.x as i64,
        placement.y as i64,
    );

    flatten(&surface)
}

fn flatten(surface: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(surface.width(), surface.height(), |x, y| {
        let [r, g, b, _] = surface.get_pixel(x, y).0;
        Rgb([r, g, b])
    })
}

/// Decode a base64 image payload and render it as a PNG data URL of exactly `canvas` pixels.
pub fn process_to_exact_size(encoded: &str, canvas: CanvasSize) -> Result<String> {
    let canvas = CanvasSize::checked(canvas.width, canvas.height)?;
    let source = image_handler::load_image_from_base64(encoded)?;
    let composed = DynamicImage::ImageRgb8(letterbox(&source, canvas));
    let png = image_handler::save_image_to_bytes(&composed)?;
    Ok(convert::png_data_url(&png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenGraphicError;

    // Solid red source so scaled pixels are easy to tell from the white padding.
    fn create_red_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([255, 0, 0])))
    }

    fn encode(img: &DynamicImage) -> String {
        convert::encode_base64(&image_handler::save_image_to_bytes(img).unwrap())
    }

    fn assert_fits(source: (u32, u32), canvas: CanvasSize) {
        let p = fit_placement(source, canvas);
        assert!(p.x + p.width <= canvas.width, "{:?} {:?}", source, canvas);
        assert!(p.y + p.height <= canvas.height, "{:?} {:?}", source, canvas);
        assert!(
            p.width == canvas.width || p.height == canvas.height,
            "scaled image should touch the canvas: {:?} on {:?}",
            p,
            canvas
        );
        let right = canvas.width - p.width - p.x;
        let bottom = canvas.height - p.height - p.y;
        assert!(right.abs_diff(p.x) <= 1);
        assert!(bottom.abs_diff(p.y) <= 1);
    }

    #[test]
    fn test_canvas_size_rounding() {
        assert_eq!(CanvasSize::new(1023.6, 0.2), CanvasSize { width: 1024, height: 1 });
        assert_eq!(CanvasSize::new(-5.0, f64::NAN), CanvasSize { width: 1, height: 1 });
        assert_eq!(CanvasSize::new(99.5, 10.49), CanvasSize { width: 100, height: 10 });
        assert_eq!(CanvasSize::from((0, 7)), CanvasSize { width: 1, height: 7 });
    }

    #[test]
    fn test_placement_fits_and_centers() {
        let sources = [(1024, 1024), (1920, 1080), (1, 1000), (1000, 1), (333, 777), (7, 3)];
        let canvases = [(1920, 1080), (1080, 1920), (1, 1), (1024, 1024), (301, 97)];
        for source in sources {
            for canvas in canvases {
                assert_fits(source, CanvasSize::from(canvas));
            }
        }
    }

    #[test]
    fn test_square_into_wide_canvas_is_pillarboxed() {
        let p = fit_placement((1024, 1024), CanvasSize::from((1920, 1080)));
        assert_eq!(p, Placement { x: 420, y: 0, width: 1080, height: 1080 });
    }

    #[test]
    fn test_letterbox_output_dimensions_and_padding() {
        let out = letterbox(&create_red_image(100, 100), CanvasSize::from((300, 100)));
        assert_eq!(out.dimensions(), (300, 100));
        // Padding on both sides is white, the middle is the source.
        assert_eq!(out.get_pixel(0, 50), &Rgb([255, 255, 255]));
        assert_eq!(out.get_pixel(299, 50), &Rgb([255, 255, 255]));
        let [r, g, b] = out.get_pixel(150, 50).0;
        assert!(r > 240 && g < 16 && b < 16, "expected red, got {:?}", (r, g, b));
    }

    #[test]
    fn test_transparent_source_becomes_white() {
        let clear = DynamicImage::ImageRgba8(RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0])));
        let out = letterbox(&clear, CanvasSize::from((20, 20)));
        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_process_to_exact_size_returns_png_data_url() {
        let encoded = encode(&create_red_image(64, 32));
        let url = process_to_exact_size(&encoded, CanvasSize::from((50, 80))).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        let bytes = convert::data_url_bytes(&url).unwrap();
        let decoded = image_handler::load_image_from_bytes(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (50, 80));
    }

    #[test]
    fn test_process_rejects_undecodable_payload() {
        let encoded = convert::encode_base64(b"plain text, no pixels here");
        let result = process_to_exact_size(&encoded, CanvasSize::from((10, 10)));
        assert!(matches!(result, Err(GenGraphicError::Decode(_))));
    }

    #[test]
    fn test_oversized_canvas_is_a_validation_error() {
        let encoded = encode(&create_red_image(4, 4));
        let result = process_to_exact_size(&encoded, CanvasSize::from((u32::MAX, u32::MAX)));
        assert!(matches!(result, Err(GenGraphicError::Validation(_))));

        assert!(CanvasSize::checked(MAX_DIMENSION, MAX_DIMENSION).is_ok());
        assert!(CanvasSize::checked(MAX_DIMENSION + 1, 1).is_err());
        assert!(CanvasSize::checked(0, 1).is_err());
        assert_eq!(CanvasSize::new(1e12, 2.0).width, MAX_DIMENSION);
    }
}

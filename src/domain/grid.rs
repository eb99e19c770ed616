//! Grid overlay and cursor coordinate mapping for the grid viewer.

use std::fmt;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::domain::AppError;
use crate::domain::config::GridSettings;

/// Periodic grid drawn over an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    resolution: u32,
    color: Rgba<u8>,
}

impl GridSpec {
    pub fn new(resolution: u32, rgb: [u8; 3]) -> Result<Self, AppError> {
        if resolution == 0 {
            return Err(AppError::config_error("grid resolution must be positive"));
        }
        Ok(Self { resolution, color: Rgba([rgb[0], rgb[1], rgb[2], u8::MAX]) })
    }

    pub fn from_settings(settings: &GridSettings) -> Result<Self, AppError> {
        Self::new(settings.resolution, settings.color)
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    pub fn is_grid_pixel(&self, x: u32, y: u32) -> bool {
        x % self.resolution == 0 || y % self.resolution == 0
    }

    /// Paint every grid pixel in place; all other pixels are left untouched.
    pub fn apply(&self, image: &mut RgbaImage) {
        for (x, y, pixel) in image.enumerate_pixels_mut() {
            if self.is_grid_pixel(x, y) {
                *pixel = self.color;
            }
        }
    }
}

/// Resize for display with bilinear filtering. Dimensions never drop below 1px.
pub fn scale_for_display(image: &RgbaImage, scale: f32) -> RgbaImage {
    if scale == 1.0 {
        return image.clone();
    }
    let width = ((image.width() as f32 * scale) as u32).max(1);
    let height = ((image.height() as f32 * scale) as u32).max(1);
    imageops::resize(image, width, height, FilterType::Triangle)
}

/// Cursor position mapped into `[-1, 1] x [1, -1]`, rounded to three decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedCoord {
    pub x: f64,
    pub y: f64,
}

impl NormalizedCoord {
    /// Map a pixel position on a `width` x `height` surface.
    pub fn from_pixel(x: f64, y: f64, width: u32, height: u32) -> Self {
        let width = f64::from(width.max(1));
        let height = f64::from(height.max(1));
        Self { x: round3(-1.0 + x * (2.0 / width)), y: round3(1.0 - y * (2.0 / height)) }
    }
}

impl fmt::Display for NormalizedCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(x: {:.3} , y: {:.3})", self.x, self.y)
    }
}

fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid printing "-0.000".
    if rounded == 0.0 { 0.0 } else { rounded }
}

use image::RgbaImage;

use crate::domain::AppError;

pub trait GridDisplay {
    /// Show the image and block until the viewer is closed.
    fn show(&self, title: &str, image: &RgbaImage) -> Result<(), AppError>;
}

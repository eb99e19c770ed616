use std::sync::Mutex;

use image::RgbaImage;

use crate::domain::AppError;
use crate::ports::GridDisplay;

/// Captures the shown image instead of opening a window.
#[derive(Default)]
pub struct FakeGridDisplay {
    pub shown: Mutex<Option<(String, RgbaImage)>>,
}

impl FakeGridDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown_image(&self) -> Option<RgbaImage> {
        self.shown.lock().unwrap().as_ref().map(|(_, image)| image.clone())
    }

    pub fn shown_title(&self) -> Option<String> {
        self.shown.lock().unwrap().as_ref().map(|(title, _)| title.clone())
    }
}

impl GridDisplay for FakeGridDisplay {
    fn show(&self, title: &str, image: &RgbaImage) -> Result<(), AppError> {
        *self.shown.lock().unwrap() = Some((title.to_string(), image.clone()));
        Ok(())
    }
}

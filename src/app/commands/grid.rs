//! Grid viewer: overlay a periodic grid on an image and inspect it.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::config::validate_display_scale;
use crate::domain::grid::scale_for_display;
use crate::domain::{AppError, GridSpec};
use crate::ports::{GridDisplay, ToolRunner};

#[derive(Debug, Clone)]
pub struct GridOptions {
    pub image: PathBuf,
    /// Draw the grid; `false` shows the image unchanged.
    pub overlay: bool,
    pub resolution: Option<u32>,
    pub scale: Option<f32>,
    /// Write the overlaid image here instead of opening the viewer.
    pub save: Option<PathBuf>,
}

impl GridOptions {
    pub fn new(image: impl Into<PathBuf>) -> Self {
        Self { image: image.into(), overlay: true, resolution: None, scale: None, save: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridOutcome {
    /// Dimensions of the image handed to the viewer or written to disk.
    pub width: u32,
    pub height: u32,
    pub saved: Option<PathBuf>,
}

/// Execute the grid command.
pub fn execute<R, D>(
    ctx: &AppContext<R, D>,
    options: GridOptions,
) -> Result<GridOutcome, AppError>
where
    R: ToolRunner,
    D: GridDisplay,
{
    let settings = &ctx.config().grid;
    if !options.image.is_file() {
        return Err(AppError::InputNotFound(options.image));
    }

    let mut image = image::open(&options.image)?.to_rgba8();
    if options.overlay {
        let grid = match options.resolution {
            Some(resolution) => GridSpec::new(resolution, settings.color)?,
            None => GridSpec::from_settings(settings)?,
        };
        grid.apply(&mut image);
        log::debug!("grid drawn every {} px", grid.resolution());
    }

    if let Some(path) = options.save {
        image.save(&path)?;
        let (width, height) = image.dimensions();
        return Ok(GridOutcome { width, height, saved: Some(path) });
    }

    let scale = options.scale.unwrap_or(settings.display_scale);
    validate_display_scale(scale)?;
    let shown = scale_for_display(&image, scale);

    let name = options
        .image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    ctx.display().show(&format!("assetkit grid: {name}"), &shown)?;

    Ok(GridOutcome { width: shown.width(), height: shown.height(), saved: None })
}

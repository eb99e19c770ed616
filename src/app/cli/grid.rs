use std::path::PathBuf;

use crate::app::commands::grid::GridOptions;
use crate::domain::{AppError, ToolkitConfig};

pub fn run_grid(
    config: ToolkitConfig,
    image: PathBuf,
    overlay: bool,
    resolution: Option<u32>,
    scale: Option<f32>,
    save: Option<PathBuf>,
) -> Result<(), AppError> {
    let outcome = crate::grid(config, GridOptions { image, overlay, resolution, scale, save })?;
    if let Some(path) = outcome.saved {
        println!(
            "✅ Wrote {}x{} image to {}",
            outcome.width,
            outcome.height,
            path.display()
        );
    }
    Ok(())
}

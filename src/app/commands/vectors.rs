//! Vector export: `.svg` files rasterized to fixed-size `.png` thumbnails.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::inputs::{ExplicitFiles, resolve_inputs};
use crate::app::commands::worker_pool::{run_batch, worker_count};
use crate::domain::{AppError, BatchReport, ToolInvocation};
use crate::ports::{GridDisplay, ToolRunner};

#[derive(Debug, Clone, Default)]
pub struct VectorOptions {
    /// Directories and/or vector files. Empty means the working directory.
    pub inputs: Vec<PathBuf>,
    /// Square output size override in pixels.
    pub size: Option<u32>,
    pub jobs: Option<usize>,
}

/// Execute the vectors command.
pub fn execute<R, D>(
    ctx: &AppContext<R, D>,
    options: VectorOptions,
) -> Result<BatchReport, AppError>
where
    R: ToolRunner,
    D: GridDisplay,
{
    let mut settings = ctx.config().vectors.clone();
    if let Some(size) = options.size {
        if size == 0 {
            return Err(AppError::config_error("--size must be positive"));
        }
        settings.width = size;
        settings.height = size;
    }

    let inputs =
        resolve_inputs(&options.inputs, &settings.extension_filter(), ExplicitFiles::Filter)?;
    let invocations: Vec<ToolInvocation> =
        inputs.iter().map(|input| ToolInvocation::vector(&settings, input)).collect();

    let workers = worker_count(options.jobs.unwrap_or(ctx.config().pool.jobs));
    run_batch(ctx.runner(), &invocations, workers)
}

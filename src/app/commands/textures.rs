//! Texture conversion: images to block-compressed `.dds` textures.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::app::commands::inputs::{ExplicitFiles, resolve_inputs};
use crate::app::commands::worker_pool::{run_batch, worker_count};
use crate::domain::{AppError, BatchReport, ToolInvocation};
use crate::ports::{GridDisplay, ToolRunner};

#[derive(Debug, Clone, Default)]
pub struct TextureOptions {
    /// Directories and/or image files. Empty means the working directory.
    pub inputs: Vec<PathBuf>,
    /// Directory receiving the `.dds` files instead of each input's directory.
    pub output_dir: Option<PathBuf>,
    /// Worker count override.
    pub jobs: Option<usize>,
}

/// Execute the textures command.
pub fn execute<R, D>(
    ctx: &AppContext<R, D>,
    options: TextureOptions,
) -> Result<BatchReport, AppError>
where
    R: ToolRunner,
    D: GridDisplay,
{
    let settings = &ctx.config().textures;
    let inputs =
        resolve_inputs(&options.inputs, &settings.extension_filter(), ExplicitFiles::Accept)?;

    if let Some(dir) = &options.output_dir {
        std::fs::create_dir_all(dir)?;
    }

    let invocations: Vec<ToolInvocation> = inputs
        .iter()
        .map(|input| ToolInvocation::texture(settings, input, options.output_dir.as_deref()))
        .collect();

    let workers = worker_count(options.jobs.unwrap_or(ctx.config().pool.jobs));
    run_batch(ctx.runner(), &invocations, workers)
}

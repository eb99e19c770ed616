//! assetkit: helpers for a game-mod asset pipeline.
//!
//! Four independent tools share this crate: texture conversion, vector
//! export, a grid overlay viewer, and an upload stager.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{DefaultGridDisplay, ProcessToolRunner};
use app::AppContext;
use app::commands::{grid, stage, textures, vectors};

pub use app::commands::grid::{GridOptions, GridOutcome};
pub use app::commands::stage::StageOptions;
pub use app::commands::textures::TextureOptions;
pub use app::commands::vectors::VectorOptions;
pub use app::config::load_config;
pub use domain::{
    AppError, BatchReport, ConflictPolicy, JobOutcome, JobStatus, StageAction, StagePlan,
    StageReport, ToolkitConfig, TransferMethod,
};

fn context(config: ToolkitConfig) -> AppContext<ProcessToolRunner, DefaultGridDisplay> {
    AppContext::new(config, ProcessToolRunner::new(), DefaultGridDisplay::default())
}

/// Convert images to `.dds` textures with the configured external converter.
///
/// Every input is attempted; failed conversions are listed in the report.
pub fn textures(config: ToolkitConfig, options: TextureOptions) -> Result<BatchReport, AppError> {
    textures::execute(&context(config), options)
}

/// Rasterize vector graphics to `.png` with the configured external rasterizer.
pub fn vectors(config: ToolkitConfig, options: VectorOptions) -> Result<BatchReport, AppError> {
    vectors::execute(&context(config), options)
}

/// Overlay a grid on an image and show it, or save it when `options.save` is set.
///
/// Blocks until the viewer window is closed.
pub fn grid(config: ToolkitConfig, options: GridOptions) -> Result<GridOutcome, AppError> {
    grid::execute(&context(config), options)
}

/// Select the files an upload staging run would transfer.
pub fn stage_plan(config: &ToolkitConfig, options: &StageOptions) -> Result<StagePlan, AppError> {
    stage::plan(&context(config.clone()), options)
}

/// Transfer a staging plan into its destination.
pub fn stage(
    config: ToolkitConfig,
    plan: &StagePlan,
    options: &StageOptions,
) -> Result<StageReport, AppError> {
    stage::execute(&context(config), plan, options)
}

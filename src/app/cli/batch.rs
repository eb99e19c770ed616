//! Texture and vector batch commands.

use std::path::PathBuf;

use crate::app::commands::textures::TextureOptions;
use crate::app::commands::vectors::VectorOptions;
use crate::domain::{AppError, BatchReport, JobStatus, ToolkitConfig};

pub fn run_textures(
    config: ToolkitConfig,
    paths: Vec<PathBuf>,
    output: Option<PathBuf>,
    jobs: Option<usize>,
) -> Result<i32, AppError> {
    let options = TextureOptions { inputs: paths, output_dir: output, jobs };
    let report = crate::textures(config, options)?;
    Ok(print_report(&report, "Converted"))
}

pub fn run_vectors(
    config: ToolkitConfig,
    paths: Vec<PathBuf>,
    size: Option<u32>,
    jobs: Option<usize>,
) -> Result<i32, AppError> {
    let report = crate::vectors(config, VectorOptions { inputs: paths, size, jobs })?;
    Ok(print_report(&report, "Exported"))
}

/// Print failures and a summary. Returns the process exit code.
///
/// Per-file `input -> output` lines are printed by the workers as jobs start.
fn print_report(report: &BatchReport, verb: &str) -> i32 {
    if report.is_empty() {
        println!("No matching input files found");
        return 0;
    }

    for outcome in report.failures() {
        if let JobStatus::Failed(reason) = &outcome.status {
            eprintln!("❌ {}: {}", outcome.input.display(), reason);
        }
    }

    let total = report.outcomes.len();
    let succeeded = report.succeeded();
    if report.has_failures() {
        let failed = total - succeeded;
        println!("⚠️  {} {} of {} file(s); {} failed", verb, succeeded, total, failed);
        1
    } else {
        println!("✅ {} {} file(s)", verb, succeeded);
        0
    }
}

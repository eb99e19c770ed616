use std::path::PathBuf;

use crate::app::commands::stage::StageOptions;
use crate::domain::{AppError, ConflictPolicy, StageAction, ToolkitConfig, TransferMethod};

pub fn run_stage(
    config: ToolkitConfig,
    source: PathBuf,
    destination: PathBuf,
    overwrite: bool,
    copy: bool,
    dry_run: bool,
) -> Result<(), AppError> {
    let mut options = StageOptions::new(source, destination);
    if overwrite {
        options.conflict = Some(ConflictPolicy::Overwrite);
    }
    if copy {
        options.method = Some(TransferMethod::Copy);
    }

    let plan = crate::stage_plan(&config, &options)?;
    if plan.is_empty() {
        println!("No files matched the staging allow-lists in {}", plan.source_root.display());
        return Ok(());
    }

    if dry_run {
        for (entry, destination) in plan.transfers() {
            println!("{} -> {}", entry.source.display(), destination.display());
        }
        println!("Dry run: {} file(s) would be staged", plan.entries.len());
        return Ok(());
    }

    let report = crate::stage(config, &plan, &options)?;
    for (entry, destination, action) in &report.actions {
        if *action != StageAction::Skipped {
            println!("{} -> {}", entry.source.display(), destination.display());
        }
    }
    println!(
        "✅ Staged {} file(s) into {} ({} skipped)",
        report.transferred(),
        options.destination.display(),
        report.skipped()
    );
    Ok(())
}

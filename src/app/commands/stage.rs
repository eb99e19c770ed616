//! Upload staging: copy the publishable subset of a mod tree into a staging directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::asset_filesystem::{collect_stage_entries, transfer};
use crate::app::AppContext;
use crate::domain::{
    AllowList, AppError, ConflictPolicy, StageAction, StagePlan, StageReport, TransferMethod,
};
use crate::ports::{GridDisplay, ToolRunner};

#[derive(Debug, Clone)]
pub struct StageOptions {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Overrides `stage.conflict` from the configuration.
    pub conflict: Option<ConflictPolicy>,
    /// Overrides `stage.method` from the configuration.
    pub method: Option<TransferMethod>,
}

impl StageOptions {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            conflict: None,
            method: None,
        }
    }
}

/// Policy and method in effect after applying CLI overrides to the configuration.
pub fn effective_settings<R, D>(
    ctx: &AppContext<R, D>,
    options: &StageOptions,
) -> (ConflictPolicy, TransferMethod)
where
    R: ToolRunner,
    D: GridDisplay,
{
    let settings = &ctx.config().stage;
    (options.conflict.unwrap_or(settings.conflict), options.method.unwrap_or(settings.method))
}

/// Select the files to stage without touching the destination.
pub fn plan<R, D>(ctx: &AppContext<R, D>, options: &StageOptions) -> Result<StagePlan, AppError>
where
    R: ToolRunner,
    D: GridDisplay,
{
    let settings = &ctx.config().stage;
    let roots = settings.root_allow_list();
    ensure_outside_source(&options.source, &options.destination, &roots)?;

    let entries = collect_stage_entries(&options.source, &roots, &settings.extension_filter())?;

    Ok(StagePlan {
        source_root: options.source.clone(),
        destination_root: options.destination.clone(),
        entries,
    })
}

/// Transfer every planned file.
///
/// Stops at the first I/O error; files already transferred stay in place.
pub fn execute<R, D>(
    ctx: &AppContext<R, D>,
    plan: &StagePlan,
    options: &StageOptions,
) -> Result<StageReport, AppError>
where
    R: ToolRunner,
    D: GridDisplay,
{
    let (policy, method) = effective_settings(ctx, options);
    log::info!(
        "staging {} file(s) into {} (conflict: {}, method: {})",
        plan.entries.len(),
        plan.destination_root.display(),
        policy,
        method
    );

    let mut report = StageReport::default();
    for (entry, destination) in plan.transfers() {
        let action = transfer(&entry.source, &destination, method, policy)?;
        if action == StageAction::Skipped {
            log::warn!("Skipping '{}' because it already exists", destination.display());
        }
        report.record(entry.clone(), destination, action);
    }
    Ok(report)
}

/// Reject a destination equal to the source or nested in one of its staged roots.
///
/// A destination under a staged root would be collected again on the next run.
fn ensure_outside_source(
    source: &Path,
    destination: &Path,
    roots: &AllowList,
) -> Result<(), AppError> {
    let source = fs::canonicalize(source).unwrap_or_else(|_| source.to_path_buf());
    let destination = resolve_destination(destination)?;
    if source == destination {
        return Err(AppError::config_error(format!(
            "Staging destination must differ from the source directory: {}",
            destination.display()
        )));
    }

    if let Ok(inside) = destination.strip_prefix(&source) {
        let root = inside
            .components()
            .next()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default();
        if roots.contains(&root) {
            return Err(AppError::config_error(format!(
                "Staging destination must not be inside the staged '{}' directory: {}",
                root,
                destination.display()
            )));
        }
    }
    Ok(())
}

/// Absolute destination with its existing ancestors canonicalized.
fn resolve_destination(destination: &Path) -> Result<PathBuf, AppError> {
    let mut existing = if destination.is_absolute() {
        destination.to_path_buf()
    } else {
        std::env::current_dir()?.join(destination)
    };
    let mut missing = Vec::new();
    loop {
        if let Ok(canonical) = fs::canonicalize(&existing) {
            return Ok(missing.iter().rev().fold(canonical, |path, part| path.join(part)));
        }
        match existing.file_name() {
            Some(name) => missing.push(name.to_os_string()),
            None => return Ok(existing),
        }
        if !existing.pop() {
            return Ok(existing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToolkitConfig;
    use crate::testing::{FakeGridDisplay, FakeToolRunner};
    use tempfile::TempDir;

    fn context(config: ToolkitConfig) -> AppContext<FakeToolRunner, FakeGridDisplay> {
        AppContext::new(config, FakeToolRunner::new(), FakeGridDisplay::new())
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn mod_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "mod/Data/Scripts/DeadlyAccel/Session.cs", "class Session {}");
        write(dir.path(), "mod/Data/Scripts/DeadlyAccel/Session.cs.bak", "old");
        write(dir.path(), "mod/Data/CubeBlocks.sbc", "<Definitions/>");
        write(dir.path(), "mod/Models/Cockpit.mwm", "mesh");
        write(dir.path(), "mod/Textures/GUI/hud.dds", "dds");
        write(dir.path(), "mod/Textures/GUI/hud.png", "png");
        write(dir.path(), "mod/Audio/alarm.wav", "riff");
        write(dir.path(), "mod/Tools/grid_gen.cs", "tool");
        write(dir.path(), "mod/README.md", "# Deadly Acceleration");
        write(dir.path(), "mod/thumb.png", "thumb");
        write(dir.path(), "mod/notes.txt", "private");
        dir
    }

    fn relative_files(root: &Path) -> Vec<String> {
        let mut files: Vec<String> = walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();
        files.sort();
        files
    }

    #[test]
    fn stages_exactly_the_allow_listed_files() {
        let dir = mod_tree();
        let ctx = context(ToolkitConfig::default());
        let options = StageOptions::new(dir.path().join("mod"), dir.path().join("upload"));

        let plan = plan(&ctx, &options).unwrap();
        let report = execute(&ctx, &plan, &options).unwrap();

        assert_eq!(report.transferred(), 5);
        assert_eq!(
            relative_files(&dir.path().join("upload")),
            vec![
                "Audio/alarm.wav",
                "Data/CubeBlocks.sbc",
                "Data/Scripts/DeadlyAccel/Session.cs",
                "Models/Cockpit.mwm",
                "Textures/GUI/hud.dds",
            ]
        );
    }

    #[test]
    fn default_policy_skips_existing_files() {
        let dir = mod_tree();
        let ctx = context(ToolkitConfig::default());
        let options = StageOptions::new(dir.path().join("mod"), dir.path().join("upload"));
        let plan = plan(&ctx, &options).unwrap();
        execute(&ctx, &plan, &options).unwrap();

        // Hard links share content with the source, so edit through a fresh file.
        let staged = dir.path().join("upload/Data/CubeBlocks.sbc");
        fs::remove_file(&staged).unwrap();
        fs::write(&staged, "edited by hand").unwrap();

        let report = execute(&ctx, &plan, &options).unwrap();

        assert_eq!(report.skipped(), 5);
        assert_eq!(fs::read_to_string(staged).unwrap(), "edited by hand");
    }

    #[test]
    fn overwrite_policy_restores_source_content() {
        let dir = mod_tree();
        let mut config = ToolkitConfig::default();
        config.stage.method = TransferMethod::Copy;
        let ctx = context(config);
        let mut options = StageOptions::new(dir.path().join("mod"), dir.path().join("upload"));
        options.conflict = Some(ConflictPolicy::Overwrite);
        let plan = plan(&ctx, &options).unwrap();
        execute(&ctx, &plan, &options).unwrap();

        let staged = dir.path().join("upload/Data/CubeBlocks.sbc");
        fs::write(&staged, "corrupted").unwrap();
        let report = execute(&ctx, &plan, &options).unwrap();

        assert_eq!(report.skipped(), 0);
        assert!(report.actions.iter().all(|(_, _, a)| *a == StageAction::Overwritten));
        assert_eq!(
            fs::read(&staged).unwrap(),
            fs::read(dir.path().join("mod/Data/CubeBlocks.sbc")).unwrap()
        );
    }

    #[test]
    fn cli_overrides_take_precedence_over_config() {
        let ctx = context(ToolkitConfig::default());
        let mut options = StageOptions::new("mod", "upload");
        assert_eq!(
            effective_settings(&ctx, &options),
            (ConflictPolicy::Skip, TransferMethod::HardLink)
        );

        options.conflict = Some(ConflictPolicy::Overwrite);
        options.method = Some(TransferMethod::Copy);
        assert_eq!(
            effective_settings(&ctx, &options),
            (ConflictPolicy::Overwrite, TransferMethod::Copy)
        );
    }

    #[test]
    fn configured_allow_lists_are_honoured() {
        let dir = mod_tree();
        let mut config = ToolkitConfig::default();
        config.stage.roots = vec!["Textures".to_string()];
        config.stage.extensions = vec!["png".to_string()];
        let ctx = context(config);
        let options = StageOptions::new(dir.path().join("mod"), dir.path().join("upload"));

        let plan = plan(&ctx, &options).unwrap();

        let relative: Vec<PathBuf> = plan.entries.iter().map(|e| e.relative.clone()).collect();
        assert_eq!(relative, vec![PathBuf::from("Textures/GUI/hud.png")]);
    }

    #[test]
    fn staging_into_the_source_is_rejected() {
        let dir = mod_tree();
        let ctx = context(ToolkitConfig::default());
        let options = StageOptions::new(dir.path().join("mod"), dir.path().join("mod/../mod"));

        let err = plan(&ctx, &options).unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn destination_inside_a_staged_root_is_rejected() {
        let dir = mod_tree();
        let ctx = context(ToolkitConfig::default());
        let options =
            StageOptions::new(dir.path().join("mod"), dir.path().join("mod/Data/upload"));

        let err = plan(&ctx, &options).unwrap_err();

        assert!(err.to_string().contains("inside the staged 'Data'"));
        assert!(!dir.path().join("mod/Data/upload").exists());
    }

    #[test]
    fn existing_destination_inside_a_staged_root_is_rejected() {
        let dir = mod_tree();
        fs::create_dir_all(dir.path().join("mod/Textures/upload")).unwrap();
        let ctx = context(ToolkitConfig::default());
        let options =
            StageOptions::new(dir.path().join("mod"), dir.path().join("mod/Textures/upload"));

        assert!(plan(&ctx, &options).is_err());
    }

    #[test]
    fn destination_beside_staged_roots_is_allowed() {
        let dir = mod_tree();
        let ctx = context(ToolkitConfig::default());
        let options = StageOptions::new(dir.path().join("mod"), dir.path().join("mod/upload"));

        let plan = plan(&ctx, &options).unwrap();
        execute(&ctx, &plan, &options).unwrap();
        let rerun = super::plan(&ctx, &options).unwrap();

        assert_eq!(rerun.entries.len(), plan.entries.len());
    }
}

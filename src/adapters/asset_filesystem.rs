//! Filesystem traversal and transfer for asset tools.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::{
    AllowList, AppError, ConflictPolicy, ExtensionFilter, StageAction, StageEntry, TransferMethod,
};

/// Direct children of `dir` that are files matching `filter`, sorted by path.
pub fn list_directory_files(
    dir: &Path,
    filter: &ExtensionFilter,
) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && filter.matches(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Select files for staging from the allow-listed top-level entries of `source_root`.
///
/// Directories are walked recursively. Every collected file, including a
/// top-level file named in `roots`, must match `extensions`.
pub fn collect_stage_entries(
    source_root: &Path,
    roots: &AllowList,
    extensions: &ExtensionFilter,
) -> Result<Vec<StageEntry>, AppError> {
    if !source_root.exists() {
        return Err(AppError::InputNotFound(source_root.to_path_buf()));
    }
    if !source_root.is_dir() {
        return Err(AppError::NotADirectory(source_root.to_path_buf()));
    }

    let mut top_level = Vec::new();
    for entry in fs::read_dir(source_root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if roots.contains(&name) {
            top_level.push(entry.path());
        } else {
            log::debug!("ignoring top-level entry '{}'", name);
        }
    }
    top_level.sort();

    let mut entries = Vec::new();
    for root in top_level {
        if root.is_dir() {
            for item in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
                let item = item?;
                if item.file_type().is_file() && extensions.matches(item.path()) {
                    entries.push(stage_entry(source_root, item.into_path()));
                }
            }
        } else if root.is_file() && extensions.matches(&root) {
            entries.push(stage_entry(source_root, root));
        } else {
            log::debug!("skipping top-level '{}': extension not selected", root.display());
        }
    }

    Ok(entries)
}

fn stage_entry(source_root: &Path, source: PathBuf) -> StageEntry {
    let relative = source
        .strip_prefix(source_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| source.clone());
    StageEntry { source, relative }
}

/// Materialize `source` at `destination`, creating parent directories.
///
/// An existing destination is kept under [`ConflictPolicy::Skip`] and removed
/// before the transfer under [`ConflictPolicy::Overwrite`]. Removing first
/// keeps a copy from truncating a destination that is a hard link to the source.
pub fn transfer(
    source: &Path,
    destination: &Path,
    method: TransferMethod,
    policy: ConflictPolicy,
) -> Result<StageAction, AppError> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let exists = destination.symlink_metadata().is_ok();
    if exists {
        match policy {
            ConflictPolicy::Skip => return Ok(StageAction::Skipped),
            ConflictPolicy::Overwrite => fs::remove_file(destination)?,
        }
    }

    match method {
        TransferMethod::HardLink => fs::hard_link(source, destination)?,
        TransferMethod::Copy => {
            fs::copy(source, destination)?;
        }
    }

    Ok(match (exists, method) {
        (true, _) => StageAction::Overwritten,
        (false, TransferMethod::HardLink) => StageAction::Linked,
        (false, TransferMethod::Copy) => StageAction::Copied,
    })
}

//! Input selection shared by the batch tools.

use std::path::{Path, PathBuf};

use crate::adapters::asset_filesystem::list_directory_files;
use crate::domain::{AppError, ExtensionFilter};

/// Whether explicitly named files go through the extension filter too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplicitFiles {
    Accept,
    Filter,
}

/// Expand command-line paths into the files a batch tool should process.
///
/// No paths means the working directory. A directory contributes its direct
/// children matching `filter`; a file is taken as given unless
/// `explicit` is [`ExplicitFiles::Filter`].
pub fn resolve_inputs(
    paths: &[PathBuf],
    filter: &ExtensionFilter,
    explicit: ExplicitFiles,
) -> Result<Vec<PathBuf>, AppError> {
    let default_dir = [PathBuf::from(".")];
    let paths = if paths.is_empty() { &default_dir[..] } else { paths };

    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            inputs.extend(list_directory_files(path, filter)?);
        } else if path.is_file() {
            if explicit == ExplicitFiles::Accept || filter.matches(path) {
                inputs.push(path.clone());
            } else {
                log::info!("skipping {}: extension not selected", path.display());
            }
        } else {
            return Err(AppError::InputNotFound(path.clone()));
        }
    }

    dedup_preserving_order(&mut inputs);
    Ok(inputs)
}

fn dedup_preserving_order(paths: &mut Vec<PathBuf>) {
    let mut seen: Vec<PathBuf> = Vec::with_capacity(paths.len());
    paths.retain(|path| {
        let key = normalize(path);
        if seen.contains(&key) {
            false
        } else {
            seen.push(key);
            true
        }
    });
}

fn normalize(path: &Path) -> PathBuf {
    path.components().collect()
}

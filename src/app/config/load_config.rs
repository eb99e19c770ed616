//! Toolkit configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::config::{parse, paths};
use crate::domain::{AppError, ToolkitConfig};

/// Load the toolkit configuration.
///
/// An explicit path must exist. Without one, `assetkit.toml` in `working_dir`
/// is used when present and the built-in defaults otherwise.
pub fn load_config(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> Result<ToolkitConfig, AppError> {
    let config_path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileMissing(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let path = paths::config(working_dir);
            if !path.is_file() {
                log::debug!(
                    "no {} in {}, using defaults",
                    paths::CONFIG_FILE,
                    working_dir.display()
                );
                return Ok(ToolkitConfig::default());
            }
            path
        }
    };

    log::debug!("loading configuration from {}", config_path.display());
    let content = fs::read_to_string(&config_path)?;
    parse::parse_config_content(&content)
}

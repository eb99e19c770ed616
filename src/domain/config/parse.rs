//! Pure parse/validate for toolkit configuration (`assetkit.toml`).

use crate::domain::{AppError, ToolkitConfig};

/// Parse and validate toolkit configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ToolkitConfig, AppError> {
    let config: ToolkitConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

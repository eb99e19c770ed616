use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "assetkit.toml";

/// `<root>/assetkit.toml`
pub fn config(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

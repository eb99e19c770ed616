//! Toolkit configuration loaded from `assetkit.toml`.

pub mod parse;
pub mod paths;

use serde::Deserialize;

use crate::domain::staging::{ConflictPolicy, TransferMethod};
use crate::domain::{AllowList, AppError, ExtensionFilter};

/// Upper bound for the grid viewer display scale.
pub const MAX_DISPLAY_SCALE: f32 = 4.0;

/// Top-level configuration. Every section falls back to the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolkitConfig {
    #[serde(default)]
    pub textures: TextureSettings,
    #[serde(default)]
    pub vectors: VectorSettings,
    #[serde(default)]
    pub grid: GridSettings,
    #[serde(default)]
    pub stage: StageSettings,
    #[serde(default)]
    pub pool: PoolSettings,
}

/// External texture converter settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextureSettings {
    #[serde(default = "default_texconv")]
    pub executable: String,
    /// Block compression format passed to `-f`.
    #[serde(default = "default_texture_format")]
    pub format: String,
    /// Extensions picked up when a directory is enumerated.
    #[serde(default = "default_texture_extensions")]
    pub extensions: Vec<String>,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            executable: default_texconv(),
            format: default_texture_format(),
            extensions: default_texture_extensions(),
        }
    }
}

impl TextureSettings {
    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions)
    }
}

/// External vector rasterizer settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VectorSettings {
    #[serde(default = "default_inkscape")]
    pub executable: String,
    #[serde(default = "default_export_size")]
    pub width: u32,
    #[serde(default = "default_export_size")]
    pub height: u32,
    #[serde(default = "default_vector_extensions")]
    pub extensions: Vec<String>,
}

impl Default for VectorSettings {
    fn default() -> Self {
        Self {
            executable: default_inkscape(),
            width: default_export_size(),
            height: default_export_size(),
            extensions: default_vector_extensions(),
        }
    }
}

impl VectorSettings {
    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions)
    }
}

/// Grid viewer settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GridSettings {
    /// Distance in pixels between grid lines.
    #[serde(default = "default_resolution")]
    pub resolution: u32,
    #[serde(default = "default_grid_color")]
    pub color: [u8; 3],
    #[serde(default = "default_display_scale")]
    pub display_scale: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            color: default_grid_color(),
            display_scale: default_display_scale(),
        }
    }
}

/// Upload stager settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StageSettings {
    /// Top-level entry names copied from the source directory.
    #[serde(default = "default_stage_roots")]
    pub roots: Vec<String>,
    /// Extensions collected inside root directories.
    #[serde(default = "default_stage_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub conflict: ConflictPolicy,
    #[serde(default)]
    pub method: TransferMethod,
}

impl Default for StageSettings {
    fn default() -> Self {
        Self {
            roots: default_stage_roots(),
            extensions: default_stage_extensions(),
            conflict: ConflictPolicy::default(),
            method: TransferMethod::default(),
        }
    }
}

impl StageSettings {
    pub fn root_allow_list(&self) -> AllowList {
        AllowList::new(self.roots.iter().cloned())
    }

    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions)
    }
}

/// Worker pool settings shared by the batch tools.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PoolSettings {
    /// Number of workers; 0 means one per available core.
    #[serde(default)]
    pub jobs: usize,
}

impl ToolkitConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.textures.executable.trim().is_empty() {
            return Err(AppError::config_error("textures.executable must not be empty"));
        }
        if self.textures.format.trim().is_empty() {
            return Err(AppError::config_error("textures.format must not be empty"));
        }
        if self.textures.extension_filter().is_empty() {
            return Err(AppError::config_error("textures.extensions must not be empty"));
        }
        if self.vectors.executable.trim().is_empty() {
            return Err(AppError::config_error("vectors.executable must not be empty"));
        }
        if self.vectors.width == 0 || self.vectors.height == 0 {
            return Err(AppError::config_error("vectors.width and vectors.height must be positive"));
        }
        if self.vectors.extension_filter().is_empty() {
            return Err(AppError::config_error("vectors.extensions must not be empty"));
        }
        if self.grid.resolution == 0 {
            return Err(AppError::config_error("grid.resolution must be positive"));
        }
        validate_display_scale(self.grid.display_scale)?;
        if self.stage.root_allow_list().is_empty() {
            return Err(AppError::config_error("stage.roots must not be empty"));
        }
        if self.stage.extension_filter().is_empty() {
            return Err(AppError::config_error("stage.extensions must not be empty"));
        }
        Ok(())
    }
}

/// Scale factors outside `(0, MAX_DISPLAY_SCALE]` are rejected.
pub fn validate_display_scale(scale: f32) -> Result<(), AppError> {
    if !(scale > 0.0 && scale <= MAX_DISPLAY_SCALE) {
        return Err(AppError::config_error(format!(
            "grid display scale must be in (0, {}], got {}",
            MAX_DISPLAY_SCALE, scale
        )));
    }
    Ok(())
}

fn default_texconv() -> String {
    "texconv".to_string()
}

fn default_texture_format() -> String {
    "BC7_UNORM".to_string()
}

fn default_texture_extensions() -> Vec<String> {
    vec!["png".to_string()]
}

fn default_inkscape() -> String {
    "inkscape".to_string()
}

fn default_export_size() -> u32 {
    256
}

fn default_vector_extensions() -> Vec<String> {
    vec!["svg".to_string()]
}

fn default_resolution() -> u32 {
    30
}

fn default_grid_color() -> [u8; 3] {
    [0, 255, 0]
}

fn default_display_scale() -> f32 {
    0.5
}

fn default_stage_roots() -> Vec<String> {
    ["Data", "Textures", "Models", "Audio", "LICENSE", "README.md", "thumb.png"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_stage_extensions() -> Vec<String> {
    ["mwm", "cs", "sbc", "dds", "wav"].into_iter().map(String::from).collect()
}

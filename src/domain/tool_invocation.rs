//! Planned calls to external asset tools.

use std::path::{Path, PathBuf};

use crate::domain::config::{TextureSettings, VectorSettings};

/// One external process call converting `input` into `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ToolInvocation {
    /// Block-compress an image into a `.dds` texture with premultiplied alpha and mipmaps.
    ///
    /// The output lands in `output_dir` when given, otherwise next to the input.
    pub fn texture(settings: &TextureSettings, input: &Path, output_dir: Option<&Path>) -> Self {
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => parent_dir(input),
        };
        let output = dir.join(format!("{}.dds", file_stem(input)));

        let args = vec![
            "-nologo".to_string(),
            "-y".to_string(),
            "-f".to_string(),
            settings.format.clone(),
            "-pmalpha".to_string(),
            "-if".to_string(),
            "LINEAR".to_string(),
            "-l".to_string(),
            "-o".to_string(),
            dir.display().to_string(),
            input.display().to_string(),
        ];

        Self { program: settings.executable.clone(), args, input: input.to_path_buf(), output }
    }

    /// Rasterize a vector graphic into a fixed-size `.png` next to the input.
    pub fn vector(settings: &VectorSettings, input: &Path) -> Self {
        let output = input.with_extension("png");
        let args = vec![
            "--export-type=png".to_string(),
            "-w".to_string(),
            settings.width.to_string(),
            "-h".to_string(),
            settings.height.to_string(),
            format!("--export-filename={}", output.display()),
            input.display().to_string(),
        ];

        Self { program: settings.executable.clone(), args, input: input.to_path_buf(), output }
    }

    /// Shell-like rendering used in logs and error messages.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            if arg.contains(' ') {
                line.push('"');
                line.push_str(arg);
                line.push('"');
            } else {
                line.push_str(arg);
            }
        }
        line
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

use std::process::Command;

use crate::domain::{AppError, ToolInvocation};
use crate::ports::ToolRunner;

/// Runs tools as child processes, resolving the program through `PATH`.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        log::debug!("running {}", invocation.command_line());

        let output = Command::new(&invocation.program)
            .args(&invocation.args)
            .output()
            .map_err(|e| AppError::ToolFailed {
                command: invocation.command_line(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ToolFailed {
                command: invocation.command_line(),
                details: if stderr.is_empty() { output.status.to_string() } else { stderr },
            });
        }

        Ok(())
    }
}

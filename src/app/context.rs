use crate::domain::ToolkitConfig;
use crate::ports::{GridDisplay, ToolRunner};

/// Application context holding configuration and dependencies for command execution.
pub struct AppContext<R: ToolRunner, D: GridDisplay> {
    config: ToolkitConfig,
    runner: R,
    display: D,
}

impl<R: ToolRunner, D: GridDisplay> AppContext<R, D> {
    /// Create a new application context.
    pub fn new(config: ToolkitConfig, runner: R, display: D) -> Self {
        Self { config, runner, display }
    }

    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// Get a reference to the external tool runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the grid display.
    pub fn display(&self) -> &D {
        &self.display
    }
}

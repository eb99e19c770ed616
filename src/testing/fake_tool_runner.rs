use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::{AppError, ToolInvocation};
use crate::ports::ToolRunner;

/// Records invocations instead of spawning processes.
#[derive(Default)]
pub struct FakeToolRunner {
    pub invocations: Mutex<Vec<ToolInvocation>>,
    failing: Vec<String>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every invocation whose input file name is in `names`.
    pub fn failing_on<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            invocations: Mutex::new(Vec::new()),
            failing: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn inputs(&self) -> Vec<PathBuf> {
        self.invocations.lock().unwrap().iter().map(|i| i.input.clone()).collect()
    }

    pub fn recorded(&self) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        let name = invocation
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.failing.contains(&name) {
            return Err(AppError::ToolFailed {
                command: invocation.command_line(),
                details: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}

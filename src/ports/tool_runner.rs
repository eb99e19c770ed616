use crate::domain::{AppError, ToolInvocation};

/// Runs external asset tools. Shared across worker threads.
pub trait ToolRunner: Sync {
    /// Run the invocation to completion. A non-zero exit status is an error.
    fn run(&self, invocation: &ToolInvocation) -> Result<(), AppError>;
}

pub mod allow_list;
pub mod batch;
pub mod config;
pub mod error;
pub mod grid;
pub mod staging;
pub mod tool_invocation;

pub use allow_list::{AllowList, ExtensionFilter};
pub use batch::{BatchReport, JobOutcome, JobStatus};
pub use config::ToolkitConfig;
pub use error::AppError;
pub use grid::{GridSpec, NormalizedCoord};
pub use staging::{
    ConflictPolicy, StageAction, StageEntry, StagePlan, StageReport, TransferMethod,
};
pub use tool_invocation::ToolInvocation;

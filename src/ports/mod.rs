mod grid_display;
mod tool_runner;

pub use grid_display::GridDisplay;
pub use tool_runner::ToolRunner;

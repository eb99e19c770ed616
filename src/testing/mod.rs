mod fake_grid_display;
mod fake_tool_runner;

pub use fake_grid_display::FakeGridDisplay;
pub use fake_tool_runner::FakeToolRunner;

pub mod asset_filesystem;
pub mod grid_window;
pub mod process_tool_runner;

pub use grid_window::HeadlessGridDisplay;
#[cfg(feature = "viewer")]
pub use grid_window::WindowGridDisplay;
pub use process_tool_runner::ProcessToolRunner;

/// Display used by the CLI for `assetkit grid`.
#[cfg(feature = "viewer")]
pub type DefaultGridDisplay = WindowGridDisplay;
#[cfg(not(feature = "viewer"))]
pub type DefaultGridDisplay = HeadlessGridDisplay;

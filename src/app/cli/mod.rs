//! CLI Adapter.

mod batch;
mod grid;
mod stage;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::app::config::load_config;
use crate::domain::{AppError, ToolkitConfig};

#[derive(Parser)]
#[command(name = "assetkit")]
#[command(version)]
#[command(
    about = "Game-mod asset helpers: textures, vector thumbnails, grid viewer, upload staging",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./assetkit.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn", value_name = "LEVEL")]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images to block-compressed .dds textures with the external converter
    #[clap(visible_alias = "tx")]
    Textures {
        /// Directories or image files (defaults to the current directory)
        paths: Vec<PathBuf>,
        /// Write .dds files here instead of next to each input
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
        /// Number of parallel workers (defaults to one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
    /// Rasterize .svg files to fixed-size .png thumbnails
    #[clap(visible_alias = "vec")]
    Vectors {
        /// Directories or vector files (defaults to the current directory)
        paths: Vec<PathBuf>,
        /// Output width and height in pixels
        #[arg(short, long)]
        size: Option<u32>,
        /// Number of parallel workers (defaults to one per core)
        #[arg(short, long)]
        jobs: Option<usize>,
    },
    /// Show an image with a grid overlay and normalized cursor coordinates
    #[clap(visible_alias = "g")]
    Grid {
        /// Image to inspect
        image: PathBuf,
        /// Show the image without the grid overlay
        #[arg(long)]
        no_grid: bool,
        /// Distance between grid lines in pixels
        #[arg(short, long)]
        resolution: Option<u32>,
        /// Display scale factor for the viewer window
        #[arg(long)]
        scale: Option<f32>,
        /// Write the overlaid image to a file instead of opening a window
        #[arg(long, value_name = "PATH")]
        save: Option<PathBuf>,
    },
    /// Copy the publishable subset of a mod into an upload staging directory
    #[clap(visible_alias = "st")]
    Stage {
        /// Mod source directory
        source: PathBuf,
        /// Staging destination directory
        destination: PathBuf,
        /// Replace files that already exist in the destination
        #[arg(long)]
        overwrite: bool,
        /// Copy files instead of hard-linking them
        #[arg(long)]
        copy: bool,
        /// List the files that would be staged without writing anything
        #[arg(long)]
        dry_run: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let result: Result<i32, AppError> = current_config(cli.config).and_then(|config| {
        match cli.command {
            Commands::Textures { paths, output, jobs } => {
                batch::run_textures(config, paths, output, jobs)
            }
            Commands::Vectors { paths, size, jobs } => {
                batch::run_vectors(config, paths, size, jobs)
            }
            Commands::Grid { image, no_grid, resolution, scale, save } => {
                grid::run_grid(config, image, !no_grid, resolution, scale, save).map(|_| 0)
            }
            Commands::Stage { source, destination, overwrite, copy, dry_run } => {
                stage::run_stage(config, source, destination, overwrite, copy, dry_run).map(|_| 0)
            }
        }
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(level: LevelFilter) {
    env_logger::Builder::new().filter_level(level).format_timestamp(None).init();
}

fn current_config(explicit: Option<PathBuf>) -> Result<ToolkitConfig, AppError> {
    let cwd = std::env::current_dir()?;
    load_config(explicit.as_deref(), &cwd)
}

#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::{App, LoadedData, Session, run_report};
pub use config::PERSISTENCE;
pub use domain::DemandRecord;
pub use models::{DemandDataset, ForecastSeries};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Excel workbook to load at start-up
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Print the forecast report to stdout and exit (requires --file)
    #[arg(long, default_value_t = false, requires = "file")]
    pub report: bool,

    /// Seed for the chart fluctuation, for reproducible charts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw projected chart points without random fluctuation
    #[arg(long, default_value_t = false)]
    pub no_fluctuation: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

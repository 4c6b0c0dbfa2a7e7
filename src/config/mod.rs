//! Configuration module for the demand forecaster.

// Can all be private now because we have a public re-export.
mod debug;
mod forecast;
mod persistence;
mod plot;
mod workbook;

// Public
pub mod constants;

// Re-export commonly used items
pub use constants::LOG_PERFORMANCE;
pub use debug::DF;
pub use forecast::{CHART, ChartConfig, FORECAST, ForecastConfig, RECOMMENDATION, RecommendationConfig};
pub use persistence::PERSISTENCE;
pub use plot::PLOT_CONFIG;
pub use workbook::{WORKBOOK, WorkbookConfig};

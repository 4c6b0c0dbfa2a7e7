// Top Level Constants
pub const MONTHS_PER_YEAR: usize = 12;

/// Mirrors `DF.log_performance` so `trace_time!` can be expanded from any module.
pub const LOG_PERFORMANCE: bool = crate::config::DF.log_performance;

/// Number of decimals shown for percent values in charts and reports.
pub const PCT_DECIMALS: usize = 1;

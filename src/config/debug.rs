//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Workbook reading, row counts, rejected rows.
    pub log_loading: bool,

    /// Model fit details (trend, seasonality on/off).
    pub log_forecast: bool,

    /// Price/profit simulation inputs and results.
    pub log_simulation: bool,

    /// Chart series construction and fluctuation draws.
    pub log_charts: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Dialog state transitions in the main window.
    pub log_dialogs: bool,
}

pub const DF: LogFlags = LogFlags {
    log_loading: true,
    log_forecast: true,

    log_simulation: false,
    log_charts: false,
    log_performance: false,
    log_dialogs: false,
};

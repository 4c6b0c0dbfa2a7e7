use serde::{Deserialize, Serialize};

/// One worksheet row: a month of observed demand.
///
/// Columns are positional; the header text in the workbook is not trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    /// Free-text month label as typed in the sheet (display only)
    pub month_label: String,
    pub demand: f64,
    pub price: f64,
    pub revenue: f64,
    pub cumulative_demand: f64,
    /// Empty for the first month in most workbooks
    pub growth_rate_pct: Option<f64>,
    /// Previously stored forecast, kept but not used after load
    pub stored_forecast: Option<f64>,
}

impl DemandRecord {
    // A constructor for convenience (tests and report fixtures)
    pub fn new(month_label: impl Into<String>, demand: f64, price: f64) -> Self {
        DemandRecord {
            month_label: month_label.into(),
            demand,
            price,
            revenue: demand * price,
            cumulative_demand: demand,
            growth_rate_pct: None,
            stored_forecast: None,
        }
    }

    /// Growth rate with a missing cell read as no change.
    pub fn growth_rate_or_zero(&self) -> f64 {
        self.growth_rate_pct.unwrap_or(0.0)
    }
}

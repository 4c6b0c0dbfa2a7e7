//! Forecasting, recommendation and chart configuration

/// Forecast model and date axis settings.
pub struct ForecastConfig {
    /// Future periods predicted beyond the last historical period
    pub horizon_months: usize,
    /// Synthetic date axis starts at the end of this month
    pub start_year: i32,
    pub start_month: u32,
    /// Yearly seasonality is only fitted with at least this many periods
    pub min_periods_for_seasonality: usize,
}

pub const FORECAST: ForecastConfig = ForecastConfig {
    horizon_months: 12,
    start_year: 2025,
    start_month: 1,
    min_periods_for_seasonality: 24,
};

/// Rule thresholds used by the recommendations block.
pub struct RecommendationConfig {
    /// Largest month-over-month forecast increase (units) that triggers the stock advice
    pub growth_threshold_units: f64,
    /// Price cut suggested when demand is expected to fall
    pub suggested_price_cut_pct: u32,
}

pub const RECOMMENDATION: RecommendationConfig = RecommendationConfig {
    growth_threshold_units: 10.0,
    suggested_price_cut_pct: 20,
};

/// Chart display settings.
pub struct ChartConfig {
    /// Projected values are multiplied by `1 + uniform(-f, +f)` for display
    pub fluctuation_pct: f64,
    pub marker_radius: f32,
    pub line_width: f32,
}

pub const CHART: ChartConfig = ChartConfig {
    fluctuation_pct: 0.10,
    marker_radius: 4.0,
    line_width: 2.0,
};

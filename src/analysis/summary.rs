use {
    crate::{
        config::{DF, RECOMMENDATION},
        models::{DemandDataset, ForecastSeries},
        utils::{arg_max, arg_min, mean, month_label, period_diffs, round_units},
    },
    anyhow::{Context, Result, bail},
    serde::{Deserialize, Serialize},
};

/// Rule-based advice attached to a summary. Rendering lives with the UI text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// Next month is forecast below the last observed value.
    PriceReduction { cut_pct: u32 },
    /// Next month is forecast at or above the last observed value.
    Promotion,
    StockOptimization,
    ProductionPlanning { month: String },
    DistributionChannels,
}

/// Direction of next month against the last observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Rising,
    Falling,
}

/// Descriptive aggregates over history + forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandSummary {
    pub avg_demand: i64,
    pub max_demand: i64,
    pub max_month: String,
    pub min_demand: i64,
    pub min_month: String,
    pub total_next_year: i64,
    pub next_month_forecast: i64,
    pub next_month_label: String,
    pub next_month_revenue: i64,
    pub last_value: f64,
    pub last_price: f64,
    /// Largest period-over-period rise across the whole forecast
    pub largest_increase: f64,
    /// Largest period-over-period fall (most negative diff)
    pub largest_decrease: f64,
}

impl DemandSummary {
    pub fn compute(dataset: &DemandDataset, forecast: &ForecastSeries) -> Result<Self> {
        if forecast.history_len() != dataset.len() {
            bail!(
                "Forecast covers {} historical periods but the dataset has {}.",
                forecast.history_len(),
                dataset.len()
            );
        }
        let next = forecast
            .next_period()
            .context("Forecast has no future periods to summarise.")?;

        let history = dataset.target();
        let yhat = forecast.values();
        let dates = forecast.dates();

        let avg = mean(&history).context("No historical demand to average.")?;
        let max_idx = arg_max(&yhat).context("Empty forecast")?;
        let min_idx = arg_min(&yhat).context("Empty forecast")?;

        let diffs = period_diffs(&yhat);
        let largest_increase = diffs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let largest_decrease = diffs.iter().copied().fold(f64::INFINITY, f64::min);
        // A one-point forecast has no differences at all.
        let (largest_increase, largest_decrease) = if diffs.is_empty() {
            (0.0, 0.0)
        } else {
            (largest_increase, largest_decrease)
        };

        let total_next_year: f64 = forecast.future().iter().map(|p| p.value).sum();
        let next_month_forecast = round_units(next.value);
        let last = dataset.last();

        let summary = Self {
            avg_demand: round_units(avg),
            max_demand: round_units(yhat[max_idx]),
            max_month: month_label(dates[max_idx]),
            min_demand: round_units(yhat[min_idx]),
            min_month: month_label(dates[min_idx]),
            total_next_year: round_units(total_next_year),
            next_month_forecast,
            next_month_label: month_label(next.date),
            next_month_revenue: round_units(next_month_forecast as f64 * last.price),
            last_value: last.demand,
            last_price: last.price,
            largest_increase,
            largest_decrease,
        };

        if DF.log_forecast {
            log::info!(
                "Summary: avg {} | next {} ({}) | peak {} in {}",
                summary.avg_demand,
                summary.next_month_forecast,
                summary.next_month_label,
                summary.max_demand,
                summary.max_month
            );
        }
        Ok(summary)
    }

    pub fn trend(&self) -> TrendDirection {
        if self.next_month_forecast as f64 > self.last_value {
            TrendDirection::Rising
        } else {
            TrendDirection::Falling
        }
    }

    /// Absolute unit change from the last observation to next month.
    pub fn trend_delta(&self) -> i64 {
        round_units((self.next_month_forecast as f64 - self.last_value).abs())
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        let mut out = Vec::with_capacity(4);
        if (self.next_month_forecast as f64) < self.last_value {
            out.push(Recommendation::PriceReduction {
                cut_pct: RECOMMENDATION.suggested_price_cut_pct,
            });
        } else {
            out.push(Recommendation::Promotion);
        }
        if self.largest_increase > RECOMMENDATION.growth_threshold_units {
            out.push(Recommendation::StockOptimization);
        }
        out.push(Recommendation::ProductionPlanning {
            month: self.next_month_label.clone(),
        });
        out.push(Recommendation::DistributionChannels);
        out
    }
}

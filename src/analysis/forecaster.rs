use {
    crate::{
        config::{DF, FORECAST, constants::MONTHS_PER_YEAR},
        models::{DemandDataset, ForecastPoint, ForecastSeries},
        utils::{mean, next_month_ends},
    },
    anyhow::{Context, Result, anyhow, bail},
    chrono::{Datelike, NaiveDate},
    linreg::linear_regression,
};

/// A model that can be fitted on a dated series.
pub trait ForecastModel {
    type Fitted: FittedModel;

    /// Fit on `(dates[i], values[i])`. Period index `i` is the time axis.
    fn fit(&self, dates: &[NaiveDate], values: &[f64]) -> Result<Self::Fitted>;

    fn name(&self) -> &str;
}

/// A fitted model predicting by period index and calendar date.
pub trait FittedModel {
    fn predict(&self, period: usize, date: NaiveDate) -> f64;
}

/// Additive decomposition: linear trend + yearly (month-of-year) seasonality.
///
/// Seasonality is only fitted once the history covers
/// `min_periods_for_seasonality` periods; shorter series get the trend alone.
#[derive(Debug, Clone)]
pub struct AdditiveModel {
    min_periods_for_seasonality: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FittedAdditiveModel {
    pub slope: f64,
    pub intercept: f64,
    /// Effect per calendar month (index 0 = January). Sums to zero; all zero when disabled.
    pub seasonal: [f64; MONTHS_PER_YEAR],
    pub seasonality_enabled: bool,
}

impl Default for AdditiveModel {
    fn default() -> Self {
        Self {
            min_periods_for_seasonality: FORECAST.min_periods_for_seasonality,
        }
    }
}

impl AdditiveModel {
    pub fn with_min_seasonal_periods(min_periods_for_seasonality: usize) -> Self {
        Self {
            min_periods_for_seasonality,
        }
    }

    fn fit_trend(values: &[f64]) -> Result<(f64, f64)> {
        if values.len() == 1 {
            return Ok((0.0, values[0]));
        }
        let xs: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        linear_regression::<f64, f64, f64>(&xs, values)
            .map_err(|e| anyhow!("Trend fit failed: {:?}", e))
    }

    fn fit_seasonality(
        dates: &[NaiveDate],
        values: &[f64],
        slope: f64,
        intercept: f64,
    ) -> [f64; MONTHS_PER_YEAR] {
        let mut buckets: [Vec<f64>; MONTHS_PER_YEAR] = Default::default();
        for (i, (date, value)) in dates.iter().zip(values).enumerate() {
            let residual = value - (intercept + slope * i as f64);
            buckets[date.month0() as usize].push(residual);
        }

        let mut effects = [0.0; MONTHS_PER_YEAR];
        for (effect, bucket) in effects.iter_mut().zip(&buckets) {
            *effect = mean(bucket).unwrap_or(0.0);
        }

        // Centre so the seasonal component never shifts the level.
        let offset = effects.iter().sum::<f64>() / MONTHS_PER_YEAR as f64;
        effects.iter_mut().for_each(|e| *e -= offset);
        effects
    }
}

impl ForecastModel for AdditiveModel {
    type Fitted = FittedAdditiveModel;

    fn fit(&self, dates: &[NaiveDate], values: &[f64]) -> Result<Self::Fitted> {
        if values.is_empty() {
            bail!("Cannot fit a forecast on an empty series.");
        }
        if dates.len() != values.len() {
            bail!(
                "Date axis ({}) and values ({}) differ in length.",
                dates.len(),
                values.len()
            );
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            bail!("Value at period {} is not a finite number.", pos + 1);
        }

        let (slope, intercept) = Self::fit_trend(values)?;

        let seasonality_enabled = values.len() >= self.min_periods_for_seasonality;
        let seasonal = if seasonality_enabled {
            Self::fit_seasonality(dates, values, slope, intercept)
        } else {
            [0.0; MONTHS_PER_YEAR]
        };

        if DF.log_forecast {
            log::info!(
                "{} fitted on {} periods: slope {:.3}, intercept {:.3}, seasonality {}",
                self.name(),
                values.len(),
                slope,
                intercept,
                if seasonality_enabled { "on" } else { "off" }
            );
        }

        Ok(FittedAdditiveModel {
            slope,
            intercept,
            seasonal,
            seasonality_enabled,
        })
    }

    fn name(&self) -> &str {
        "Additive trend + yearly seasonality"
    }
}

impl FittedModel for FittedAdditiveModel {
    fn predict(&self, period: usize, date: NaiveDate) -> f64 {
        self.intercept + self.slope * period as f64 + self.seasonal[date.month0() as usize]
    }
}

/// Fits `model` on the dataset and predicts every historical period plus
/// `horizon` month-ends beyond the last one.
pub fn forecast_dataset<M: ForecastModel>(
    model: &M,
    dataset: &DemandDataset,
    horizon: usize,
) -> Result<ForecastSeries> {
    let history = dataset.target();
    let fitted = crate::trace_time!("Model fit", 50, { model.fit(dataset.dates(), &history)? });

    let future = next_month_ends(dataset.last_date(), horizon)
        .context("Forecast horizon overflowed the calendar")?;

    let points = dataset
        .dates()
        .iter()
        .chain(future.iter())
        .enumerate()
        .map(|(period, &date)| ForecastPoint {
            date,
            value: fitted.predict(period, date),
        })
        .collect();

    Ok(ForecastSeries::new(points, dataset.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::DemandRecord, utils::month_end_dates};
    use approx::assert_relative_eq;

    fn dataset(values: &[f64]) -> DemandDataset {
        let records = values
            .iter()
            .enumerate()
            .map(|(i, &v)| DemandRecord::new(format!("M{}", i + 1), v, 100.0))
            .collect();
        DemandDataset::from_records(records).unwrap()
    }

    #[test]
    fn test_linear_series_is_reproduced_and_extended() {
        let ds = dataset(&[10.0, 12.0, 14.0, 16.0]);
        let forecast = forecast_dataset(&AdditiveModel::default(), &ds, 3).unwrap();

        assert_eq!(forecast.len(), 7);
        assert_eq!(forecast.history_len(), 4);
        let values = forecast.values();
        for (i, v) in values.iter().enumerate() {
            assert_relative_eq!(*v, 10.0 + 2.0 * i as f64, epsilon = 1e-9);
        }
        assert_eq!(
            forecast.future()[0].date,
            NaiveDate::from_ymd_opt(2025, 5, 31).unwrap()
        );
    }

    #[test]
    fn test_single_observation_is_flat() {
        let ds = dataset(&[42.0]);
        let forecast = forecast_dataset(&AdditiveModel::default(), &ds, 12).unwrap();
        assert_eq!(forecast.horizon(), 12);
        assert!(forecast.values().iter().all(|v| (*v - 42.0).abs() < 1e-12));
    }

    #[test]
    fn test_seasonality_disabled_for_short_history() {
        let dates = month_end_dates(2025, 1, 6).unwrap();
        let fitted = AdditiveModel::default()
            .fit(&dates, &[5.0, 9.0, 4.0, 8.0, 6.0, 7.0])
            .unwrap();
        assert!(!fitted.seasonality_enabled);
        assert_eq!(fitted.seasonal, [0.0; MONTHS_PER_YEAR]);
    }

    #[test]
    fn test_seasonal_effects_sum_to_zero_and_repeat_pattern() {
        // Two years of flat demand with a December spike.
        let values: Vec<f64> = (0..24)
            .map(|i| if i % 12 == 11 { 160.0 } else { 100.0 })
            .collect();
        let dates = month_end_dates(2025, 1, 24).unwrap();
        let fitted = AdditiveModel::default().fit(&dates, &values).unwrap();

        assert!(fitted.seasonality_enabled);
        assert_relative_eq!(fitted.seasonal.iter().sum::<f64>(), 0.0, epsilon = 1e-9);
        let december = fitted.seasonal[11];
        assert!(fitted.seasonal[..11].iter().all(|e| *e < december));
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        let model = AdditiveModel::default();
        assert!(model.fit(&[], &[]).is_err());

        let dates = month_end_dates(2025, 1, 2).unwrap();
        assert!(model.fit(&dates, &[1.0, f64::NAN]).is_err());
        assert!(model.fit(&dates, &[1.0]).is_err());
    }
}

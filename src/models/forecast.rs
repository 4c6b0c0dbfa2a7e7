use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One predicted period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Model output over history + horizon.
///
/// Alignment with the history is positional: the first `history_len` points
/// are the in-sample fit of the historical rows, the rest are future periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
    history_len: usize,
}

impl ForecastSeries {
    pub fn new(points: Vec<ForecastPoint>, history_len: usize) -> Self {
        debug_assert!(history_len <= points.len());
        Self {
            points,
            history_len,
        }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Predicted values (`yhat`) for every period.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn history_len(&self) -> usize {
        self.history_len
    }

    pub fn horizon(&self) -> usize {
        self.points.len() - self.history_len
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Future-only slice (beyond the last historical period).
    pub fn future(&self) -> &[ForecastPoint] {
        &self.points[self.history_len..]
    }

    /// First period after the history, if a horizon was predicted.
    pub fn next_period(&self) -> Option<&ForecastPoint> {
        self.points.get(self.history_len)
    }
}

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use crate::{config::FORECAST, domain::DemandRecord, utils::month_end_dates};

// ============================================================================
// DemandDataset: the loaded history with its synthetic monthly date axis
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DemandDataset {
    records: Vec<DemandRecord>,
    /// Month-end date per record, assigned by position (`ds`)
    dates: Vec<NaiveDate>,
}

impl DemandDataset {
    /// Builds the dataset and derives the date axis. Rows must already be chronological.
    pub fn from_records(records: Vec<DemandRecord>) -> Result<Self> {
        if records.is_empty() {
            bail!("Worksheet contains no data rows.");
        }
        let dates = month_end_dates(FORECAST.start_year, FORECAST.start_month, records.len())
            .context("Date axis overflowed the calendar")?;

        Ok(Self { records, dates })
    }

    pub fn records(&self) -> &[DemandRecord] {
        &self.records
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The model target `y` (a copy of the demand column).
    pub fn target(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.demand).collect()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.price).collect()
    }

    pub fn revenues(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.revenue).collect()
    }

    pub fn growth_rates(&self) -> Vec<f64> {
        self.records.iter().map(DemandRecord::growth_rate_or_zero).collect()
    }

    /// Last row of the sheet. Never fails: construction rejects empty input.
    pub fn last(&self) -> &DemandRecord {
        &self.records[self.records.len() - 1]
    }

    pub fn last_date(&self) -> NaiveDate {
        self.dates[self.dates.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_records_assigns_positional_month_ends() {
        let ds = DemandDataset::from_records(vec![
            DemandRecord::new("Ian", 100.0, 3000.0),
            DemandRecord::new("Feb", 120.0, 3000.0),
        ])
        .unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.dates()[0], NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
        assert_eq!(ds.last_date(), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(ds.target(), vec![100.0, 120.0]);
        assert_eq!(ds.last().month_label, "Feb");
    }

    #[test]
    fn test_from_records_rejects_empty() {
        assert!(DemandDataset::from_records(Vec::new()).is_err());
    }
}

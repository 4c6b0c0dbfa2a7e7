use {
    crate::{
        analysis::{
            AdditiveModel, Baseline, ChartSeries, DemandSummary, FluctuationSource,
            forecast_dataset,
        },
        config::{DF, FORECAST},
        data::load_workbook,
        models::{DemandDataset, ForecastSeries},
        ui::UI_TEXT,
    },
    anyhow::{Result, anyhow},
    std::path::{Path, PathBuf},
};

/// Everything derived from one successfully loaded workbook.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub dataset: DemandDataset,
    pub forecast: ForecastSeries,
    pub summary: DemandSummary,
    pub source: PathBuf,
}

impl LoadedData {
    /// Load, fit and summarise in one go. Nothing is kept if any step fails.
    pub fn from_path(path: &Path) -> Result<Self> {
        let dataset = load_workbook(path)?;
        Self::from_dataset(dataset, path)
    }

    /// Fit and summarise an already parsed dataset.
    pub fn from_dataset(dataset: DemandDataset, source: impl Into<PathBuf>) -> Result<Self> {
        let forecast =
            forecast_dataset(&AdditiveModel::default(), &dataset, FORECAST.horizon_months)?;
        let summary = DemandSummary::compute(&dataset, &forecast)?;
        Ok(Self {
            dataset,
            forecast,
            summary,
            source: source.into(),
        })
    }

    pub fn baseline(&self) -> Baseline {
        Baseline::from_dataset(&self.dataset)
    }

    pub fn chart_series(&self, source: &mut FluctuationSource) -> ChartSeries {
        source.chart_series(&self.dataset, &self.forecast)
    }
}

/// Application data state. Replaced wholesale on a successful load only.
#[derive(Debug, Default)]
pub struct Session {
    loaded: Option<LoadedData>,
}

impl Session {
    pub fn load(&mut self, path: &Path) -> Result<&LoadedData> {
        let data = crate::trace_time!("Load + forecast", 200, { LoadedData::from_path(path)? });
        Ok(self.install(data))
    }

    /// Swap in freshly computed data, dropping whatever was there.
    pub fn install(&mut self, data: LoadedData) -> &LoadedData {
        if DF.log_loading {
            log::info!(
                "Session now holds {} rows from {}",
                data.dataset.len(),
                data.source.display()
            );
        }
        self.loaded.insert(data)
    }

    /// Guard shared by every action that needs data.
    pub fn loaded(&self) -> Result<&LoadedData> {
        self.loaded
            .as_ref()
            .ok_or_else(|| anyhow!("{}", UI_TEXT.error_no_data))
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }
}

use {
    crate::{
        config::{CHART, DF, PLOT_CONFIG},
        models::{DemandDataset, ForecastSeries},
        utils::{pct_changes, running_sum},
    },
    chrono::NaiveDate,
    eframe::egui::Color32,
    rand::{Rng, SeedableRng, rngs::StdRng},
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// The five chartable series.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum ChartKind {
    #[default]
    #[strum(to_string = "Cerere")]
    Demand,
    #[strum(to_string = "Preț")]
    Price,
    #[strum(to_string = "Venituri")]
    Revenue,
    #[strum(to_string = "Rata de Creștere")]
    GrowthRate,
    #[strum(to_string = "Cerere Cumulativă")]
    CumulativeDemand,
}

impl ChartKind {
    pub fn historical_color(self) -> Color32 {
        match self {
            ChartKind::Demand => PLOT_CONFIG.demand_color,
            ChartKind::Price => PLOT_CONFIG.price_color,
            ChartKind::Revenue => PLOT_CONFIG.revenue_color,
            ChartKind::GrowthRate => PLOT_CONFIG.growth_color,
            ChartKind::CumulativeDemand => PLOT_CONFIG.cumulative_color,
        }
    }

    pub fn projected_color(self) -> Color32 {
        match self {
            ChartKind::GrowthRate => PLOT_CONFIG.projected_growth_color,
            _ => PLOT_CONFIG.projected_color,
        }
    }

    pub fn is_percentage(self) -> bool {
        matches!(self, ChartKind::GrowthRate)
    }
}

/// Random multiplicative noise for projected chart points.
/// Each value is scaled by `1 + uniform(-pct, +pct)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluctuation {
    pub pct: f64,
}

impl Fluctuation {
    pub const NONE: Fluctuation = Fluctuation { pct: 0.0 };

    pub fn new(pct: f64) -> Self {
        Self { pct: pct.abs() }
    }

    pub fn factor<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.pct <= 0.0 {
            1.0
        } else {
            1.0 + rng.gen_range(-self.pct..=self.pct)
        }
    }
}

/// Fluctuation settings plus the generator that feeds them.
///
/// A fixed seed makes every chart of a run reproducible.
#[derive(Debug, Clone)]
pub struct FluctuationSource {
    pub fluctuation: Fluctuation,
    rng: StdRng,
}

impl Default for FluctuationSource {
    fn default() -> Self {
        Self::new(Fluctuation::new(CHART.fluctuation_pct), None)
    }
}

impl FluctuationSource {
    pub fn new(fluctuation: Fluctuation, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { fluctuation, rng }
    }

    /// Fresh draw over the projected points.
    pub fn chart_series(&mut self, dataset: &DemandDataset, forecast: &ForecastSeries) -> ChartSeries {
        ChartSeries::build(dataset, forecast, self.fluctuation, &mut self.rng)
    }
}

/// Display copy of history + projection for every chart kind.
///
/// Built fresh on each chart request; the stored forecast is never touched.
/// The first `history_len` entries of every series are observed values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub dates: Vec<NaiveDate>,
    pub history_len: usize,
    demand: Vec<f64>,
    price: Vec<f64>,
    revenue: Vec<f64>,
    growth_rate: Vec<f64>,
    cumulative: Vec<f64>,
}

impl ChartSeries {
    pub fn build<R: Rng>(
        dataset: &DemandDataset,
        forecast: &ForecastSeries,
        fluctuation: Fluctuation,
        rng: &mut R,
    ) -> Self {
        let history_len = dataset.len();
        let future = forecast.future();
        let last_price = dataset.last().price;

        let dates: Vec<NaiveDate> = dataset
            .dates()
            .iter()
            .copied()
            .chain(future.iter().map(|p| p.date))
            .collect();

        let projected: Vec<f64> = future
            .iter()
            .map(|p| p.value * fluctuation.factor(rng))
            .collect();

        let mut demand = dataset.target();
        demand.extend_from_slice(&projected);

        let mut price = dataset.prices();
        price.extend(std::iter::repeat_n(last_price, projected.len()));

        let mut revenue = dataset.revenues();
        revenue.extend(projected.iter().map(|d| d * last_price));

        // pct_changes[i] is the change into period i + 1.
        let changes = pct_changes(&demand);
        let mut growth_rate = dataset.growth_rates();
        growth_rate.extend((history_len..demand.len()).map(|i| changes[i - 1]));

        let cumulative = running_sum(&demand);

        if DF.log_charts {
            log::info!(
                "Chart series built: {} historical + {} projected (fluctuation ±{:.0}%)",
                history_len,
                projected.len(),
                fluctuation.pct * 100.0
            );
        }

        Self {
            dates,
            history_len,
            demand,
            price,
            revenue,
            growth_rate,
            cumulative,
        }
    }

    pub fn series(&self, kind: ChartKind) -> &[f64] {
        match kind {
            ChartKind::Demand => &self.demand,
            ChartKind::Price => &self.price,
            ChartKind::Revenue => &self.revenue,
            ChartKind::GrowthRate => &self.growth_rate,
            ChartKind::CumulativeDemand => &self.cumulative,
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn is_projected(&self, idx: usize) -> bool {
        idx >= self.history_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        analysis::{AdditiveModel, forecast_dataset},
        domain::DemandRecord,
    };
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    fn inputs() -> (DemandDataset, ForecastSeries) {
        let mut records: Vec<DemandRecord> = [100.0, 120.0, 130.0, 150.0]
            .iter()
            .enumerate()
            .map(|(i, &d)| DemandRecord::new(format!("L{}", i), d, 25.0))
            .collect();
        records[1].growth_rate_pct = Some(20.0);
        let ds = DemandDataset::from_records(records).unwrap();
        let fc = forecast_dataset(&AdditiveModel::default(), &ds, 12).unwrap();
        (ds, fc)
    }

    #[test]
    fn test_history_is_never_perturbed() {
        let (ds, fc) = inputs();
        let mut rng = StdRng::seed_from_u64(7);
        let chart = ChartSeries::build(&ds, &fc, Fluctuation::new(0.5), &mut rng);

        assert_eq!(chart.len(), 16);
        assert_eq!(&chart.series(ChartKind::Demand)[..4], &[100.0, 120.0, 130.0, 150.0]);
        assert_eq!(&chart.series(ChartKind::Price)[..4], &[25.0; 4]);
        assert_eq!(chart.series(ChartKind::GrowthRate)[0], 0.0);
        assert_eq!(chart.series(ChartKind::GrowthRate)[1], 20.0);
        // The stored forecast keeps its unperturbed values.
        assert_eq!(fc.values().len(), 16);
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let (ds, fc) = inputs();
        let a = ChartSeries::build(&ds, &fc, Fluctuation::new(0.1), &mut StdRng::seed_from_u64(42));
        let b = ChartSeries::build(&ds, &fc, Fluctuation::new(0.1), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fluctuation_stays_within_bounds() {
        let (ds, fc) = inputs();
        let chart = ChartSeries::build(&ds, &fc, Fluctuation::new(0.1), &mut StdRng::seed_from_u64(1));
        let demand = chart.series(ChartKind::Demand);
        for (i, point) in fc.future().iter().enumerate() {
            let shown = demand[4 + i];
            assert!(shown >= point.value * 0.9 - 1e-9 && shown <= point.value * 1.1 + 1e-9);
        }
    }

    #[test]
    fn test_derived_series_without_fluctuation() {
        let (ds, fc) = inputs();
        let chart = ChartSeries::build(&ds, &fc, Fluctuation::NONE, &mut StdRng::seed_from_u64(0));
        let demand = chart.series(ChartKind::Demand);

        assert!(chart.series(ChartKind::Price)[4..].iter().all(|p| *p == 25.0));
        for i in 4..chart.len() {
            assert_relative_eq!(chart.series(ChartKind::Revenue)[i], demand[i] * 25.0, epsilon = 1e-9);
            let expected = (demand[i] - demand[i - 1]) / demand[i - 1] * 100.0;
            assert_relative_eq!(chart.series(ChartKind::GrowthRate)[i], expected, epsilon = 1e-9);
        }
        let cumulative = chart.series(ChartKind::CumulativeDemand);
        assert_relative_eq!(cumulative[3], 500.0);
        assert_relative_eq!(cumulative[15], demand.iter().sum::<f64>(), epsilon = 1e-9);
        assert!(!chart.is_projected(3));
        assert!(chart.is_projected(4));
    }

    #[test]
    fn test_source_draws_differ_between_requests() {
        let (ds, fc) = inputs();
        let mut source = FluctuationSource::new(Fluctuation::new(0.1), Some(9));
        let first = source.chart_series(&ds, &fc);
        let second = source.chart_series(&ds, &fc);
        assert_eq!(&first.series(ChartKind::Demand)[..4], &second.series(ChartKind::Demand)[..4]);
        assert_ne!(first.series(ChartKind::Demand)[4..], second.series(ChartKind::Demand)[4..]);

        let mut replay = FluctuationSource::new(Fluctuation::new(0.1), Some(9));
        assert_eq!(replay.chart_series(&ds, &fc), first);
    }

    #[test]
    fn test_every_kind_has_a_series_and_distinct_colors() {
        let (ds, fc) = inputs();
        let chart = ChartSeries::build(&ds, &fc, Fluctuation::NONE, &mut StdRng::seed_from_u64(0));
        for kind in ChartKind::iter() {
            assert_eq!(chart.series(kind).len(), chart.len());
            assert_ne!(kind.historical_color(), kind.projected_color());
        }
        assert_eq!(ChartKind::GrowthRate.to_string(), "Rata de Creștere");
    }
}

pub mod chart_series;
pub mod forecaster;
pub mod scenario_simulator;
pub mod summary;

pub use chart_series::{ChartKind, ChartSeries, Fluctuation, FluctuationSource};
pub use forecaster::{AdditiveModel, FittedAdditiveModel, ForecastModel, FittedModel, forecast_dataset};
pub use scenario_simulator::{
    Baseline, InputError, PriceImpact, ProfitImpact, ScenarioSimulator, parse_amount,
};
pub use summary::{DemandSummary, Recommendation, TrendDirection};

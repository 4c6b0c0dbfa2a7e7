mod dataset;
mod forecast;

pub use dataset::DemandDataset;
pub use forecast::{ForecastPoint, ForecastSeries};

mod dialogs;
mod report;
mod root;
mod session;
mod state;

pub(crate) use state::PanelAction;

pub use report::{ForecastRow, forecast_rows, forecast_table, run_report};
pub use root::App;
pub use session::{LoadedData, Session};

use {
    crate::{
        app::session::LoadedData,
        ui::{UI_TEXT, render_report},
        utils::{month_label, round_units},
    },
    anyhow::{Context, Result},
    std::path::Path,
    tabled::{Table, Tabled, settings::Style},
};

/// One line of the headless forecast table.
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct ForecastRow {
    #[tabled(rename = "Luna")]
    pub month: String,
    #[tabled(rename = "Tip")]
    pub kind: String,
    #[tabled(rename = "Cerere")]
    pub actual: String,
    #[tabled(rename = "Prognoză Cerere")]
    pub forecast: i64,
}

pub fn forecast_rows(data: &LoadedData) -> Vec<ForecastRow> {
    let history_len = data.forecast.history_len();
    data.forecast
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let is_history = i < history_len;
            ForecastRow {
                month: month_label(point.date),
                kind: if is_history {
                    UI_TEXT.table_history.clone()
                } else {
                    UI_TEXT.table_projection.clone()
                },
                actual: data
                    .dataset
                    .records()
                    .get(i)
                    .map(|r| format!("{:.0}", r.demand))
                    .unwrap_or_default(),
                forecast: round_units(point.value),
            }
        })
        .collect()
}

pub fn forecast_table(data: &LoadedData) -> String {
    Table::new(forecast_rows(data))
        .with(Style::rounded())
        .to_string()
}

/// Headless mode: load, fit, print. Any failure propagates to a non-zero exit.
pub fn run_report(path: &Path) -> Result<()> {
    let data = LoadedData::from_path(path)
        .with_context(|| format!("{} {}", UI_TEXT.error_load_prefix, path.display()))?;

    println!("{}", UI_TEXT.app_heading);
    println!("{}: {}\n", UI_TEXT.label_source, data.source.display());
    println!("{}", render_report(&data.summary));
    println!("{}", forecast_table(&data));
    Ok(())
}

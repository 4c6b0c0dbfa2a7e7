use approx::assert_relative_eq;
use chrono::NaiveDate;
use demand_forecaster::analysis::{ChartKind, Fluctuation, FluctuationSource};
use demand_forecaster::app::{forecast_rows, forecast_table};
use demand_forecaster::ui::render_report;
use demand_forecaster::{DemandDataset, DemandRecord, LoadedData};

fn linear_history(months: usize) -> LoadedData {
    let records = (0..months)
        .map(|i| DemandRecord::new(format!("Luna {}", i + 1), 200.0 + 5.0 * i as f64, 40.0))
        .collect();
    let dataset = DemandDataset::from_records(records).unwrap();
    LoadedData::from_dataset(dataset, "vanzari.xlsx").unwrap()
}

#[test]
fn test_pipeline_extends_a_linear_history() {
    let data = linear_history(12);

    assert_eq!(data.forecast.history_len(), 12);
    assert_eq!(data.forecast.horizon(), 12);
    assert_eq!(
        data.forecast.points()[11].date,
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    );
    assert_eq!(
        data.forecast.future()[1].date,
        NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
    );
    for (i, value) in data.forecast.values().iter().enumerate() {
        assert_relative_eq!(*value, 200.0 + 5.0 * i as f64, epsilon = 1e-6);
    }
}

#[test]
fn test_summary_matches_its_definitions() {
    let data = linear_history(12);
    let s = &data.summary;

    // mean of 200..=255 step 5
    assert_eq!(s.avg_demand, 228);
    assert_eq!(s.next_month_forecast, 260);
    assert_eq!(s.next_month_label, "Ianuarie 2026");
    assert_eq!(s.next_month_revenue, (s.next_month_forecast as f64 * 40.0).round() as i64);
    assert_eq!(s.max_month, "Decembrie 2026");
    assert_eq!(s.min_month, "Ianuarie 2025");
    assert_relative_eq!(s.largest_increase, 5.0, epsilon = 1e-6);
}

#[test]
fn test_rendered_report_contains_all_blocks() {
    let data = linear_history(6);
    let text = render_report(&data.summary);

    assert!(text.contains("Calcule Detaliate"));
    assert!(text.contains("Predicții și Observații"));
    assert!(text.contains("Recomandări"));
    assert!(text.contains("campanii promoționale"));
    assert!(!text.contains("reducere a prețului"));
}

#[test]
fn test_forecast_table_lists_every_period() {
    let data = linear_history(3);
    let rows = forecast_rows(&data);

    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0].month, "Ianuarie 2025");
    assert_eq!(rows[0].actual, "200");
    assert_eq!(rows[3].actual, "");
    assert_eq!(rows[3].forecast, 215);

    let table = forecast_table(&data);
    assert!(table.contains("Prognoză Cerere"));
    assert!(table.contains("Martie 2026"));
}

#[test]
fn test_chart_series_leaves_stored_forecast_alone() {
    let data = linear_history(6);
    let before = data.forecast.clone();

    let mut source = FluctuationSource::new(Fluctuation::new(0.1), Some(3));
    let chart = data.chart_series(&mut source);

    assert_eq!(data.forecast, before);
    assert_eq!(chart.len(), 18);
    assert_eq!(chart.series(ChartKind::Demand)[5], 225.0);
}

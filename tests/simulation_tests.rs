use approx::assert_relative_eq;
use demand_forecaster::analysis::{Baseline, InputError, ScenarioSimulator};
use demand_forecaster::ui::input_error_text;
use demand_forecaster::{DemandDataset, DemandRecord};

fn baseline_from_rows(rows: &[(f64, f64)]) -> Baseline {
    let records = rows
        .iter()
        .enumerate()
        .map(|(i, (demand, price))| DemandRecord::new(format!("L{}", i), *demand, *price))
        .collect();
    Baseline::from_dataset(&DemandDataset::from_records(records).unwrap())
}

#[test]
fn test_baseline_is_the_last_row() {
    let baseline = baseline_from_rows(&[(80.0, 90.0), (50.0, 100.0)]);
    assert_eq!(baseline.current_demand, 50.0);
    assert_eq!(baseline.current_price, 100.0);
}

#[test]
fn test_price_and_profit_from_typed_input() {
    let baseline = baseline_from_rows(&[(80.0, 90.0), (50.0, 100.0)]);

    let price = ScenarioSimulator::price_from_input(&baseline, "110").unwrap();
    assert_eq!(price.new_demand, 45);

    let profit = ScenarioSimulator::profit_from_input(&baseline, "110", "60").unwrap();
    assert_eq!(profit.new_demand, 45);
    assert_relative_eq!(profit.profit, 2250.0);
}

#[test]
fn test_negative_margin_yields_loss() {
    let baseline = baseline_from_rows(&[(50.0, 100.0)]);
    let profit = ScenarioSimulator::profit_impact(&baseline, 90.0, 95.0).unwrap();
    assert_eq!(profit.new_demand, 55);
    assert_relative_eq!(profit.profit, -275.0);
}

#[test]
fn test_invalid_entries_are_reported_per_form() {
    let baseline = baseline_from_rows(&[(50.0, 100.0)]);
    assert_eq!(
        ScenarioSimulator::price_from_input(&baseline, "  "),
        Err(InputError::InvalidPrice)
    );
    assert_eq!(
        ScenarioSimulator::profit_from_input(&baseline, "abc", "60"),
        Err(InputError::InvalidPriceOrCost)
    );
    assert_eq!(
        input_error_text(InputError::InvalidPriceOrCost),
        "Introduceți valori valide pentru preț și cost!"
    );
}

#[test]
fn test_zero_price_history_is_rejected() {
    let baseline = baseline_from_rows(&[(50.0, 0.0)]);
    assert_eq!(
        ScenarioSimulator::price_from_input(&baseline, "10"),
        Err(InputError::ZeroBaselinePrice)
    );
}

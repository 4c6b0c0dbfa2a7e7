use std::fmt::Write;

use crate::{
    analysis::{
        DemandSummary, InputError, PriceImpact, ProfitImpact, Recommendation, TrendDirection,
    },
    ui::ui_text::{ICON_BULLET, UI_TEXT},
};

pub fn recommendation_text(rec: &Recommendation) -> String {
    let t = &*UI_TEXT;
    match rec {
        Recommendation::PriceReduction { cut_pct } => format!(
            "{} {}% {}",
            t.rec_price_cut_prefix, cut_pct, t.rec_price_cut_suffix
        ),
        Recommendation::Promotion => t.rec_promotion.clone(),
        Recommendation::StockOptimization => t.rec_stock.clone(),
        Recommendation::ProductionPlanning { month } => {
            format!("{} {}.", t.rec_production_prefix, month)
        }
        Recommendation::DistributionChannels => t.rec_distribution.clone(),
    }
}

pub fn render_calculations(s: &DemandSummary) -> String {
    let t = &*UI_TEXT;
    let units = &t.unit_label;
    let mut out = format!("{}\n\n", t.report_calc_heading);
    let _ = writeln!(out, "{} {} {} {}", ICON_BULLET, t.calc_avg_demand, s.avg_demand, units);
    let _ = writeln!(
        out,
        "{} {} {} {} ({} {})",
        ICON_BULLET, t.calc_max_demand, s.max_demand, units, t.calc_in_month, s.max_month
    );
    let _ = writeln!(
        out,
        "{} {} {} {} ({} {})",
        ICON_BULLET, t.calc_min_demand, s.min_demand, units, t.calc_in_month, s.min_month
    );
    let _ = writeln!(
        out,
        "{} {} {} {}",
        ICON_BULLET, t.calc_total_next_year, s.total_next_year, units
    );
    let _ = writeln!(
        out,
        "{} {} {} {}",
        ICON_BULLET, t.calc_next_month_revenue, s.next_month_revenue, t.money_label
    );
    out
}

pub fn render_predictions(s: &DemandSummary) -> String {
    let t = &*UI_TEXT;
    let units = &t.unit_label;
    let direction = match s.trend() {
        TrendDirection::Rising => &t.trend_rising,
        TrendDirection::Falling => &t.trend_falling,
    };

    let mut out = format!("{}\n\n", t.report_pred_heading);
    let _ = writeln!(
        out,
        "{} {} {} {} {} {} {}",
        ICON_BULLET,
        t.pred_trend_prefix,
        direction,
        t.pred_trend_by,
        s.trend_delta(),
        units,
        t.pred_trend_suffix
    );
    let _ = writeln!(
        out,
        "{} {} {:.0} {}",
        ICON_BULLET, t.pred_largest_increase, s.largest_increase, units
    );
    let _ = writeln!(
        out,
        "{} {} {:.0} {}",
        ICON_BULLET, t.pred_largest_decrease, s.largest_decrease, units
    );
    let _ = writeln!(
        out,
        "{} {} {} {}",
        ICON_BULLET, t.pred_month_prefix, s.max_month, t.pred_highest_month
    );
    let _ = writeln!(
        out,
        "{} {} {} {}",
        ICON_BULLET, t.pred_month_prefix, s.min_month, t.pred_lowest_month
    );
    out
}

pub fn render_recommendations(s: &DemandSummary) -> String {
    let mut out = format!("{}\n\n", UI_TEXT.report_rec_heading);
    for rec in s.recommendations() {
        out.push_str(&recommendation_text(&rec));
        out.push('\n');
    }
    out
}

/// The three report blocks in display order.
pub fn render_report(s: &DemandSummary) -> String {
    [
        render_calculations(s),
        render_predictions(s),
        render_recommendations(s),
    ]
    .join("\n")
}

pub fn price_result_text(result: &PriceImpact) -> String {
    format!("{} {} {}.", UI_TEXT.sim_result_demand, result.new_demand, UI_TEXT.unit_label)
}

pub fn profit_result_text(result: &ProfitImpact) -> String {
    format!("{} {:.0} {}.", UI_TEXT.sim_result_profit, result.profit, UI_TEXT.money_label)
}

/// Message shown when a simulation form is submitted with unusable input.
pub fn input_error_text(err: InputError) -> &'static str {
    let t = &*UI_TEXT;
    match err {
        InputError::InvalidPrice => t.error_invalid_price.as_str(),
        InputError::InvalidPriceOrCost => t.error_invalid_price_or_cost.as_str(),
        InputError::ZeroBaselinePrice => t.error_zero_baseline_price.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(next: i64, last: f64, increase: f64) -> DemandSummary {
        DemandSummary {
            avg_demand: 120,
            max_demand: 180,
            max_month: "Decembrie 2025".to_string(),
            min_demand: 90,
            min_month: "Februarie 2025".to_string(),
            total_next_year: 1800,
            next_month_forecast: next,
            next_month_label: "Ianuarie 2026".to_string(),
            next_month_revenue: next * 10,
            last_value: last,
            last_price: 10.0,
            largest_increase: increase,
            largest_decrease: -7.4,
        }
    }

    #[test]
    fn test_calculations_block() {
        let text = render_calculations(&summary(150, 140.0, 12.0));
        assert!(text.starts_with("📊 ** Calcule Detaliate **\n\n"));
        assert!(text.contains("• Media cererii istorice: 120 unități\n"));
        assert!(text.contains("• Prognoza cererii maxime: 180 unități (în luna Decembrie 2025)"));
        assert!(text.contains("• Venituri estimate pentru luna următoare: 1500 unități monetare"));
    }

    #[test]
    fn test_predictions_block_rising() {
        let text = render_predictions(&summary(150, 140.0, 12.0));
        assert!(text.contains("• Cererea este 🔼 în creștere cu 10 unități față de luna anterioară"));
        assert!(text.contains("este de 12 unități"));
        assert!(text.contains("este de -7 unități"));
        assert!(text.contains("• Luna Februarie 2025 este prognozată să aibă cea mai mică cerere"));
    }

    #[test]
    fn test_recommendations_exactly_one_pricing_message() {
        for (next, last) in [(130, 140.0), (150, 140.0), (140, 140.0)] {
            let text = render_recommendations(&summary(next, last, 5.0));
            let cut = text.contains("reducere a prețului");
            let promo = text.contains("campanii promoționale");
            assert!(cut ^ promo, "next {} last {}", next, last);
            assert!(!text.contains("optimizarea stocurilor"));
            assert!(text.contains("cererii din luna Ianuarie 2026."));
        }
    }

    #[test]
    fn test_simulation_result_text() {
        let price = PriceImpact { new_price: 110.0, new_demand: 45 };
        assert_eq!(price_result_text(&price), "Cererea estimată: 45 unități.");
        let profit = ProfitImpact {
            new_price: 110.0,
            unit_cost: 60.0,
            new_demand: 45,
            profit: 2250.0,
        };
        assert_eq!(profit_result_text(&profit), "Profitul estimat: 2250 unități monetare.");
    }

    #[test]
    fn test_input_errors_use_form_messages() {
        assert_eq!(input_error_text(InputError::InvalidPrice), "Introduceți un preț valid!");
        assert_eq!(
            input_error_text(InputError::InvalidPriceOrCost),
            UI_TEXT.error_invalid_price_or_cost
        );
        assert!(input_error_text(InputError::ZeroBaselinePrice).contains("zero"));
    }

    #[test]
    fn test_recommendation_wording_comes_from_ui_text() {
        let cut = recommendation_text(&Recommendation::PriceReduction { cut_pct: 5 });
        assert_eq!(
            cut,
            "🔽 Se recomandă o reducere a prețului produsului cu 5% pentru a stimula cererea în luna următoare."
        );
        let plan = recommendation_text(&Recommendation::ProductionPlanning {
            month: "Iulie 2025".to_string(),
        });
        assert!(plan.starts_with(UI_TEXT.rec_production_prefix.as_str()));
        assert!(plan.ends_with("luna Iulie 2025."));
        assert_eq!(recommendation_text(&Recommendation::Promotion), UI_TEXT.rec_promotion);
    }

    #[test]
    fn test_report_has_three_blocks_in_order() {
        let text = render_report(&summary(150, 140.0, 25.0));
        let calc = text.find("Calcule Detaliate").unwrap();
        let pred = text.find("Predicții și Observații").unwrap();
        let rec = text.find("Recomandări").unwrap();
        assert!(calc < pred && pred < rec);
        assert!(text.contains("📈 Creșterea prognozată"));
    }
}

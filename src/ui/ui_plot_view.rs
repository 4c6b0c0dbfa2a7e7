use eframe::egui::{Context, RichText, Window};
use egui_plot::{Axis, AxisHints, Corner, GridMark, Legend, Plot};

use crate::analysis::{ChartKind, ChartSeries};
use crate::config::{DF, PLOT_CONFIG, constants::PCT_DECIMALS};
use crate::ui::plot_layers::{
    LayerContext, MarkerLayer, PlotLayer, SeparatorLayer, SeriesLineLayer, ZeroLineLayer,
};
use crate::ui::ui_text::UI_TEXT;
use crate::utils::short_month_label;

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if raw_step <= 0.0 || !raw_step.is_finite() {
        return 1.0;
    }
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag;

    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never finer than one month
    (nice_step * mag).max(1.0)
}

fn format_value(kind: ChartKind, value: f64) -> String {
    if kind.is_percentage() {
        format!("{:.*}%", PCT_DECIMALS, value)
    } else {
        format!("{:.0}", value)
    }
}

// Month labels on whole indices only; anything between months stays blank.
fn create_time_axis(series: &ChartSeries) -> AxisHints<'static> {
    let labels: Vec<String> = series.dates.iter().map(|d| short_month_label(*d)).collect();

    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if (mark.value - rounded).abs() > 1e-6 || rounded < 0.0 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        })
}

fn create_y_axis(kind: ChartKind) -> AxisHints<'static> {
    AxisHints::new(Axis::Y)
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(move |mark, _range| format_value(kind, mark.value))
}

/// Y range of the series with `plot_y_padding_pct` head-room on both sides.
fn padded_y_bounds(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let span = (max - min).max(max.abs().max(1.0) * 0.1);
    let pad = span * PLOT_CONFIG.plot_y_padding_pct;
    (min - pad, max + pad)
}

/// Chart window for one series kind. Returns false once the user closes it.
pub(crate) fn render_chart_window(ctx: &Context, kind: ChartKind, series: &ChartSeries) -> bool {
    let mut open = true;
    let title = format!("{} {}", UI_TEXT.chart_title_prefix, kind);

    Window::new(title.as_str())
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([900.0, 520.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(&title).strong().size(16.0).color(PLOT_CONFIG.color_text_primary));

            if series.is_empty() {
                return;
            }

            let dates = series.dates.clone();
            let (y_min, y_max) = padded_y_bounds(series.series(kind));
            let x_max = (series.len() - 1) as f64;

            Plot::new(("demand_chart", kind))
                .legend(Legend::default().position(Corner::LeftTop))
                .custom_x_axes(vec![create_time_axis(series)])
                .custom_y_axes(vec![create_y_axis(kind)])
                .label_formatter(move |name, point| {
                    let idx = point.x.round();
                    let date = if idx >= 0.0 {
                        dates.get(idx as usize).map(|d| short_month_label(*d))
                    } else {
                        None
                    };
                    match date {
                        Some(date) if name.is_empty() => {
                            format!("{}\n{}", date, format_value(kind, point.y))
                        }
                        Some(date) => format!("{}\n{}\n{}", name, date, format_value(kind, point.y)),
                        None => String::new(),
                    }
                })
                .x_grid_spacer(move |input| {
                    let (min, max) = input.bounds;
                    let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_axis_label_count);
                    let start = (min / step).ceil() as i64;
                    let end = (max / step).floor() as i64;
                    (start..=end)
                        .map(|i| GridMark {
                            value: i as f64 * step,
                            step_size: step,
                        })
                        .collect()
                })
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.set_plot_bounds_x(-0.5..=x_max + 0.5);
                    plot_ui.set_plot_bounds_y(y_min..=y_max);

                    let layer_ctx = LayerContext { kind, series };

                    let mut layers: Vec<Box<dyn PlotLayer>> = Vec::with_capacity(4);
                    if kind.is_percentage() {
                        layers.push(Box::new(ZeroLineLayer));
                    }
                    layers.push(Box::new(SeparatorLayer));
                    layers.push(Box::new(SeriesLineLayer));
                    layers.push(Box::new(MarkerLayer));

                    for layer in layers {
                        layer.render(plot_ui, &layer_ctx);
                    }
                });
        });

    if !open && DF.log_charts {
        log::info!("Chart window closed: {}", kind);
    }
    open
}

use eframe::egui::Color32;
use egui_plot::{HLine, Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points, VLine};

use crate::analysis::{ChartKind, ChartSeries};
use crate::config::{CHART, PLOT_CONFIG};
use crate::ui::ui_text::UI_TEXT;

pub struct LayerContext<'a> {
    pub kind: ChartKind,
    pub series: &'a ChartSeries,
}

impl LayerContext<'_> {
    fn points(&self, range: std::ops::Range<usize>) -> PlotPoints<'static> {
        let values = self.series.series(self.kind);
        PlotPoints::new(range.map(|i| [i as f64, values[i]]).collect())
    }

    fn history_end(&self) -> usize {
        self.series.history_len.min(self.series.len())
    }
}

pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

/// Connecting line: solid over history, dashed over the projection.
pub struct SeriesLineLayer;

impl PlotLayer for SeriesLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let end = ctx.history_end();
        let total = ctx.series.len();

        plot_ui.line(
            Line::new("", ctx.points(0..end))
                .color(ctx.kind.historical_color())
                .width(CHART.line_width),
        );

        if end < total {
            // Start on the last observation so the two segments join.
            let start = end.saturating_sub(1);
            plot_ui.line(
                Line::new("", ctx.points(start..total))
                    .color(ctx.kind.projected_color())
                    .width(CHART.line_width)
                    .style(LineStyle::Dashed { length: 6.0 }),
            );
        }
    }
}

pub struct MarkerLayer;

impl PlotLayer for MarkerLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let end = ctx.history_end();
        let total = ctx.series.len();

        plot_ui.points(
            Points::new(UI_TEXT.legend_history.as_str(), ctx.points(0..end))
                .color(ctx.kind.historical_color())
                .shape(MarkerShape::Circle)
                .radius(CHART.marker_radius),
        );
        if end < total {
            plot_ui.points(
                Points::new(UI_TEXT.legend_projection.as_str(), ctx.points(end..total))
                    .color(ctx.kind.projected_color())
                    .shape(MarkerShape::Circle)
                    .radius(CHART.marker_radius),
            );
        }
    }
}

/// Dashed vertical line between the last observation and the first projection.
pub struct SeparatorLayer;

impl PlotLayer for SeparatorLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let end = ctx.history_end();
        if end == 0 || end >= ctx.series.len() {
            return;
        }
        plot_ui.vline(
            VLine::new("", end as f64 - 0.5)
                .color(PLOT_CONFIG.color_separator)
                .width(1.0)
                .style(LineStyle::Dashed { length: 5.0 }),
        );
    }
}

/// Zero baseline, only meaningful for growth rates.
pub struct ZeroLineLayer;

impl PlotLayer for ZeroLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, _ctx: &LayerContext) {
        plot_ui.hline(
            HLine::new("", 0.0)
                .color(Color32::from_gray(70))
                .width(1.0),
        );
    }
}

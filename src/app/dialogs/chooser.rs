use eframe::egui::Context;

use crate::{
    app::{
        App,
        dialogs::DialogView,
        state::{ChartViewState, ChooserState, DialogState},
    },
    config::DF,
    ui::{ChooserOutcome, render_chart_chooser, show_error},
};

impl DialogView for ChooserState {
    fn tick(self, app: &mut App, ctx: &Context) -> DialogState {
        match render_chart_chooser(ctx, self.highlighted) {
            ChooserOutcome::Pending => DialogState::ChartChooser(self),
            ChooserOutcome::Cancelled => DialogState::Idle,
            ChooserOutcome::Chosen(kind) => {
                app.last_chart_kind = kind;
                let loaded = match app.session.loaded() {
                    Ok(loaded) => loaded,
                    Err(e) => {
                        show_error(&e.to_string());
                        return DialogState::Idle;
                    }
                };
                let series = loaded.chart_series(&mut app.fluctuation);
                if DF.log_charts {
                    log::info!("Opening chart {} over {} points", kind, series.len());
                }
                DialogState::ChartView(ChartViewState { kind, series })
            }
        }
    }
}

use eframe::egui::Context;

use crate::app::{
    App,
    dialogs::DialogView,
    state::{ChartViewState, DialogState},
};
use crate::ui::render_chart_window;

impl DialogView for ChartViewState {
    fn tick(self, _app: &mut App, ctx: &Context) -> DialogState {
        if render_chart_window(ctx, self.kind, &self.series) {
            DialogState::ChartView(self)
        } else {
            DialogState::Idle
        }
    }
}

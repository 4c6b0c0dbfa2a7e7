use eframe::egui::Context;

use crate::{
    analysis::ScenarioSimulator,
    app::{
        App,
        dialogs::DialogView,
        state::{DialogState, PriceFormState},
    },
    ui::{
        FormOutcome, UI_TEXT, input_error_text, price_result_text, render_price_form, show_error,
        show_info,
    },
};

impl DialogView for PriceFormState {
    fn tick(mut self, _app: &mut App, ctx: &Context) -> DialogState {
        match render_price_form(ctx, &self.baseline, &mut self.price_text) {
            FormOutcome::Pending => DialogState::PriceForm(self),
            FormOutcome::Cancel => DialogState::Idle,
            FormOutcome::Submit => {
                match ScenarioSimulator::price_from_input(&self.baseline, &self.price_text) {
                    Ok(result) => {
                        show_info(&UI_TEXT.title_sim_result, &price_result_text(&result));
                        DialogState::Idle
                    }
                    // Form stays open with the typed text intact.
                    Err(e) => {
                        show_error(input_error_text(e));
                        DialogState::PriceForm(self)
                    }
                }
            }
        }
    }
}

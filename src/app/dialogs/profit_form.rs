use eframe::egui::Context;

use crate::{
    analysis::ScenarioSimulator,
    app::{
        App,
        dialogs::DialogView,
        state::{DialogState, ProfitFormState},
    },
    ui::{
        FormOutcome, UI_TEXT, input_error_text, profit_result_text, render_profit_form, show_error,
        show_info,
    },
};

impl DialogView for ProfitFormState {
    fn tick(mut self, _app: &mut App, ctx: &Context) -> DialogState {
        let outcome = render_profit_form(
            ctx,
            &self.baseline,
            &mut self.price_text,
            &mut self.cost_text,
        );
        match outcome {
            FormOutcome::Pending => DialogState::ProfitForm(self),
            FormOutcome::Cancel => DialogState::Idle,
            FormOutcome::Submit => match ScenarioSimulator::profit_from_input(
                &self.baseline,
                &self.price_text,
                &self.cost_text,
            ) {
                Ok(result) => {
                    show_info(&UI_TEXT.title_sim_result, &profit_result_text(&result));
                    DialogState::Idle
                }
                Err(e) => {
                    show_error(input_error_text(e));
                    DialogState::ProfitForm(self)
                }
            },
        }
    }
}

use {
    crate::{
        analysis::{Baseline, ChartKind},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt},
    },
    eframe::egui::{Align2, Context, Key, Order, RichText, TextEdit, Ui, Window},
    strum::IntoEnumIterator,
};

/// Result of one frame of the chart chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChooserOutcome {
    Pending,
    Chosen(ChartKind),
    Cancelled,
}

/// Result of one frame of a simulation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormOutcome {
    Pending,
    Submit,
    Cancel,
}

fn modal_window<'open>(title: &str) -> Window<'open> {
    Window::new(title)
        .collapsible(false)
        .resizable(false)
        .order(Order::Foreground)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
}

pub(crate) fn render_chart_chooser(ctx: &Context, highlighted: ChartKind) -> ChooserOutcome {
    let mut outcome = ChooserOutcome::Pending;
    let mut open = true;

    modal_window(&UI_TEXT.chooser_title)
        .open(&mut open)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                for kind in ChartKind::iter() {
                    ui.add_space(6.0);
                    let response = ui.action_button(&kind.to_string());
                    let response = if kind == highlighted {
                        response.highlight()
                    } else {
                        response
                    };
                    if response.clicked() {
                        outcome = ChooserOutcome::Chosen(kind);
                    }
                }
                ui.add_space(6.0);
            });
        });

    if !open || ctx.input(|i| i.key_pressed(Key::Escape)) {
        return ChooserOutcome::Cancelled;
    }
    outcome
}

fn baseline_line(ui: &mut Ui, baseline: &Baseline) {
    ui.metric(
        &UI_TEXT.sim_baseline,
        &format!(
            "{} × {}",
            baseline.current_demand, baseline.current_price
        ),
        UI_CONFIG.colors.label,
    );
    ui.add_space(4.0);
}

fn amount_field(ui: &mut Ui, label: &str, text: &mut String) -> bool {
    ui.label(RichText::new(label).size(15.0));
    let response = ui.add(TextEdit::singleline(text).desired_width(UI_CONFIG.button_width));
    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
}

fn form_buttons(ui: &mut Ui, enter_pressed: bool) -> FormOutcome {
    let mut outcome = if enter_pressed {
        FormOutcome::Submit
    } else {
        FormOutcome::Pending
    };
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.action_button(&UI_TEXT.btn_calculate).clicked() {
            outcome = FormOutcome::Submit;
        }
        if ui.button(&UI_TEXT.btn_cancel).clicked() {
            outcome = FormOutcome::Cancel;
        }
    });
    outcome
}

pub(crate) fn render_price_form(
    ctx: &Context,
    baseline: &Baseline,
    price_text: &mut String,
) -> FormOutcome {
    let mut outcome = FormOutcome::Pending;
    let mut open = true;

    modal_window(&UI_TEXT.sim_price_title)
        .open(&mut open)
        .show(ctx, |ui| {
            baseline_line(ui, baseline);
            let enter = amount_field(ui, &UI_TEXT.sim_new_price, price_text);
            outcome = form_buttons(ui, enter);
        });

    if !open {
        return FormOutcome::Cancel;
    }
    outcome
}

pub(crate) fn render_profit_form(
    ctx: &Context,
    baseline: &Baseline,
    price_text: &mut String,
    cost_text: &mut String,
) -> FormOutcome {
    let mut outcome = FormOutcome::Pending;
    let mut open = true;

    modal_window(&UI_TEXT.sim_profit_title)
        .open(&mut open)
        .show(ctx, |ui| {
            baseline_line(ui, baseline);
            let enter_price = amount_field(ui, &UI_TEXT.sim_new_price, price_text);
            ui.add_space(4.0);
            let enter_cost = amount_field(ui, &UI_TEXT.sim_unit_cost, cost_text);
            outcome = form_buttons(ui, enter_price || enter_cost);
        });

    if !open {
        return FormOutcome::Cancel;
    }
    outcome
}

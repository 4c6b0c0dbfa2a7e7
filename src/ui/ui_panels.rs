use eframe::egui::{
    Align, CentralPanel, Context, FontId, Layout, RichText, ScrollArea, TextEdit, Ui,
};

use crate::app::PanelAction;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

/// Main window: heading, descriptions, the four actions and the statistics text.
pub struct MainPanel<'a> {
    report: &'a str,
    source: Option<&'a str>,
}

impl<'a> MainPanel<'a> {
    pub fn new(report: &'a str, source: Option<&'a str>) -> Self {
        Self { report, source }
    }

    pub fn render(&self, ctx: &Context) -> Option<PanelAction> {
        let mut action = None;

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(&UI_TEXT.app_heading)
                            .size(26.0)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.add_space(12.0);
                    ui.label(RichText::new(&UI_TEXT.app_description).size(15.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(&UI_TEXT.app_features).italics());
                    ui.add_space(12.0);

                    if ui.action_button(&UI_TEXT.btn_load).clicked() {
                        action = Some(PanelAction::LoadWorkbook);
                    }
                    ui.add_space(8.0);
                    if ui.action_button(&UI_TEXT.btn_chart).clicked() {
                        action = Some(PanelAction::OpenChart);
                    }
                    ui.add_space(8.0);

                    // Two simulations side by side, centred as a pair.
                    let pair_width = UI_CONFIG.button_width * 2.0 + ui.spacing().item_spacing.x;
                    ui.allocate_ui_with_layout(
                        [pair_width, 36.0].into(),
                        Layout::left_to_right(Align::Center),
                        |ui| {
                            if ui.action_button(&UI_TEXT.btn_sim_price).clicked() {
                                action = Some(PanelAction::SimulatePrice);
                            }
                            if ui.action_button(&UI_TEXT.btn_sim_profit).clicked() {
                                action = Some(PanelAction::SimulateProfit);
                            }
                        },
                    );

                    if let Some(source) = self.source {
                        ui.add_space(6.0);
                        ui.label_subdued(format!("{}: {}", UI_TEXT.label_source, source));
                    }
                });

                ui.add_space(12.0);
                self.render_report(ui);
            });

        action
    }

    fn render_report(&self, ui: &mut Ui) {
        UI_CONFIG.report_frame().show(ui, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if self.report.is_empty() {
                        ui.label_subheader(UI_TEXT.label_empty_report.as_str());
                        return;
                    }
                    // Read-only: a &str buffer cannot be edited.
                    let mut text = self.report;
                    ui.add(
                        TextEdit::multiline(&mut text)
                            .font(FontId::monospace(UI_CONFIG.report_font_size))
                            .text_color(UI_CONFIG.colors.report_text)
                            .frame(false)
                            .desired_width(f32::INFINITY),
                    );
                });
        });
    }
}

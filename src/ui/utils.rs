use eframe::egui::{Context, Visuals};
use rfd::{MessageDialog, MessageLevel};

use crate::{config::DF, ui::{UI_CONFIG, UI_TEXT}};

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.report_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

fn show_message(level: MessageLevel, title: &str, body: &str) {
    if DF.log_dialogs {
        log::info!("Dialog [{}]: {}", title, body);
    }
    // Blocks until dismissed, like the rest of the frame's work.
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(body)
        .show();
}

pub fn show_info(title: &str, body: &str) {
    show_message(MessageLevel::Info, title, body);
}

pub fn show_error(body: &str) {
    log::warn!("{}", body);
    show_message(MessageLevel::Error, &UI_TEXT.title_error, body);
}

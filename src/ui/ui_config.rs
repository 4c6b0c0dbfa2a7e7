use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub report_panel: Color32,
    pub report_text: Color32,
    pub button: Color32,
    pub button_text: Color32,
}

#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub button_width: f32,
    pub report_font_size: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(204, 231, 232), // Pale teal
        heading: Color32::WHITE,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 61, 89), // Deep navy
        report_panel: Color32::from_rgb(46, 71, 86),  // Dark petrol
        report_text: Color32::WHITE,
        button: Color32::from_rgb(70, 130, 180), // Steel blue
        button_text: Color32::WHITE,
    },
    button_width: 240.0,
    report_font_size: 14.0,
};

impl UiConfig {
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame around the read-only statistics text
    pub fn report_frame(&self) -> Frame {
        Frame {
            fill: self.colors.report_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
    }
}

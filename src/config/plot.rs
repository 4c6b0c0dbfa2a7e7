//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- SERIES COLORS (historical side) ---
    pub demand_color: Color32,
    pub price_color: Color32,
    pub revenue_color: Color32,
    pub growth_color: Color32,
    pub cumulative_color: Color32,

    // --- SERIES COLORS (projected side) ---
    /// Projected markers for every chart except growth rate
    pub projected_color: Color32,
    /// Growth rate already uses orange for history, so projections go red
    pub projected_growth_color: Color32,

    /// Vertical dashed line separating history from projection
    pub color_separator: Color32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)

    /// Target number of month labels along the x axis
    pub x_axis_label_count: f64,

    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    demand_color: Color32::from_rgb(30, 100, 230),   // Blue
    price_color: Color32::from_rgb(40, 160, 60),     // Green
    revenue_color: Color32::from_rgb(140, 60, 180),  // Purple
    growth_color: Color32::from_rgb(255, 165, 0),    // Orange
    cumulative_color: Color32::from_rgb(150, 90, 45), // Brown

    projected_color: Color32::from_rgb(255, 165, 0),     // Orange
    projected_growth_color: Color32::from_rgb(220, 40, 40), // Red

    color_separator: Color32::from_gray(80),

    plot_y_padding_pct: 0.05,
    x_axis_label_count: 8.0,

    color_text_primary: Color32::WHITE,
    color_text_subdued: Color32::GRAY,
};

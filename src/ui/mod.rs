mod dialogs;
mod plot_layers;
mod report_text;
mod styles;
mod ui_config;
mod ui_panels;
mod ui_plot_view;
mod ui_text;
mod utils;

pub(crate) use dialogs::{
    ChooserOutcome, FormOutcome, render_chart_chooser, render_price_form, render_profit_form,
};
pub use report_text::{
    input_error_text, price_result_text, profit_result_text, recommendation_text, render_calculations,
    render_predictions, render_recommendations, render_report,
};
pub(crate) use styles::UiStyleExt;
pub use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use ui_panels::MainPanel;
pub(crate) use ui_plot_view::render_chart_window;
pub use utils::{setup_custom_visuals, show_error, show_info};

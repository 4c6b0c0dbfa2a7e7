pub(super) mod chart_view;
pub(super) mod chooser;
pub(super) mod dialog_view;
pub(super) mod price_form;
pub(super) mod profit_form;

pub(crate) use dialog_view::DialogView;

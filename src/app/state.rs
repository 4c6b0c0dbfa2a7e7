// src/app/state.rs

use crate::analysis::{Baseline, ChartKind, ChartSeries};

/// Which overlay (if any) is open. Taken and replaced every frame.
#[derive(Default)]
pub(crate) enum DialogState {
    #[default]
    Idle,
    ChartChooser(ChooserState),
    ChartView(ChartViewState),
    PriceForm(PriceFormState),
    ProfitForm(ProfitFormState),
}

#[derive(Clone, Copy)]
pub(crate) struct ChooserState {
    pub(crate) highlighted: ChartKind,
}

pub(crate) struct ChartViewState {
    pub(crate) kind: ChartKind,
    pub(crate) series: ChartSeries,
}

#[derive(Clone)]
pub(crate) struct PriceFormState {
    pub(crate) baseline: Baseline,
    pub(crate) price_text: String,
}

#[derive(Clone)]
pub(crate) struct ProfitFormState {
    pub(crate) baseline: Baseline,
    pub(crate) price_text: String,
    pub(crate) cost_text: String,
}

impl PriceFormState {
    pub(crate) fn new(baseline: Baseline) -> Self {
        Self {
            baseline,
            price_text: String::new(),
        }
    }
}

impl ProfitFormState {
    pub(crate) fn new(baseline: Baseline) -> Self {
        Self {
            baseline,
            price_text: String::new(),
            cost_text: String::new(),
        }
    }
}

/// Main-panel button presses, handled after the panel is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelAction {
    LoadWorkbook,
    OpenChart,
    SimulatePrice,
    SimulateProfit,
}

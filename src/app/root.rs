use {
    eframe::{Frame, Storage, egui::Context},
    rfd::FileDialog,
    serde::{Deserialize, Serialize},
    std::{mem, path::{Path, PathBuf}},
};

use crate::{
    Cli,
    analysis::{Baseline, ChartKind, Fluctuation, FluctuationSource},
    app::{
        PanelAction,
        dialogs::DialogView,
        session::Session,
        state::{ChooserState, DialogState, PriceFormState, ProfitFormState},
    },
    config::{CHART, DF, WORKBOOK},
    ui::{MainPanel, UI_TEXT, render_report, setup_custom_visuals, show_error, show_info},
};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    /// Directory the file picker opens in. Persists across sessions.
    pub(crate) last_dir: Option<PathBuf>,
    pub(crate) last_chart_kind: ChartKind,
    #[serde(skip)]
    pub(crate) session: Session,
    #[serde(skip)]
    pub(crate) report_text: String,
    #[serde(skip)]
    pub(crate) fluctuation: FluctuationSource,
    #[serde(skip)]
    dialog: DialogState,
}

impl Default for App {
    fn default() -> Self {
        Self {
            last_dir: None,
            last_chart_kind: ChartKind::default(),
            session: Session::default(),
            report_text: String::new(),
            fluctuation: FluctuationSource::default(),
            dialog: DialogState::default(),
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        setup_custom_visuals(&cc.egui_ctx);

        let pct = if args.no_fluctuation {
            0.0
        } else {
            CHART.fluctuation_pct
        };
        app.fluctuation = FluctuationSource::new(Fluctuation::new(pct), args.seed);

        if let Some(path) = args.file.as_deref() {
            app.load_from(path);
        }
        app
    }

    pub(crate) fn handle_action(&mut self, action: PanelAction) {
        if DF.log_dialogs {
            log::info!("Action: {:?}", action);
        }
        match action {
            PanelAction::LoadWorkbook => self.pick_and_load(),
            PanelAction::OpenChart => {
                if self.guard_loaded() {
                    self.dialog = DialogState::ChartChooser(ChooserState {
                        highlighted: self.last_chart_kind,
                    });
                }
            }
            PanelAction::SimulatePrice => {
                if let Some(baseline) = self.loaded_baseline() {
                    self.dialog = DialogState::PriceForm(PriceFormState::new(baseline));
                }
            }
            PanelAction::SimulateProfit => {
                if let Some(baseline) = self.loaded_baseline() {
                    self.dialog = DialogState::ProfitForm(ProfitFormState::new(baseline));
                }
            }
        }
    }

    fn pick_and_load(&mut self) {
        let mut dialog =
            FileDialog::new().add_filter(WORKBOOK.file_filter_name, WORKBOOK.file_extensions);
        if let Some(dir) = &self.last_dir {
            dialog = dialog.set_directory(dir);
        }

        match dialog.pick_file() {
            Some(path) => self.load_from(&path),
            None => show_info(&UI_TEXT.title_info, &UI_TEXT.info_no_file),
        }
    }

    /// Replaces the session on success. On failure the previous data stays.
    pub(crate) fn load_from(&mut self, path: &Path) {
        match self.session.load(path) {
            Ok(loaded) => {
                self.report_text = render_report(&loaded.summary);
                self.last_dir = path.parent().map(Path::to_path_buf);
            }
            Err(e) => show_error(&format!("{} {:#}", UI_TEXT.error_load_prefix, e)),
        }
    }

    fn guard_loaded(&self) -> bool {
        match self.session.loaded() {
            Ok(_) => true,
            Err(e) => {
                show_error(&e.to_string());
                false
            }
        }
    }

    fn loaded_baseline(&self) -> Option<Baseline> {
        match self.session.loaded() {
            Ok(loaded) => Some(loaded.baseline()),
            Err(e) => {
                show_error(&e.to_string());
                None
            }
        }
    }

    fn source_label(&self) -> Option<String> {
        self.session
            .loaded()
            .ok()
            .map(|loaded| loaded.source.display().to_string())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let source = self.source_label();
        let action = MainPanel::new(&self.report_text, source.as_deref()).render(ctx);

        let current = mem::take(&mut self.dialog);
        self.dialog = match current {
            DialogState::Idle => DialogState::Idle,
            DialogState::ChartChooser(s) => s.tick(self, ctx),
            DialogState::ChartView(s) => s.tick(self, ctx),
            DialogState::PriceForm(s) => s.tick(self, ctx),
            DialogState::ProfitForm(s) => s.tick(self, ctx),
        };

        // Forms and the chooser own the input while open; a chart window does not.
        if let Some(action) = action {
            if matches!(self.dialog, DialogState::Idle | DialogState::ChartView(_)) {
                self.handle_action(action);
            }
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_dialogs {
            log::info!(
                "💾 SAVE [App]: last_dir = {:?}, last_chart_kind = {}",
                self.last_dir,
                self.last_chart_kind
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

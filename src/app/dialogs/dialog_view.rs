use eframe::egui::Context;

use crate::app::App;
use crate::app::state::DialogState;

/// One frame of an open overlay. Returns the state for the next frame.
pub(crate) trait DialogView {
    fn tick(self, app: &mut App, ctx: &Context) -> DialogState;
}

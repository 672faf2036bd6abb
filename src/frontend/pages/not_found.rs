//! Not-found page.

use super::PageAction;
use crate::i18n::{tr, TranslationKey};
use egui::Ui;

/// Render the not-found page
pub fn render_not_found(ui: &mut Ui) -> Option<PageAction> {
    ui.add_space(24.0);
    ui.heading(tr(TranslationKey::NotFoundTitle));
    ui.add_space(8.0);
    ui.label(tr(TranslationKey::NotFoundMessage));
    None
}

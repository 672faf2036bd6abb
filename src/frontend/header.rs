//! Site header — brand, navigation, language toggle.

use crate::i18n::{self, tr, tr_for, TranslationKey};
use egui::{RichText, Ui};

const RESUME_URL: &str = "https://chennima.github.io/resume";

/// Actions produced by the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    GoHome,
    GoBlogList,
    ToggleLanguage,
    OpenPreferences,
}

/// Render the header bar
pub fn render_header(ui: &mut Ui) -> Option<HeaderAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 12.0;

        if ui
            .link(RichText::new(tr(TranslationKey::SiteTitle)).heading().strong())
            .clicked()
        {
            action = Some(HeaderAction::GoHome);
        }

        if ui.link(tr(TranslationKey::HeaderBlog)).clicked() {
            action = Some(HeaderAction::GoBlogList);
        }

        ui.hyperlink_to(tr(TranslationKey::HeaderResume), RESUME_URL);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // The toggle is labelled with the language it switches to
            let target = i18n::current_language().other();
            if ui.button(tr_for(target, TranslationKey::LangLabel)).clicked() {
                action = Some(HeaderAction::ToggleLanguage);
            }

            if ui
                .button("⚙")
                .on_hover_text(tr(TranslationKey::PrefTitle))
                .clicked()
            {
                action = Some(HeaderAction::OpenPreferences);
            }
        });
    });

    action
}

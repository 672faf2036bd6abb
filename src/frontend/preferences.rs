//! Preferences window
//!
//! App-wide settings: language, dark mode, font scale. Edits are staged in
//! a draft and only take effect on apply.

use crate::config::UiPreferences;
use crate::i18n::{self, tr, Language, TranslationKey};
use egui::{ComboBox, Context, Grid, Slider};

/// Draft edited inside the window, applied on confirm
#[derive(Debug, Clone)]
pub struct PreferencesDraft {
    pub language: Language,
    pub dark_mode: bool,
    pub font_scale: f32,
}

impl PreferencesDraft {
    fn from_preferences(prefs: &UiPreferences) -> Self {
        Self {
            language: i18n::current_language(),
            dark_mode: prefs.dark_mode,
            font_scale: prefs.font_scale,
        }
    }
}

/// The preferences window
#[derive(Default)]
pub struct PreferencesWindow {
    open: bool,
    draft: Option<PreferencesDraft>,
}

impl PreferencesWindow {
    /// Open the window seeded from the current preferences
    pub fn open_with(&mut self, prefs: &UiPreferences) {
        self.draft = Some(PreferencesDraft::from_preferences(prefs));
        self.open = true;
    }

    /// Render the window; returns the draft when the user applies it
    pub fn show(&mut self, ctx: &Context) -> Option<PreferencesDraft> {
        if !self.open {
            return None;
        }
        let Some(draft) = self.draft.as_mut() else {
            self.open = false;
            return None;
        };

        let mut applied = None;
        let mut close = false;
        let mut open = true;

        egui::Window::new(tr(TranslationKey::PrefTitle))
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading(tr(TranslationKey::PrefAppearance));
                ui.add_space(4.0);

                Grid::new("prefs_appearance_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label(format!("{}:", tr(TranslationKey::PrefLanguage)));
                        ComboBox::from_id_salt("language_selector")
                            .selected_text(draft.language.display_name())
                            .show_ui(ui, |ui| {
                                for lang in Language::all() {
                                    ui.selectable_value(
                                        &mut draft.language,
                                        *lang,
                                        lang.display_name(),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label(format!("{}:", tr(TranslationKey::PrefDarkMode)));
                        ui.checkbox(&mut draft.dark_mode, "");
                        ui.end_row();

                        ui.label(format!("{}:", tr(TranslationKey::PrefFontScale)));
                        ui.add(Slider::new(&mut draft.font_scale, 0.5..=2.0).step_by(0.1));
                        ui.end_row();
                    });

                ui.add_space(8.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button(tr(TranslationKey::DialogApply)).clicked() {
                        applied = Some(draft.clone());
                        close = true;
                    }
                    if ui.button(tr(TranslationKey::DialogCancel)).clicked() {
                        close = true;
                    }
                });
            });

        self.open = open && !close;
        if !self.open {
            self.draft = None;
        }

        applied
    }
}

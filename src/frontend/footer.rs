//! Site footer — attribution and contact links.

use crate::i18n::{tr, TranslationKey};
use chrono::Datelike;
use egui::{RichText, Ui};

/// Render the footer bar
pub fn render_footer(ui: &mut Ui) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let year = chrono::Local::now().year();
        ui.label(RichText::new(format!("© {}, {}", year, tr(TranslationKey::FooterBuiltWith))).small());
        ui.hyperlink_to(RichText::new("eframe").small(), "https://github.com/emilk/egui");

        ui.label(RichText::new(tr(TranslationKey::FooterCreatedBy)).small());

        ui.hyperlink_to(RichText::new("Github").small(), "https://github.com/ChenNima");

        ui.label(RichText::new("Email:").small());
        ui.hyperlink_to(
            RichText::new("fennu637@sina.com").small(),
            "mailto:fennu637@sina.com",
        );
    });
}

//! Home page — the latest posts and a link to the full list.

use super::{post_entry, PageAction};
use crate::content::Site;
use crate::i18n::{tr, TranslationKey};
use egui::Ui;

/// Render the home page
pub fn render_home(ui: &mut Ui, site: &Site) -> Option<PageAction> {
    let mut action = None;

    ui.add_space(8.0);
    ui.heading(tr(TranslationKey::HomeLatestPosts));
    ui.add_space(8.0);

    for post in site.latest() {
        if post_entry(ui, post) {
            action = Some(PageAction::OpenPost(post.slug.clone()));
        }
        ui.add_space(10.0);
    }

    if ui.link(tr(TranslationKey::HomeMore)).clicked() {
        action = Some(PageAction::ShowAllPosts);
    }

    action
}

//! Blog list page — every post, newest first.

use super::{post_entry, PageAction};
use crate::content::Site;
use crate::i18n::{tr, TranslationKey};
use egui::Ui;

/// Render the blog list page
pub fn render_blog_list(ui: &mut Ui, site: &Site) -> Option<PageAction> {
    let mut action = None;

    ui.add_space(8.0);
    ui.heading(tr(TranslationKey::BlogListHeadTitle));
    ui.add_space(8.0);

    for post in site.posts() {
        if post_entry(ui, post) {
            action = Some(PageAction::OpenPost(post.slug.clone()));
        }
        ui.add_space(10.0);
    }

    action
}

//! Central-panel pages.

mod blog_list;
mod home;
mod not_found;
mod post;

pub use blog_list::render_blog_list;
pub use home::render_home;
pub use not_found::render_not_found;
pub use post::render_post;

use crate::content::Post;
use egui::{Color32, RichText, Ui};

/// Navigation requests bubbling out of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    OpenPost(String),
    ShowAllPosts,
}

/// Date color used in listings and the post view
const DATE_COLOR: Color32 = Color32::from_rgb(140, 140, 140);

/// One post entry in a listing. Returns true when the title was clicked.
fn post_entry(ui: &mut Ui, post: &Post) -> bool {
    let clicked = ui
        .link(RichText::new(&post.title).strong().size(16.0))
        .clicked();
    ui.label(
        RichText::new(post.date.format("%B %d, %Y").to_string())
            .small()
            .color(DATE_COLOR),
    );
    ui.label(RichText::new(&post.summary).weak());
    clicked
}

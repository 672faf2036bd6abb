//! Frontend module for the egui UI
//!
//! The reader is a fixed shell: a header with the site brand, navigation
//! and the language toggle; a routed central page; a footer. Every frame
//! re-resolves its strings from the locale store, so a language change is
//! fully visible on the next repaint — no view can keep a stale locale.
//!
//! # Main Types
//!
//! - [`NotesApp`] - Main application state implementing [`eframe::App`]
//! - [`Page`] - Current route; unknown slugs render the not-found page
//!
//! # Submodules
//!
//! - `header` / `footer` - shell chrome
//! - `pages` - home, blog list, post and not-found views
//! - `preferences` - the preferences window

mod footer;
mod header;
mod pages;
mod preferences;

pub use header::HeaderAction;
pub use pages::PageAction;

use crate::config::AppState;
use crate::content::Site;
use crate::highlight::{CodeBlock, HighlightSession, HighlightSpan, Highlighter};
use crate::i18n::{self, tr, Language, TranslationKey};
use preferences::{PreferencesDraft, PreferencesWindow};
use std::collections::HashMap;
use std::time::Duration;

/// Current route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    BlogList,
    Post(String),
    NotFound,
}

/// Window title for a page: `"{page} | {site}"`, in the active language
pub fn window_title(page: &Page, site: &Site) -> String {
    let head = match page {
        Page::Home => tr(TranslationKey::HomeHeadTitle),
        Page::BlogList => tr(TranslationKey::BlogListHeadTitle),
        Page::Post(slug) => match site.find(slug) {
            Some(post) => post.title.clone(),
            None => tr(TranslationKey::NotFoundHeadTitle),
        },
        Page::NotFound => tr(TranslationKey::NotFoundHeadTitle),
    };
    format!("{} | {}", head, tr(TranslationKey::SiteTitle))
}

/// Highlight state for the currently open post
#[derive(Default)]
struct PostHighlights {
    /// In-flight work; dropped (and thereby cancelled) on navigation,
    /// cleared once every block has been delivered
    session: Option<HighlightSession>,
    /// Blocks the worker owes us for the open post
    expected: usize,
    /// Finished blocks, keyed by segment index
    blocks: HashMap<usize, Vec<HighlightSpan>>,
}

/// Main application state for the reader
pub struct NotesApp {
    // === Persistent state ===
    app_state: AppState,

    // === Content ===
    site: Site,

    // === Routing ===
    page: Page,

    // === Highlighting ===
    highlighter: Highlighter,
    highlights: PostHighlights,

    // === Dialogs ===
    preferences: PreferencesWindow,
}

impl NotesApp {
    /// Create the application, applying persisted appearance preferences
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        app_state: AppState,
        site: Site,
        highlighter: Highlighter,
    ) -> Self {
        let prefs = &app_state.ui_preferences;
        if prefs.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }
        cc.egui_ctx.set_zoom_factor(prefs.font_scale);

        Self {
            app_state,
            site,
            page: Page::Home,
            highlighter,
            highlights: PostHighlights::default(),
            preferences: PreferencesWindow::default(),
        }
    }

    /// Single write entry point for the active language.
    ///
    /// Order matters: the in-memory store changes first, then persistence
    /// is attempted, then the window title is re-localized. A failed save
    /// never undoes the store change and never reaches the caller.
    fn apply_language(&mut self, ctx: &egui::Context, lang: Language) {
        i18n::set_language(lang);
        self.app_state.ui_preferences.preferred_locale = Some(lang.code().to_string());
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to persist language preference: {}", e);
        }
        self.refresh_window_title(ctx);
    }

    fn apply_preferences(&mut self, ctx: &egui::Context, draft: PreferencesDraft) {
        let prefs = &mut self.app_state.ui_preferences;
        prefs.dark_mode = draft.dark_mode;
        prefs.font_scale = draft.font_scale;

        ctx.set_visuals(if draft.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        ctx.set_zoom_factor(draft.font_scale);

        // Persists the whole app state, appearance changes included
        self.apply_language(ctx, draft.language);
    }

    fn navigate(&mut self, ctx: &egui::Context, page: Page) {
        match &page {
            Page::Post(slug) => self.start_highlighting(slug),
            _ => self.highlights = PostHighlights::default(),
        }
        tracing::debug!("Navigating to {:?}", page);
        self.page = page;
        self.refresh_window_title(ctx);
    }

    fn start_highlighting(&mut self, slug: &str) {
        // Replacing the old state drops its session, cancelling in-flight work
        self.highlights = PostHighlights::default();

        let Some(post) = self.site.find(slug) else {
            return;
        };
        let blocks: Vec<CodeBlock> = post
            .code_blocks()
            .into_iter()
            .map(|(index, language, source)| CodeBlock {
                index,
                language: language.to_string(),
                source: source.to_string(),
            })
            .collect();
        if blocks.is_empty() {
            return;
        }

        self.highlights.expected = blocks.len();
        self.highlights.session = Some(self.highlighter.highlight(blocks));
    }

    fn refresh_window_title(&self, ctx: &egui::Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(window_title(
            &self.page, &self.site,
        )));
    }

    fn drain_highlights(&mut self) {
        let Some(session) = &self.highlights.session else {
            return;
        };
        for block in session.poll() {
            self.highlights.blocks.insert(block.index, block.spans);
        }
        if self.highlights.blocks.len() >= self.highlights.expected {
            // Everything delivered; nothing left to cancel
            self.highlights.session = None;
        }
    }
}

impl eframe::App for NotesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_highlights();

        let mut header_action = None;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            header_action = header::render_header(ui);
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(4.0);
            footer::render_footer(ui);
            ui.add_space(4.0);
        });

        let mut page_action = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink(false)
                .show(ui, |ui| {
                    page_action = match &self.page {
                        Page::Home => pages::render_home(ui, &self.site),
                        Page::BlogList => pages::render_blog_list(ui, &self.site),
                        Page::Post(slug) => match self.site.find(slug) {
                            Some(post) => pages::render_post(ui, post, &self.highlights.blocks),
                            None => pages::render_not_found(ui),
                        },
                        Page::NotFound => pages::render_not_found(ui),
                    };
                });
        });

        match header_action {
            Some(HeaderAction::GoHome) => self.navigate(ctx, Page::Home),
            Some(HeaderAction::GoBlogList) => self.navigate(ctx, Page::BlogList),
            Some(HeaderAction::ToggleLanguage) => {
                let next = i18n::current_language().other();
                self.apply_language(ctx, next);
            }
            Some(HeaderAction::OpenPreferences) => {
                self.preferences.open_with(&self.app_state.ui_preferences);
            }
            None => {}
        }

        match page_action {
            Some(PageAction::OpenPost(slug)) => self.navigate(ctx, Page::Post(slug)),
            Some(PageAction::ShowAllPosts) => self.navigate(ctx, Page::BlogList),
            None => {}
        }

        if let Some(draft) = self.preferences.show(ctx) {
            self.apply_preferences(ctx, draft);
        }

        // Worker results arrive outside the event loop; keep polling while
        // blocks are still owed
        if self.highlights.session.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

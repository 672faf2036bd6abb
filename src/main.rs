//! Tea Break Notes desktop reader - Main Entry Point

use anyhow::Context;
use teabreak_notes::config::AppState;
use teabreak_notes::content::Site;
use teabreak_notes::frontend::{self, NotesApp, Page};
use teabreak_notes::highlight::Highlighter;
use teabreak_notes::i18n::{self, SystemLanguage};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,teabreak_notes=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tea Break Notes reader");

    // Load persisted preferences; any failure falls back to defaults
    let app_state = AppState::load_or_default();

    // Resolve the startup language exactly once, before any UI reads the
    // store, and install it
    let language = i18n::resolve_language(&app_state, &SystemLanguage);
    i18n::set_language(language);
    tracing::info!("Resolved startup language: {}", language.code());

    // Malformed bundled content is a build defect; refuse to start rather
    // than render something wrong
    let site = Site::bundled().context("loading bundled content")?;
    tracing::info!("Loaded {} posts", site.posts().len());

    let highlighter = Highlighter::spawn();

    let initial_title = frontend::window_title(&Page::Home, &site);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(initial_title),
        ..Default::default()
    };

    eframe::run_native(
        "Tea Break Notes",
        native_options,
        Box::new(move |cc| Ok(Box::new(NotesApp::new(cc, app_state, site, highlighter)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))
}
